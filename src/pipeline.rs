use std::path::Path;

use crate::{
    assets::{decode::decode_image, fetch::BackgroundSource, font::FontFace},
    foundation::core::{CANVAS_HEIGHT, Raster, STYLE},
    foundation::error::ThumbResult,
    job::ThumbnailJob,
    layout::solver::layout_lines,
    render::{canvas::Canvas, text::draw_line},
};

/// Fetch, compose and render one thumbnail.
///
/// This is the primary one-shot API. The font at `font_path` is read once for the run.
///
/// Pipeline:
/// 1. [`BackgroundSource::fetch`] and decode (fails before any canvas exists)
/// 2. [`FontFace::load`]
/// 3. [`Thumbnailer::render`]
#[tracing::instrument(skip(top, mid, bottom))]
pub fn generate(
    source: &BackgroundSource,
    top: &str,
    mid: &str,
    bottom: &str,
    font_path: &Path,
) -> ThumbResult<Raster> {
    let background = decode_image(&source.fetch()?)?;
    let mut thumbnailer = Thumbnailer::new(FontFace::load(font_path)?);
    thumbnailer.render(&background, top, mid, bottom)
}

/// [`generate`] driven by a [`ThumbnailJob`].
pub fn generate_job(job: &ThumbnailJob, font_path: &Path) -> ThumbResult<Raster> {
    let source = BackgroundSource::parse(&job.background)?;
    generate(&source, &job.top, &job.middle, &job.bottom, font_path)
}

/// Thumbnail renderer bound to an already loaded font.
///
/// Holds no per-run state besides the font: every call builds its own canvas, and identical
/// inputs produce byte-identical rasters.
#[derive(Debug)]
pub struct Thumbnailer {
    font: FontFace,
}

impl Thumbnailer {
    pub fn new(font: FontFace) -> Self {
        Self { font }
    }

    /// Decode still-encoded background bytes, then [`Thumbnailer::render`] onto them.
    pub fn generate_from_bytes(
        &mut self,
        background: &[u8],
        top: &str,
        mid: &str,
        bottom: &str,
    ) -> ThumbResult<Raster> {
        let background = decode_image(background)?;
        self.render(&background, top, mid, bottom)
    }

    /// Composite `background` and draw the bottom, middle, then top line over it.
    #[tracing::instrument(skip_all)]
    pub fn render(
        &mut self,
        background: &image::DynamicImage,
        top: &str,
        mid: &str,
        bottom: &str,
    ) -> ThumbResult<Raster> {
        let mut canvas = Canvas::composite(background)?;
        for line in layout_lines(CANVAS_HEIGHT as f32, [top, mid, bottom], &STYLE) {
            draw_line(&mut canvas, &mut self.font, &line)?;
        }
        Ok(canvas.into_raster())
    }
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
