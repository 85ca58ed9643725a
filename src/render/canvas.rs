use image::imageops::FilterType;

use crate::{
    foundation::core::{
        CANVAS_HEIGHT, CANVAS_WIDTH, Raster, premultiply_rgba8_in_place,
        unpremultiply_rgba8_in_place,
    },
    foundation::error::{ThumbError, ThumbResult},
    render::blend,
};

/// The fixed 1280x720 drawing surface of one run, stored as premultiplied RGBA8.
pub struct Canvas {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

impl Canvas {
    /// Stretch `background` over the whole canvas.
    ///
    /// The image is resampled with Lanczos3 to exactly the canvas size; its aspect ratio is not
    /// kept and nothing from a previous surface survives.
    #[tracing::instrument(skip(background), fields(src_w = background.width(), src_h = background.height()))]
    pub fn composite(background: &image::DynamicImage) -> ThumbResult<Self> {
        if background.width() == 0 || background.height() == 0 {
            return Err(ThumbError::decode("background image has no pixels"));
        }

        let resized = background.resize_exact(CANVAS_WIDTH, CANVAS_HEIGHT, FilterType::Lanczos3);
        let mut data = resized.to_rgba8().into_raw();
        premultiply_rgba8_in_place(&mut data);

        Ok(Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Fresh transparent rasterization context covering the canvas.
    pub(crate) fn layer_context(&self) -> ThumbResult<vello_cpu::RenderContext> {
        let (w, h) = self.size_u16()?;
        Ok(vello_cpu::RenderContext::new(w, h))
    }

    /// Flush `ctx` and composite its output over the current surface.
    pub(crate) fn blend_layer(&mut self, mut ctx: vello_cpu::RenderContext) -> ThumbResult<()> {
        let (w, h) = self.size_u16()?;
        ctx.flush();
        let mut layer = vello_cpu::Pixmap::new(w, h);
        ctx.render_to_pixmap(&mut layer);
        blend::over_in_place(&mut self.data, layer.data_as_u8_slice())
    }

    /// Finish the run: convert the surface to a straight-alpha raster.
    pub fn into_raster(self) -> Raster {
        let mut data = self.data;
        unpremultiply_rgba8_in_place(&mut data);
        Raster {
            width: self.width,
            height: self.height,
            data,
        }
    }

    fn size_u16(&self) -> ThumbResult<(u16, u16)> {
        let w: u16 = self
            .width
            .try_into()
            .map_err(|_| ThumbError::validation("canvas width exceeds u16"))?;
        let h: u16 = self
            .height
            .try_into()
            .map_err(|_| ThumbError::validation("canvas height exceeds u16"))?;
        Ok((w, h))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
