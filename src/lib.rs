//! thumbgen renders fixed-layout video thumbnails.
//!
//! A thumbnail is a background photo stretched to a 1280x720 canvas with three lines of white,
//! black-outlined text stacked from the bottom-left corner upwards.
//!
//! # Pipeline overview
//!
//! 1. **Acquire**: [`BackgroundSource`] fetches the background bytes (HTTP GET or local file)
//! 2. **Composite**: [`Canvas::composite`] resamples the decoded image onto the canvas
//! 3. **Layout**: [`layout`] stacks the bottom, middle and top anchors
//! 4. **Draw**: [`draw_outlined`] paints each line, outline pass first, fill pass last
//! 5. **Emit**: [`Canvas::into_raster`] and [`write_png`]
//!
//! Every error is fatal to the run and nothing is retried. Identical inputs produce
//! byte-identical rasters.
#![forbid(unsafe_code)]

mod assets;
mod foundation;
mod job;
mod layout;
mod output;
mod pipeline;
mod render;

pub use assets::decode::decode_image;
pub use assets::fetch::{BackgroundSource, USER_AGENT};
pub use assets::font::{DEFAULT_FONT_FILE, FontFace, default_font_path};
pub use foundation::core::{CANVAS_HEIGHT, CANVAS_WIDTH, Raster, Rgba8, STYLE, Style};
pub use foundation::error::{ThumbError, ThumbResult};
pub use job::ThumbnailJob;
pub use layout::solver::{LineAnchors, LineSizes, TextLine, layout, layout_lines};
pub use output::{DEFAULT_OUTPUT, write_png};
pub use pipeline::{Thumbnailer, generate, generate_job};
pub use render::canvas::Canvas;
pub use render::text::{draw_line, draw_outlined, outline_offsets};
