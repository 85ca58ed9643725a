//! Input acquisition: background bytes, raster decoding and the display font.

pub mod decode;
pub mod fetch;
pub mod font;
