//! CPU rasterization: the canvas surface, layer blending and outlined text.

pub mod blend;
pub mod canvas;
pub mod text;
