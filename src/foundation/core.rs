/// Output canvas width in pixels.
pub const CANVAS_WIDTH: u32 = 1280;
/// Output canvas height in pixels.
pub const CANVAS_HEIGHT: u32 = 720;

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const WHITE: Self = Self::opaque(255, 255, 255);
    pub const BLACK: Self = Self::opaque(0, 0, 0);

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub(crate) fn to_paint(self) -> vello_cpu::peniko::Color {
        vello_cpu::peniko::Color::from_rgba8(self.r, self.g, self.b, self.a)
    }
}

/// Fixed visual style of a thumbnail.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Style {
    pub margin_left_px: f32,
    pub margin_bottom_px: f32,
    pub size_bottom_px: f32,
    pub size_mid_px: f32,
    pub size_top_px: f32,
    /// Added back to the middle line's rise above the bottom anchor.
    pub mid_correction_px: f32,
    /// Added back to the top line's rise above the middle anchor.
    pub top_correction_px: f32,
    /// Outline offsets span `-outline_radius_px..=outline_radius_px` on both axes.
    pub outline_radius_px: i32,
    pub fill: Rgba8,
    pub outline: Rgba8,
}

/// The one style every thumbnail is drawn with.
pub const STYLE: Style = Style {
    margin_left_px: 6.0,
    margin_bottom_px: 10.0,
    size_bottom_px: 72.0,
    size_mid_px: 148.0,
    size_top_px: 96.0,
    mid_correction_px: 34.0,
    top_correction_px: 24.0,
    outline_radius_px: 2,
    fill: Rgba8::WHITE,
    outline: Rgba8::BLACK,
};

/// A finished raster as straight-alpha RGBA8, tightly packed and row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl Raster {
    /// Pixel at `(x, y)`, or `None` outside the raster.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

pub(crate) fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 255 {
            continue;
        }
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

pub(crate) fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u32;
        if a == 255 || a == 0 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u32::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
