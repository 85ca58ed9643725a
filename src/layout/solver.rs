use crate::foundation::core::Style;

/// Font size per line, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSizes {
    pub top: f32,
    pub mid: f32,
    pub bottom: f32,
}

impl LineSizes {
    pub fn from_style(style: &Style) -> Self {
        Self {
            top: style.size_top_px,
            mid: style.size_mid_px,
            bottom: style.size_bottom_px,
        }
    }
}

/// Vertical anchor (bottom of the glyph run) per line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineAnchors {
    pub top: f32,
    pub mid: f32,
    pub bottom: f32,
}

/// One positioned line of text.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLine {
    pub content: String,
    pub anchor_x: f32,
    pub anchor_y: f32,
    pub font_size_px: f32,
}

/// Stack the three lines bottom-up from the canvas floor.
///
/// Each line rises by its own font size above the line below it, less a fixed correction, so
/// the stack is tighter than naive full-size spacing. Anchors are not clamped: oversized fonts
/// may push lines above the canvas.
pub fn layout(canvas_height: f32, sizes: LineSizes, style: &Style) -> LineAnchors {
    let bottom = canvas_height - sizes.bottom + style.margin_bottom_px;
    let mid = bottom - sizes.mid + style.mid_correction_px;
    let top = mid - sizes.top + style.top_correction_px;
    LineAnchors { top, mid, bottom }
}

/// Lay out `[top, middle, bottom]` texts and return them in draw order: bottom, middle, top.
pub fn layout_lines(canvas_height: f32, texts: [&str; 3], style: &Style) -> [TextLine; 3] {
    let sizes = LineSizes::from_style(style);
    let anchors = layout(canvas_height, sizes, style);
    tracing::debug!(?anchors, "computed line anchors");

    let [top, mid, bottom] = texts;
    let line = |content: &str, anchor_y: f32, font_size_px: f32| TextLine {
        content: content.to_string(),
        anchor_x: style.margin_left_px,
        anchor_y,
        font_size_px,
    };
    [
        line(bottom, anchors.bottom, sizes.bottom),
        line(mid, anchors.mid, sizes.mid),
        line(top, anchors.top, sizes.top),
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/layout/solver.rs"]
mod tests;
