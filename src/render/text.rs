use crate::{
    assets::font::FontFace,
    foundation::core::{Rgba8, STYLE},
    foundation::error::ThumbResult,
    layout::solver::TextLine,
    render::canvas::Canvas,
};

/// Offsets of the outline pass: every integer `(dx, dy)` within `radius` on both axes except the
/// center. Radius 2 yields 24 positions, `dx` outer and `dy` inner.
pub fn outline_offsets(radius: i32) -> impl Iterator<Item = (i32, i32)> {
    (-radius..=radius)
        .flat_map(move |dx| (-radius..=radius).map(move |dy| (dx, dy)))
        .filter(|&offset| offset != (0, 0))
}

/// Paint `text` with a black stroke outline and a white fill.
///
/// `(anchor_x, anchor_y)` is the bottom-left of the glyph run: text starts at `anchor_x` and its
/// baseline sits on `anchor_y`. The outline pass draws the text in the outline color once per
/// [`outline_offsets`] position, then the fill pass draws it once at the anchor on top.
pub fn draw_outlined(
    canvas: &mut Canvas,
    font: &mut FontFace,
    text: &str,
    anchor_x: f32,
    anchor_y: f32,
    font_size_px: f32,
) -> ThumbResult<()> {
    if text.is_empty() {
        return font.check_size(font_size_px);
    }

    let layout = font.shape(text, font_size_px)?;
    let glyphs = baseline_relative_glyphs(&layout);
    if glyphs.is_empty() {
        return Ok(());
    }

    let mut ctx = canvas.layer_context()?;
    for (dx, dy) in outline_offsets(STYLE.outline_radius_px) {
        let x = anchor_x + dx as f32;
        let y = anchor_y + dy as f32;
        paint_glyphs(&mut ctx, font, &glyphs, font_size_px, x, y, STYLE.outline);
    }
    paint_glyphs(
        &mut ctx,
        font,
        &glyphs,
        font_size_px,
        anchor_x,
        anchor_y,
        STYLE.fill,
    );

    canvas.blend_layer(ctx)
}

/// [`draw_outlined`] for a line computed by the layout engine.
#[tracing::instrument(skip(canvas, font), fields(text = %line.content))]
pub fn draw_line(canvas: &mut Canvas, font: &mut FontFace, line: &TextLine) -> ThumbResult<()> {
    draw_outlined(
        canvas,
        font,
        &line.content,
        line.anchor_x,
        line.anchor_y,
        line.font_size_px,
    )
}

/// Glyph positions with the first line's baseline at y = 0.
fn baseline_relative_glyphs(layout: &parley::Layout<()>) -> Vec<vello_cpu::Glyph> {
    let Some(baseline) = layout.lines().next().map(|line| line.metrics().baseline) else {
        return Vec::new();
    };

    let mut out = Vec::new();
    for line in layout.lines() {
        for item in line.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                continue;
            };
            out.extend(run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                id: g.id,
                x: g.x,
                y: g.y - baseline,
            }));
        }
    }
    out
}

fn paint_glyphs(
    ctx: &mut vello_cpu::RenderContext,
    font: &FontFace,
    glyphs: &[vello_cpu::Glyph],
    font_size_px: f32,
    x: f32,
    y: f32,
    color: Rgba8,
) {
    ctx.set_transform(vello_cpu::kurbo::Affine::translate((
        f64::from(x),
        f64::from(y),
    )));
    ctx.set_paint(color.to_paint());
    ctx.glyph_run(font.paint_font())
        .font_size(font_size_px)
        .fill_glyphs(glyphs.iter().cloned());
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
