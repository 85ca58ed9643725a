use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::foundation::error::{ThumbError, ThumbResult};

/// File name of the display face, looked up in the user-local font directory.
pub const DEFAULT_FONT_FILE: &str = "BebasNeue-Regular.ttf";

/// `~/.local/share/fonts/BebasNeue-Regular.ttf`.
pub fn default_font_path() -> ThumbResult<PathBuf> {
    let home = std::env::home_dir()
        .ok_or_else(|| ThumbError::font_load("cannot resolve the user's home directory"))?;
    Ok(home
        .join(".local")
        .join("share")
        .join("fonts")
        .join(DEFAULT_FONT_FILE))
}

/// A loaded outline font plus the Parley contexts used to shape text with it.
///
/// The face is read from disk once per run and reused for every line.
pub struct FontFace {
    font_bytes: Arc<Vec<u8>>,
    family: String,
    paint_font: vello_cpu::peniko::FontData,
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<()>,
}

impl std::fmt::Debug for FontFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontFace")
            .field("family", &self.family)
            .field("font_bytes_len", &self.font_bytes.len())
            .finish()
    }
}

impl FontFace {
    /// Read and register the font at `path`.
    #[tracing::instrument]
    pub fn load(path: &Path) -> ThumbResult<Self> {
        let bytes = std::fs::read(path)
            .map_err(|e| ThumbError::font_load(format!("read font '{}': {e}", path.display())))?;
        Self::from_bytes(bytes)
    }

    /// Register an in-memory font file (TTF/OTF, first face).
    pub fn from_bytes(font_bytes: Vec<u8>) -> ThumbResult<Self> {
        let font_bytes = Arc::new(font_bytes);
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::new(font_bytes.clone()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| ThumbError::font_load("no font families registered from font bytes"))?;
        let family = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| ThumbError::font_load("registered font family has no name"))?
            .to_string();
        tracing::debug!(%family, len = font_bytes.len(), "registered font");

        let paint_font =
            vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::new(font_bytes.clone()), 0);

        Ok(Self {
            font_bytes,
            family,
            paint_font,
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
        })
    }

    /// Family name reported by the font's name table.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Raw font file bytes.
    pub fn bytes(&self) -> &[u8] {
        self.font_bytes.as_slice()
    }

    pub(crate) fn paint_font(&self) -> &vello_cpu::peniko::FontData {
        &self.paint_font
    }

    /// Fail unless glyphs can be rasterized at `size_px`.
    pub fn check_size(&self, size_px: f32) -> ThumbResult<()> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(ThumbError::font_load(format!(
                "font '{}' cannot be used at size {size_px}px",
                self.family
            )));
        }
        Ok(())
    }

    /// Shape `text` as a single unwrapped line at `size_px`.
    ///
    /// Hard line breaks are shaped as spaces.
    pub fn shape(&mut self, text: &str, size_px: f32) -> ThumbResult<parley::Layout<()>> {
        self.check_size(size_px)?;
        let text = single_line(text);
        let text = text.as_ref();

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));

        let mut layout: parley::Layout<()> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }
}

fn is_hard_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

fn single_line(text: &str) -> std::borrow::Cow<'_, str> {
    if text.contains(is_hard_break) {
        std::borrow::Cow::Owned(
            text.chars()
                .map(|c| if is_hard_break(c) { ' ' } else { c })
                .collect(),
        )
    } else {
        std::borrow::Cow::Borrowed(text)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/font.rs"]
mod tests;
