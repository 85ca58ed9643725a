use crate::foundation::error::{ThumbError, ThumbResult};

/// Decode raster bytes (PNG, JPEG, and the other formats `image` enables by default).
pub fn decode_image(bytes: &[u8]) -> ThumbResult<image::DynamicImage> {
    if bytes.is_empty() {
        return Err(ThumbError::decode("background is empty"));
    }
    let img = image::load_from_memory(bytes)
        .map_err(|e| ThumbError::decode(format!("decode background image: {e}")))?;
    tracing::debug!(
        width = img.width(),
        height = img.height(),
        "decoded background"
    );
    Ok(img)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
