use std::path::Path;

use crate::foundation::{
    core::Raster,
    error::{ThumbError, ThumbResult},
};

/// Default output file, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "thumbnail.png";

/// Encode `raster` as PNG at `path`, creating parent directories as needed.
#[tracing::instrument(skip(raster))]
pub fn write_png(raster: &Raster, path: &Path) -> ThumbResult<()> {
    if raster.data.len() != raster.width as usize * raster.height as usize * 4 {
        return Err(ThumbError::write(format!(
            "raster byte length {} does not match {}x{} rgba8",
            raster.data.len(),
            raster.width,
            raster.height
        )));
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            ThumbError::write(format!("create output dir '{}': {e}", parent.display()))
        })?;
    }

    image::save_buffer_with_format(
        path,
        &raster.data,
        raster.width,
        raster.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| ThumbError::write(format!("write png '{}': {e}", path.display())))?;

    tracing::info!(path = %path.display(), "wrote thumbnail");
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/output.rs"]
mod tests;
