/// Convenience result type used across thumbgen.
pub type ThumbResult<T> = Result<T, ThumbError>;

/// Error taxonomy for a thumbnail run.
///
/// Every variant is fatal to the run it occurs in: nothing is retried and no partial output is
/// written.
#[derive(thiserror::Error, Debug)]
pub enum ThumbError {
    /// Background source unreachable or answered with a non-success status.
    #[error("fetch error: {0}")]
    Fetch(String),

    /// Background bytes are not a decodable raster image.
    #[error("decode error: {0}")]
    Decode(String),

    /// Font resource missing, unreadable, or unusable at the requested size.
    #[error("font load error: {0}")]
    FontLoad(String),

    /// Output raster could not be persisted.
    #[error("write error: {0}")]
    Write(String),

    /// Malformed job input (job file, CLI arguments).
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ThumbError {
    /// Build a [`ThumbError::Fetch`] value.
    pub fn fetch(msg: impl Into<String>) -> Self {
        Self::Fetch(msg.into())
    }

    /// Build a [`ThumbError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`ThumbError::FontLoad`] value.
    pub fn font_load(msg: impl Into<String>) -> Self {
        Self::FontLoad(msg.into())
    }

    /// Build a [`ThumbError::Write`] value.
    pub fn write(msg: impl Into<String>) -> Self {
        Self::Write(msg.into())
    }

    /// Build a [`ThumbError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
