use std::{fs::File, io::BufReader, path::Path};

use crate::foundation::error::{ThumbError, ThumbResult};

/// The four inputs of one thumbnail run.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThumbnailJob {
    /// Background reference: URL, `file://` URL, or local path.
    pub background: String,
    pub top: String,
    pub middle: String,
    pub bottom: String,
}

impl ThumbnailJob {
    /// Read a job from a JSON file.
    pub fn from_path(path: &Path) -> ThumbResult<Self> {
        let f = File::open(path).map_err(|e| {
            ThumbError::validation(format!("open job '{}': {e}", path.display()))
        })?;
        serde_json::from_reader(BufReader::new(f))
            .map_err(|e| ThumbError::validation(format!("parse job '{}': {e}", path.display())))
    }

    /// Read a job from a JSON string.
    pub fn from_json(s: &str) -> ThumbResult<Self> {
        serde_json::from_str(s).map_err(|e| ThumbError::validation(format!("parse job: {e}")))
    }
}

#[cfg(test)]
#[path = "../tests/unit/job.rs"]
mod tests;
