use std::path::{Path, PathBuf};

use crate::foundation::error::{ThumbError, ThumbResult};

/// Header value sent with background requests; some image hosts reject clients without one.
pub const USER_AGENT: &str = "Mozilla/5.0";

/// Where the background photo comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BackgroundSource {
    /// `http://` or `https://` URL fetched with a blocking GET.
    Url(String),
    /// Local file, given as a plain path or a `file://` URL.
    File(PathBuf),
}

impl BackgroundSource {
    /// Classify a user-supplied reference.
    pub fn parse(reference: &str) -> ThumbResult<Self> {
        let reference = reference.trim();
        if reference.is_empty() {
            return Err(ThumbError::validation(
                "background reference must be non-empty",
            ));
        }

        let lower = reference.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            return Ok(Self::Url(reference.to_string()));
        }
        if let Some(rest) = reference.strip_prefix("file://") {
            if rest.is_empty() {
                return Err(ThumbError::validation("file:// reference has no path"));
            }
            return Ok(Self::File(PathBuf::from(rest)));
        }
        if lower.contains("://") {
            return Err(ThumbError::validation(format!(
                "unsupported background scheme in '{reference}'"
            )));
        }
        Ok(Self::File(PathBuf::from(reference)))
    }

    /// Read the raw, still-encoded background bytes.
    #[tracing::instrument(skip(self), fields(source = %self))]
    pub fn fetch(&self) -> ThumbResult<Vec<u8>> {
        let bytes = match self {
            Self::Url(url) => fetch_url(url)?,
            Self::File(path) => read_file(path)?,
        };
        tracing::debug!(len = bytes.len(), "background bytes acquired");
        Ok(bytes)
    }
}

impl std::fmt::Display for BackgroundSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Url(url) => f.write_str(url),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

fn fetch_url(url: &str) -> ThumbResult<Vec<u8>> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| ThumbError::fetch(format!("build http client: {e}")))?;

    let response = client
        .get(url)
        .send()
        .map_err(|e| ThumbError::fetch(format!("GET '{url}': {e}")))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ThumbError::fetch(format!("GET '{url}' returned {status}")));
    }

    let body = response
        .bytes()
        .map_err(|e| ThumbError::fetch(format!("read body of '{url}': {e}")))?;
    Ok(body.to_vec())
}

fn read_file(path: &Path) -> ThumbResult<Vec<u8>> {
    std::fs::read(path)
        .map_err(|e| ThumbError::fetch(format!("read background '{}': {e}", path.display())))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/fetch.rs"]
mod tests;
