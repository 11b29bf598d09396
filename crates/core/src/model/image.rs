use thiserror::Error;
use url::Url;

//
// ─── ERRORS (domain validation) ────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ImageRefError {
    #[error("image reference cannot be empty")]
    Empty,

    #[error("image URL is not valid: {0}")]
    InvalidUrl(String),
}

//
// ─── IMAGE REFERENCE ───────────────────────────────────────────────────────────
//

/// Where a supporting illustration lives.
///
/// Question art ships with the app as relative asset paths; pet photos are
/// externally hosted URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageRef {
    Asset(String),
    Remote(Url),
}

impl ImageRef {
    /// Classifies a raw reference string as a bundled asset or a remote URL.
    ///
    /// # Errors
    ///
    /// Returns `ImageRefError::Empty` for blank input and
    /// `ImageRefError::InvalidUrl` when an `http(s)` reference fails to parse.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, ImageRefError> {
        let s = raw.as_ref().trim();
        if s.is_empty() {
            return Err(ImageRefError::Empty);
        }
        if s.starts_with("http://") || s.starts_with("https://") {
            let url = Url::parse(s).map_err(|e| ImageRefError::InvalidUrl(e.to_string()))?;
            return Ok(ImageRef::Remote(url));
        }
        Ok(ImageRef::Asset(s.to_owned()))
    }

    /// The reference as a renderable `src` string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            ImageRef::Asset(p) => p,
            ImageRef::Remote(u) => u.as_str(),
        }
    }

    #[must_use]
    pub fn as_url(&self) -> Option<&Url> {
        match self {
            ImageRef::Remote(u) => Some(u),
            ImageRef::Asset(_) => None,
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
