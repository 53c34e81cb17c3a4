use crate::media::MediaKind;
use url::Url;

/// Name of the setting holding the detection API base URL.
pub const API_URL_KEY: &str = "DETECTION_API_URL";

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("DETECTION_API_URL is not set")]
    Missing,
    #[error("DETECTION_API_URL is not a valid URL: {0}")]
    Invalid(String),
    #[error("DETECTION_API_URL must use http or https, got {0}")]
    UnsupportedScheme(String),
}

/// Connection settings for the detection API.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    base_url: Url,
}

impl ApiConfig {
    pub fn new(raw: &str) -> Result<Self, ConfigError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(ConfigError::Missing);
        }

        let base_url = Url::parse(raw).map_err(|e| ConfigError::Invalid(e.to_string()))?;
        match base_url.scheme() {
            "http" | "https" => Ok(Self { base_url }),
            other => Err(ConfigError::UnsupportedScheme(other.to_string())),
        }
    }

    /// Picks the first non-empty candidate, in priority order, and validates it.
    pub fn from_candidates<'a, I>(candidates: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        let raw = candidates
            .into_iter()
            .flatten()
            .find(|value| !value.trim().is_empty())
            .ok_or(ConfigError::Missing)?;
        Self::new(raw)
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    pub fn endpoint(&self, kind: MediaKind) -> String {
        format!("{}{}", self.base_url(), kind.endpoint_path())
    }
}

/// Browser storage may hold the URL bare (`http://host`) or JSON-encoded
/// (`"http://host"`, as written by typed storage helpers). Both read the same.
pub fn unquote_stored(raw: &str) -> &str {
    let raw = raw.trim();
    raw.strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(raw)
}
