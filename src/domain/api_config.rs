use url::Url;

use crate::domain::AppError;

/// Public GitHub REST endpoint, used when the runner does not provide one.
const DEFAULT_API_URL: &str = "https://api.github.com";

/// GitHub REST API configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubApiConfig {
    /// REST base URL (`GITHUB_API_URL` on GitHub Enterprise Server).
    pub api_url: Url,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl GitHubApiConfig {
    pub fn new(api_url: Url) -> Self {
        Self { api_url, timeout_secs: default_timeout() }
    }

    /// Parse a base URL, falling back to [`DEFAULT_API_URL`] when blank.
    pub fn from_url_str(raw: Option<&str>) -> Result<Self, AppError> {
        let raw = raw.map(str::trim).filter(|value| !value.is_empty()).unwrap_or(DEFAULT_API_URL);
        let api_url = Url::parse(raw).map_err(|e| AppError::ParseError {
            what: "GITHUB_API_URL".into(),
            details: format!("'{}': {}", raw, e),
        })?;
        Ok(Self::new(api_url))
    }
}

fn default_timeout() -> u64 {
    30
}
