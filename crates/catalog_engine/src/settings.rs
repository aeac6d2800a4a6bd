use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Environment variable naming the backend root, e.g. `http://localhost:8000`.
pub const API_URL_ENV: &str = "MODEL_CATALOG_API_URL";
/// Optional override of the per-request timeout, in whole seconds.
pub const TIMEOUT_ENV: &str = "MODEL_CATALOG_TIMEOUT_SECS";
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

const API_PREFIX: &str = "api/v1";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid api base url {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("invalid timeout {0:?}: expected a positive number of seconds")]
    InvalidTimeout(String),
    #[error("could not build http client: {0}")]
    HttpClient(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    /// Largest response body accepted from any endpoint.
    pub max_bytes: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            connect_timeout: Duration::from_secs(5),
            request_timeout: Duration::from_secs(10),
            max_bytes: 8 * 1024 * 1024,
        }
    }
}

impl ApiSettings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup; unset keys keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();
        if let Some(url) = lookup(API_URL_ENV).filter(|url| !url.trim().is_empty()) {
            settings.base_url = url.trim().to_string();
        }
        if let Some(raw) = lookup(TIMEOUT_ENV) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| ConfigError::InvalidTimeout(raw.clone()))?;
            settings.request_timeout = Duration::from_secs(secs);
        }
        settings.api_root()?;
        Ok(settings)
    }

    /// `{base_url}/api/v1/`, validated. The trailing slash lets endpoints be joined.
    pub fn api_root(&self) -> Result<Url, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason,
        };
        let base = Url::parse(&self.base_url).map_err(|err| invalid(err.to_string()))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme {}", base.scheme())));
        }
        if base.cannot_be_a_base() || base.query().is_some() {
            return Err(invalid("expected a plain http(s) origin or path".to_string()));
        }
        let root = format!("{}/{API_PREFIX}/", base.as_str().trim_end_matches('/'));
        Url::parse(&root).map_err(|err| invalid(err.to_string()))
    }
}
