//! Runtime configuration for API access and output locations.
//!
//! The API token is read from the environment once by the binary and passed
//! in explicitly; nothing in the library reads process-wide state after that.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Default case-law API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.case.law/v1";

/// Environment variable holding the API token.
pub const TOKEN_ENV_VAR: &str = "caselaw_api";

/// Environment variable overriding [`DEFAULT_BASE_URL`].
pub const BASE_URL_ENV_VAR: &str = "CASELAW_API_BASE_URL";

/// Default directory case PDFs are written to.
pub const DEFAULT_DOWNLOADS_DIR: &str = "downloads";

/// Default directory the search log CSV is written to.
pub const DEFAULT_LOGS_DIR: &str = "logs";

/// Errors building configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The API base URL could not be parsed
    #[error("invalid API base URL '{value}': {source}\n  Suggestion: set CASELAW_API_BASE_URL to an absolute http(s) URL")]
    InvalidBaseUrl {
        /// The rejected value
        value: String,
        /// Parse failure
        #[source]
        source: url::ParseError,
    },

    /// The API base URL parsed but cannot carry path segments
    #[error("API base URL '{value}' is not a hierarchical http(s) URL\n  Suggestion: set CASELAW_API_BASE_URL to an absolute http(s) URL")]
    UnsupportedBaseUrl {
        /// The rejected value
        value: String,
    },
}

/// Settings for talking to the case-law API.
#[derive(Clone)]
pub struct ApiConfig {
    base_url: Url,
    token: String,
    timeout: Option<Duration>,
}

impl ApiConfig {
    /// Creates a config for `base_url` authenticated with `token`.
    ///
    /// The token is not validated beyond what an HTTP header allows, which is
    /// checked when the client is built.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `base_url` is not an absolute http(s) URL.
    pub fn new(base_url: &str, token: impl Into<String>) -> Result<Self, ConfigError> {
        let parsed = Url::parse(base_url).map_err(|source| ConfigError::InvalidBaseUrl {
            value: base_url.to_string(),
            source,
        })?;
        if parsed.cannot_be_a_base() || !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedBaseUrl {
                value: base_url.to_string(),
            });
        }
        Ok(Self {
            base_url: parsed,
            token: token.into(),
            timeout: None,
        })
    }

    /// Builds a config from [`TOKEN_ENV_VAR`] and [`BASE_URL_ENV_VAR`].
    ///
    /// An unset token becomes an empty string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the base URL override is invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = std::env::var(BASE_URL_ENV_VAR)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let token = std::env::var(TOKEN_ENV_VAR).unwrap_or_default();
        Self::new(&base_url, token)
    }

    /// Sets a whole-request timeout. Requests have no timeout by default.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// API base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// API token (may be empty).
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Configured request timeout, if any.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url.as_str())
            .field("token_set", &!self.token.is_empty())
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Output locations for one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Directory case PDFs are written to. Must exist.
    pub downloads_dir: PathBuf,
    /// Directory the search log CSV is written to. Must exist.
    pub logs_dir: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            downloads_dir: PathBuf::from(DEFAULT_DOWNLOADS_DIR),
            logs_dir: PathBuf::from(DEFAULT_LOGS_DIR),
        }
    }
}
