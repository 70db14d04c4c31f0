//! Shared HTTP client construction for the case-law API.
//!
//! Search and fetch requests go through one client so they share the
//! connection pool, the authorization header and the user-agent.

use reqwest::Client;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::user_agent;

use super::ApiError;

/// Builds the `Authorization: Token <value>` header value.
///
/// # Errors
///
/// Returns [`ApiError::InvalidToken`] when the token holds characters that
/// cannot appear in a header (newlines, control characters).
pub(crate) fn authorization_value(token: &str) -> Result<HeaderValue, ApiError> {
    let mut value =
        HeaderValue::from_str(&format!("Token {token}")).map_err(|_| ApiError::InvalidToken)?;
    value.set_sensitive(true);
    Ok(value)
}

/// Builds the API client from configuration.
///
/// No timeout is applied unless the config sets one.
///
/// # Errors
///
/// Returns [`ApiError`] when the token is not a valid header value or the
/// client cannot be constructed.
pub(crate) fn build_api_http_client(config: &ApiConfig) -> Result<Client, ApiError> {
    if config.token().is_empty() {
        warn!("caselaw_api is not set; requests will carry an empty token");
    }

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, authorization_value(config.token())?);

    let mut builder = Client::builder()
        .default_headers(headers)
        .user_agent(user_agent::default_api_user_agent())
        .gzip(true);

    if let Some(timeout) = config.timeout() {
        debug!(timeout_secs = timeout.as_secs(), "request timeout enabled");
        builder = builder.timeout(timeout);
    }

    builder
        .build()
        .map_err(|source| ApiError::ClientBuild { source })
}
