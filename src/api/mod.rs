//! Client for the case-law API.
//!
//! # Architecture
//!
//! - [`CaseLawClient`] - Authenticated HTTP client bound to an API base URL
//! - [`QueryResolver`] - Runs a case search and picks the first-ranked match
//! - [`CaseFetcher`] - Downloads a resolved case rendered as PDF
//! - [`ApiError`] - Transport, status and decode failures
//!
//! # Example
//!
//! ```no_run
//! use caselaw_core::api::{CaseFetcher, CaseLawClient, QueryResolver, Resolution};
//! use caselaw_core::config::ApiConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = CaseLawClient::new(&ApiConfig::from_env()?)?;
//! let resolver = QueryResolver::new(client.clone());
//! if let Resolution::Resolved(case) = resolver.resolve("Marbury v. Madison").await? {
//!     let pdf = CaseFetcher::new(client).fetch_pdf(&case.id).await?;
//!     println!("{}: {} bytes", case.name, pdf.len());
//! }
//! # Ok(())
//! # }
//! ```

mod error;
mod fetch;
mod http_client;
mod search;

pub use error::ApiError;
pub use fetch::CaseFetcher;
pub use search::{QueryResolver, Resolution, ResolvedCase};

use reqwest::Client;
use url::Url;

use crate::config::ApiConfig;

/// Authenticated HTTP client bound to an API base URL.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct CaseLawClient {
    http: Client,
    base_url: Url,
}

impl CaseLawClient {
    /// Builds a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the token cannot be used as a header value or
    /// the HTTP client cannot be constructed.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = http_client::build_api_http_client(config)?;
        Ok(Self {
            http,
            base_url: config.base_url().clone(),
        })
    }

    /// API base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds `{base_url}/{segments...}/` with each segment percent-encoded.
    #[must_use]
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.set_fragment(None);
        // Base URLs are validated as hierarchical in ApiConfig.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments).push("");
        }
        url
    }

    /// Canonical URL of a case, used when search results omit one.
    #[must_use]
    pub fn case_url(&self, case_id: &str) -> String {
        self.endpoint(&["cases", case_id]).into()
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
}
