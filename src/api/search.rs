//! Case search: resolves a free-text query to the first-ranked case.
//!
//! The search endpoint returns `{"results": [{"id", "name", "url"}, ...]}`
//! ordered by relevance. Ranking is left entirely to the service; the first
//! result is taken as the match without further validation.

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument};

use super::{ApiError, CaseLawClient};

// ==================== Search API Response Types ====================

/// Top-level search response.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub results: Option<Vec<SearchHit>>,
}

/// A single ranked search result.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchHit {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

// ==================== Resolution ====================

/// The first-ranked case for a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCase {
    /// Case identifier used by the fetch endpoint.
    pub id: String,
    /// Display name (case title).
    pub name: String,
    /// Canonical URL of the case.
    pub url: String,
}

/// Outcome of resolving one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The service reported zero matches.
    NoResults,
    /// A first match exists but its identifier or name is missing or empty.
    Incomplete,
    /// The first-ranked match.
    Resolved(ResolvedCase),
}

/// Resolves search queries against the case search endpoint.
#[derive(Debug, Clone)]
pub struct QueryResolver {
    client: CaseLawClient,
}

impl QueryResolver {
    /// Creates a resolver sharing `client`.
    #[must_use]
    pub fn new(client: CaseLawClient) -> Self {
        Self { client }
    }

    /// Searches for `query` and returns the first-ranked case.
    ///
    /// Sends exactly one request. Zero results and malformed first results
    /// are ordinary outcomes, not errors.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, a non-success status, or a
    /// body that is not a JSON search response.
    #[instrument(skip(self), fields(query = %query))]
    pub async fn resolve(&self, query: &str) -> Result<Resolution, ApiError> {
        let mut url = self.client.endpoint(&["cases"]);
        url.query_pairs_mut().append_pair("search", query);
        let url_str = url.to_string();

        debug!(api_url = %url_str, "Calling case search API");

        let response = self
            .client
            .http()
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::from_transport(&url_str, e))?;

        let status = response.status();
        if !status.is_success() {
            debug!(status = status.as_u16(), "case search returned error status");
            return Err(ApiError::http_status(url_str, status.as_u16()));
        }

        let body = response
            .json::<SearchResponse>()
            .await
            .map_err(|e| ApiError::from_transport(&url_str, e))?;

        Ok(self.pick_first(body))
    }

    fn pick_first(&self, body: SearchResponse) -> Resolution {
        let Some(first) = body.results.and_then(|hits| hits.into_iter().next()) else {
            debug!("case search returned no results");
            return Resolution::NoResults;
        };

        let id = first.id.as_ref().and_then(case_id_from_value);
        let name = first.name.filter(|name| !name.is_empty());
        let (Some(id), Some(name)) = (id, name) else {
            debug!("first search result lacks an id or name");
            return Resolution::Incomplete;
        };

        let url = first
            .url
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| self.client.case_url(&id));

        debug!(case_id = %id, case_name = %name, "resolved first-ranked case");
        Resolution::Resolved(ResolvedCase { id, name, url })
    }
}

/// Converts a JSON `id` into an identifier string.
///
/// `null`, `0`, `false` and the empty string count as absent.
fn case_id_from_value(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => {
            let is_zero = n.as_f64().is_some_and(|v| v == 0.0);
            (!is_zero).then(|| n.to_string())
        }
        Value::String(s) => (!s.is_empty()).then(|| s.clone()),
        _ => None,
    }
}
