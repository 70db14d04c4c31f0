//! Full-case retrieval rendered as PDF.

use tracing::{debug, instrument};

use super::{ApiError, CaseLawClient};

/// Downloads cases as PDF documents.
#[derive(Debug, Clone)]
pub struct CaseFetcher {
    client: CaseLawClient,
}

impl CaseFetcher {
    /// Creates a fetcher sharing `client`.
    #[must_use]
    pub fn new(client: CaseLawClient) -> Self {
        Self { client }
    }

    /// Requests the full text of `case_id` rendered as PDF and returns the raw body.
    ///
    /// The body is returned as-is; no content-type or integrity check is made.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, a non-success status, or an
    /// interrupted body.
    #[instrument(skip(self), fields(case_id = %case_id))]
    pub async fn fetch_pdf(&self, case_id: &str) -> Result<Vec<u8>, ApiError> {
        let mut url = self.client.endpoint(&["cases", case_id]);
        url.query_pairs_mut()
            .append_pair("full_case", "true")
            .append_pair("format", "pdf");
        let url_str = url.to_string();

        debug!(api_url = %url_str, "Requesting case PDF");

        let response = self
            .client
            .http()
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::from_transport(&url_str, e))?;

        let status = response.status();
        if !status.is_success() {
            debug!(status = status.as_u16(), "case fetch returned error status");
            return Err(ApiError::http_status(url_str, status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::from_transport(&url_str, e))?;

        debug!(bytes = bytes.len(), "case PDF received");
        Ok(bytes.to_vec())
    }
}
