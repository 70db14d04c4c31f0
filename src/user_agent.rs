//! Shared User-Agent string for API requests.

/// Tool identifier used in the User-Agent header.
const TOOL_NAME: &str = "caselaw-fetch";

/// Default User-Agent for API requests (identifies the tool and version).
#[must_use]
pub(crate) fn default_api_user_agent() -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!("{TOOL_NAME}/{version} (case-law-research-tool)")
}
