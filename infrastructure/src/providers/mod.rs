//! Search backend adapters
//!
//! Two unrelated backends behind the domain's `SearchProvider` contract:
//!
//! - [`DuckDuckGoProvider`] — free, keyless, rate-limited
//! - [`TavilyProvider`] — paid, requires an API credential
//!
//! Both format nothing themselves; they only produce ranked
//! `SearchResult` lists. Shared here: the HTTP client construction and
//! the status classification that decides whether a failure is
//! outage-class (fallback-triggering) or generic.

pub mod duckduckgo;
pub mod tavily;

pub use duckduckgo::DuckDuckGoProvider;
pub use tavily::TavilyProvider;

use skimmer_domain::search::provider::SearchError;
use std::time::Duration;

/// User-Agent sent with every backend request
pub(crate) const USER_AGENT: &str = "Skimmer/0.3 (Agent Tool)";

/// Shared HTTP client for search backends (30s timeout)
pub(crate) fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .expect("Failed to create HTTP client")
}

/// Classify a non-success HTTP status into the search error taxonomy.
///
/// Rate limiting (429) and server-side errors are outage-class and
/// trigger fallback; every other status is a generic backend error
/// surfaced directly to the caller.
pub(crate) fn classify_status(status: reqwest::StatusCode) -> SearchError {
    if status.as_u16() == 429 || status.is_server_error() {
        SearchError::Outage(format!("HTTP status {}", status))
    } else {
        SearchError::Backend(format!("HTTP status {}", status))
    }
}

/// Classify a reqwest transport error.
///
/// Timeouts are transient and outage-class; connection faults (DNS,
/// refused) are generic — a bad hostname should surface as-is instead
/// of being papered over by a fallback hop.
pub(crate) fn classify_transport(err: &reqwest::Error) -> SearchError {
    if err.is_timeout() {
        SearchError::Outage(err.to_string())
    } else {
        SearchError::Backend(err.to_string())
    }
}
