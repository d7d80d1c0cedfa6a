//! Tavily search provider — the paid, keyed backend.
//!
//! POSTs to the [Tavily search API](https://api.tavily.com/search) with
//! full-content retrieval enabled. The credential is required at
//! construction: a missing key is a wiring mistake, not something to
//! discover on the first query.
//!
//! The backend may return more entries than requested, so the result
//! list is capped client-side to `max_results`.

use skimmer_domain::search::entities::SearchResult;
use skimmer_domain::search::provider::{SearchError, SearchProvider};

use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use super::{USER_AGENT, classify_status, classify_transport};

/// Tavily search API endpoint
const TAVILY_API_URL: &str = "https://api.tavily.com/search";

/// Keyed search adapter over the Tavily API
#[derive(Debug, Clone)]
pub struct TavilyProvider {
    client: reqwest::Client,
    api_key: String,
    max_results: usize,
}

impl TavilyProvider {
    /// Create the provider, failing immediately on a blank credential
    pub fn new(
        client: reqwest::Client,
        api_key: impl Into<String>,
        max_results: usize,
    ) -> Result<Self, SearchError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(SearchError::MissingCredential("tavily"));
        }
        Ok(Self {
            client,
            api_key,
            max_results,
        })
    }
}

#[async_trait]
impl SearchProvider for TavilyProvider {
    fn id(&self) -> &str {
        "tavily"
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        debug!("tavily search (query_len={})", query.len());

        let response = self
            .client
            .post(TAVILY_API_URL)
            .header("User-Agent", USER_AGENT)
            .json(&json!({
                "api_key": self.api_key,
                "query": query,
                "max_results": self.max_results,
                "include_raw_content": true,
            }))
            .send()
            .await
            .map_err(|e| classify_transport(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(classify_status(status));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| SearchError::Backend(format!("Failed to parse search results: {}", e)))?;

        let results = parse_response(&body, self.max_results);
        if results.is_empty() {
            return Err(SearchError::NoResults);
        }
        Ok(results)
    }
}

/// Map a Tavily response to ranked results, capped client-side.
fn parse_response(data: &serde_json::Value, max_results: usize) -> Vec<SearchResult> {
    let Some(entries) = data["results"].as_array() else {
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| {
            let title = entry["title"].as_str()?;
            let url = entry["url"].as_str().unwrap_or("");
            let snippet = entry["content"].as_str().unwrap_or("");
            Some(SearchResult::new(title, url, snippet))
        })
        .take(max_results)
        .collect()
}
