//! DuckDuckGo search provider — the free, keyless backend.
//!
//! Uses the [DuckDuckGo Instant Answer API](https://api.duckduckgo.com/)
//! which requires no API key and returns abstracts, instant answers and
//! related topics for a query. The abstract (when present) becomes the
//! top-ranked result, followed by related topics, capped at the
//! configured `max_results`.
//!
//! A zero-result response is an error, not an empty success — see
//! [`SearchError::NoResults`].

use skimmer_domain::search::entities::SearchResult;
use skimmer_domain::search::provider::{SearchError, SearchProvider};

use async_trait::async_trait;
use tracing::debug;

use super::{USER_AGENT, classify_status, classify_transport};

/// DuckDuckGo Instant Answer API endpoint (no API key required)
const DDG_API_URL: &str = "https://api.duckduckgo.com/";

/// Keyless search adapter over the DuckDuckGo Instant Answer API
#[derive(Debug, Clone)]
pub struct DuckDuckGoProvider {
    client: reqwest::Client,
    max_results: usize,
}

impl DuckDuckGoProvider {
    pub fn new(client: reqwest::Client, max_results: usize) -> Self {
        Self {
            client,
            max_results,
        }
    }
}

#[async_trait]
impl SearchProvider for DuckDuckGoProvider {
    fn id(&self) -> &str {
        "duckduckgo"
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        debug!("duckduckgo search (query_len={})", query.len());

        let response = self
            .client
            .get(DDG_API_URL)
            .query(&[
                ("q", query),
                ("format", "json"),
                ("no_html", "1"),
                ("skip_disambig", "1"),
            ])
            .header("User-Agent", USER_AGENT)
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

        let results = parse_instant_answer(&body, self.max_results);
        if results.is_empty() {
            return Err(SearchError::NoResults);
        }
        Ok(results)
    }
}

/// Map an Instant Answer response to ranked results.
///
/// The abstract (main answer) ranks first when present; related topics
/// follow in API order, flattening one level of nested topic groups.
fn parse_instant_answer(data: &serde_json::Value, max_results: usize) -> Vec<SearchResult> {
    let mut results = Vec::new();

    if let Some(abstract_text) = data["AbstractText"].as_str()
        && !abstract_text.is_empty()
    {
        let title = data["Heading"]
            .as_str()
            .filter(|h| !h.is_empty())
            .or_else(|| data["AbstractSource"].as_str())
            .unwrap_or("Abstract");
        let url = data["AbstractURL"].as_str().unwrap_or("");
        results.push(SearchResult::new(title, url, abstract_text));
    }

    if let Some(topics) = data["RelatedTopics"].as_array() {
        for topic in topics {
            if results.len() >= max_results {
                break;
            }
            if let Some(result) = parse_topic(topic) {
                results.push(result);
            } else if let Some(group) = topic["Topics"].as_array() {
                // Nested topic group (disambiguation buckets)
                for inner in group {
                    if results.len() >= max_results {
                        break;
                    }
                    if let Some(result) = parse_topic(inner) {
                        results.push(result);
                    }
                }
            }
        }
    }

    results.truncate(max_results);
    results
}

/// Map a single related-topic entry, skipping entries without text.
///
/// Topic text follows the "Title - description" convention; the part
/// before the separator becomes the title, the full text the snippet.
fn parse_topic(topic: &serde_json::Value) -> Option<SearchResult> {
    let text = topic["Text"].as_str().filter(|t| !t.is_empty())?;
    let url = topic["FirstURL"].as_str().unwrap_or("");
    let title = text.split_once(" - ").map(|(t, _)| t).unwrap_or(text);
    Some(SearchResult::new(title, url, text))
}
