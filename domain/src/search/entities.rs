//! Search domain entities

use serde::{Deserialize, Serialize};

/// A single search result, in provider relevance order
///
/// Transient: produced per query, formatted, and discarded. Never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Result title
    pub title: String,
    /// Result URL
    pub link: String,
    /// Result snippet
    pub snippet: String,
}

impl SearchResult {
    pub fn new(
        title: impl Into<String>,
        link: impl Into<String>,
        snippet: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            snippet: snippet.into(),
        }
    }
}

/// Format results as a uniform markdown block.
///
/// Every provider feeds this formatter, so output shape never reveals
/// provider identity. Ordering is preserved as given.
pub fn format_search_results(results: &[SearchResult]) -> String {
    let blocks: Vec<String> = results
        .iter()
        .map(|r| format!("[{}]({})\n{}", r.title, r.link, r.snippet))
        .collect();
    format!("## Search Results\n\n{}", blocks.join("\n\n"))
}
