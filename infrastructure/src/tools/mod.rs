//! Tool implementations for the agent system
//!
//! Concrete tools the agent can invoke to answer questions requiring
//! live web information:
//!
//! - `web_search`: composite search with provider fallback
//! - `web_fetch`: webpage retrieval to normalized, bounded text
//! - `final_answer`: terminal answer echo
//!
//! [`default_tool_set`] wires the standard set from configuration;
//! [`WebToolExecutor`] exposes it through the application layer's
//! `ToolExecutorPort`.

pub mod answer;
pub mod web;

mod executor;

pub use answer::FinalAnswerTool;
pub use executor::WebToolExecutor;
pub use web::{ReqwestPageFetcher, WebFetchTool, WebSearchTool};

use std::sync::Arc;

use skimmer_domain::search::provider::{SearchError, SearchProvider};
use skimmer_domain::tool::contract::Tool;

use crate::config::FileConfig;
use crate::providers::{DuckDuckGoProvider, TavilyProvider, http_client};

/// Build the default tool set from configuration.
///
/// DuckDuckGo is always the primary search backend; Tavily is attached
/// as the fallback only when a credential is configured. A blank
/// credential fails here, at construction, not on the first query.
pub fn default_tool_set(config: &FileConfig) -> Result<Vec<Arc<dyn Tool>>, SearchError> {
    let client = http_client();
    let max_results = config.search.max_results;

    let primary: Arc<dyn SearchProvider> =
        Arc::new(DuckDuckGoProvider::new(client.clone(), max_results));
    let mut search = WebSearchTool::new(primary);
    if let Some(key) = &config.search.tavily_api_key {
        let tavily = TavilyProvider::new(client, key.clone(), max_results)?;
        search = search.with_fallback(Arc::new(tavily));
    }

    let fetch = WebFetchTool::new(config.fetch.max_output_length);

    Ok(vec![
        Arc::new(search),
        Arc::new(fetch),
        Arc::new(FinalAnswerTool::new()),
    ])
}
