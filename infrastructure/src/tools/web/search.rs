//! `web_search` tool — one search capability over two backends.
//!
//! Wraps the free-tier provider (primary) and, when a credential was
//! configured, the keyed provider (secondary) behind a single callable.
//! Callers see one tool regardless of which backend served the request;
//! both backends feed the same formatter, so output shape never reveals
//! provider identity.
//!
//! # Fallback policy
//!
//! Strict two-tier, at most one hop, no retry loops, no memory of which
//! provider served last:
//!
//! ```text
//! primary ──ok──────────────────────▶ format, done
//!    │
//!    └─Outage──▶ secondary? ──ok────▶ format, done
//!                   │   └─err──────▶ mapped failure
//!                   └─none─────────▶ NO_FALLBACK failure
//! ```
//!
//! Only the outage class falls back. `NoResults` is definitive — the
//! backend answered the query, it just matched nothing — so a secondary
//! provider is never asked to re-answer it. Generic backend faults
//! (connection errors, bad requests) surface directly so the caller can
//! tell "provider degraded, retried" from "request itself is invalid".
//!
//! # Parameters
//!
//! | Name | Type | Required | Description |
//! |------|------|:---:|-------------|
//! | `query` | string | Yes | The search query to perform |

use skimmer_domain::search::entities::{SearchResult, format_search_results};
use skimmer_domain::search::provider::{SearchError, SearchProvider};
use skimmer_domain::tool::{
    contract::Tool,
    entities::{ToolCall, ToolDefinition, ToolParameter},
    traits::{DefaultToolValidator, ToolValidator},
    value_objects::{ToolError, ToolResult, ToolResultMetadata},
};

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

/// Canonical tool name for the web search tool
pub const WEB_SEARCH: &str = "web_search";

/// Create the [`ToolDefinition`] for `web_search`
pub fn web_search_definition() -> ToolDefinition {
    ToolDefinition::new(
        WEB_SEARCH,
        "Performs a web search based on your query (think a Google search) then returns the \
         top search results.",
        "string",
    )
    .with_parameter(ToolParameter::new(
        "query",
        "The search query to perform",
        true,
    ))
}

/// Composite search tool with ordered provider fallback
pub struct WebSearchTool {
    definition: ToolDefinition,
    primary: Arc<dyn SearchProvider>,
    secondary: Option<Arc<dyn SearchProvider>>,
}

impl WebSearchTool {
    /// Create the tool over the primary (free-tier) provider
    pub fn new(primary: Arc<dyn SearchProvider>) -> Self {
        Self {
            definition: web_search_definition(),
            primary,
            secondary: None,
        }
    }

    /// Attach the secondary provider used when the primary is degraded
    pub fn with_fallback(mut self, provider: Arc<dyn SearchProvider>) -> Self {
        self.secondary = Some(provider);
        self
    }

    fn format_success(
        &self,
        provider: &dyn SearchProvider,
        results: Vec<SearchResult>,
        start: Instant,
    ) -> ToolResult {
        let mut result = ToolResult::success(WEB_SEARCH, format_search_results(&results));
        result.metadata = ToolResultMetadata {
            duration_ms: Some(start.elapsed().as_millis() as u64),
            result_count: Some(results.len()),
            provider: Some(provider.id().to_string()),
            ..Default::default()
        };
        result
    }
}

#[async_trait]
impl Tool for WebSearchTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn invoke(&self, call: &ToolCall) -> ToolResult {
        if let Err(e) = DefaultToolValidator.validate(call, &self.definition) {
            return ToolResult::failure(WEB_SEARCH, ToolError::invalid_argument(e));
        }
        let query = match call.require_string("query") {
            Ok(q) => q,
            Err(e) => {
                return ToolResult::failure(WEB_SEARCH, ToolError::invalid_argument(e));
            }
        };
        if query.trim().is_empty() {
            return ToolResult::failure(
                WEB_SEARCH,
                ToolError::invalid_argument("query cannot be empty"),
            );
        }

        let start = Instant::now();
        info!("web search (query_len={})", query.len());

        match self.primary.search(query).await {
            Ok(results) => self.format_success(self.primary.as_ref(), results, start),
            Err(SearchError::Outage(reason)) => {
                warn!(
                    "search provider '{}' degraded ({}), retrying with fallback",
                    self.primary.id(),
                    reason
                );
                let Some(secondary) = &self.secondary else {
                    return ToolResult::failure(
                        WEB_SEARCH,
                        ToolError::no_fallback(
                            "Search provider is unavailable and no fallback provider is configured",
                        )
                        .with_details(reason),
                    );
                };
                match secondary.search(query).await {
                    Ok(results) => self.format_success(secondary.as_ref(), results, start),
                    Err(e) => ToolResult::failure(WEB_SEARCH, map_search_error(e)),
                }
            }
            Err(e) => ToolResult::failure(WEB_SEARCH, map_search_error(e)),
        }
    }
}

/// Map a provider error to the caller-facing taxonomy
fn map_search_error(err: SearchError) -> ToolError {
    match err {
        SearchError::NoResults => ToolError::no_results(err.to_string()),
        SearchError::Outage(reason) => ToolError::provider_outage(reason),
        SearchError::Backend(reason) => ToolError::execution_failed(reason),
        SearchError::MissingCredential(_) => ToolError::execution_failed(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Provider double with a programmed outcome and call recording
    struct StubProvider {
        id: &'static str,
        outcome: StubOutcome,
        calls: Mutex<Vec<String>>,
    }

    enum StubOutcome {
        Results(Vec<SearchResult>),
        NoResults,
        Outage,
        Backend,
    }

    impl StubProvider {
        fn new(id: &'static str, outcome: StubOutcome) -> Arc<Self> {
            Arc::new(Self {
                id,
                outcome,
                calls: Mutex::new(Vec::new()),
            })
        }

        fn results(id: &'static str, results: Vec<SearchResult>) -> Arc<Self> {
            Self::new(id, StubOutcome::Results(results))
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl SearchProvider for StubProvider {
        fn id(&self) -> &str {
            self.id
        }

        async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
            self.calls.lock().unwrap().push(query.to_string());
            match &self.outcome {
                StubOutcome::Results(results) => Ok(results.clone()),
                StubOutcome::NoResults => Err(SearchError::NoResults),
                StubOutcome::Outage => Err(SearchError::Outage("HTTP status 429".to_string())),
                StubOutcome::Backend => {
                    Err(SearchError::Backend("connection refused".to_string()))
                }
            }
        }
    }

    fn paris_results() -> Vec<SearchResult> {
        vec![SearchResult::new(
            "Paris",
            "https://x",
            "Paris is the capital",
        )]
    }

    fn search_call(query: &str) -> ToolCall {
        ToolCall::new(WEB_SEARCH).with_arg("query", query)
    }

    #[tokio::test]
    async fn test_primary_success_never_touches_secondary() {
        let primary = StubProvider::results("primary", paris_results());
        let secondary = StubProvider::results("secondary", vec![]);
        let tool = WebSearchTool::new(primary.clone()).with_fallback(secondary.clone());

        let result = tool.invoke(&search_call("capital of France")).await;

        assert!(result.is_success());
        assert_eq!(
            result.output(),
            Some("## Search Results\n\n[Paris](https://x)\nParis is the capital")
        );
        assert_eq!(primary.call_count(), 1);
        assert_eq!(secondary.call_count(), 0);
        assert_eq!(result.metadata.provider.as_deref(), Some("primary"));
        assert_eq!(result.metadata.result_count, Some(1));
    }

    #[tokio::test]
    async fn test_outage_falls_back_to_secondary() {
        let primary = StubProvider::new("primary", StubOutcome::Outage);
        let secondary = StubProvider::results(
            "secondary",
            vec![SearchResult::new("Backup", "https://b", "served by fallback")],
        );
        let tool = WebSearchTool::new(primary.clone()).with_fallback(secondary.clone());

        let result = tool.invoke(&search_call("anything")).await;

        assert!(result.is_success());
        assert_eq!(
            result.output(),
            Some("## Search Results\n\n[Backup](https://b)\nserved by fallback")
        );
        assert_eq!(primary.call_count(), 1);
        assert_eq!(secondary.call_count(), 1);
        assert_eq!(result.metadata.provider.as_deref(), Some("secondary"));
    }

    #[tokio::test]
    async fn test_outage_without_fallback_is_a_defined_failure() {
        let primary = StubProvider::new("primary", StubOutcome::Outage);
        let tool = WebSearchTool::new(primary.clone());

        let result = tool.invoke(&search_call("anything")).await;

        assert!(!result.is_success());
        let error = result.error().unwrap();
        assert_eq!(error.code, "NO_FALLBACK");
        assert!(error.message.contains("no fallback provider"));
        assert_eq!(error.details.as_deref(), Some("HTTP status 429"));
    }

    #[tokio::test]
    async fn test_no_results_does_not_fall_back() {
        let primary = StubProvider::new("primary", StubOutcome::NoResults);
        let secondary = StubProvider::results("secondary", paris_results());
        let tool = WebSearchTool::new(primary.clone()).with_fallback(secondary.clone());

        let result = tool.invoke(&search_call("gibberish query")).await;

        assert!(!result.is_success());
        let error = result.error().unwrap();
        assert_eq!(error.code, "NO_RESULTS");
        assert!(error.message.contains("less restrictive/shorter query"));
        assert_eq!(secondary.call_count(), 0);
    }

    #[tokio::test]
    async fn test_generic_backend_fault_does_not_fall_back() {
        let primary = StubProvider::new("primary", StubOutcome::Backend);
        let secondary = StubProvider::results("secondary", paris_results());
        let tool = WebSearchTool::new(primary.clone()).with_fallback(secondary.clone());

        let result = tool.invoke(&search_call("anything")).await;

        assert!(!result.is_success());
        assert_eq!(result.error().unwrap().code, "EXECUTION_FAILED");
        assert_eq!(secondary.call_count(), 0);
    }

    #[tokio::test]
    async fn test_secondary_failure_is_surfaced() {
        let primary = StubProvider::new("primary", StubOutcome::Outage);
        let secondary = StubProvider::new("secondary", StubOutcome::NoResults);
        let tool = WebSearchTool::new(primary).with_fallback(secondary);

        let result = tool.invoke(&search_call("anything")).await;

        assert!(!result.is_success());
        assert_eq!(result.error().unwrap().code, "NO_RESULTS");
    }

    #[tokio::test]
    async fn test_identical_calls_yield_identical_output() {
        let primary = StubProvider::results("primary", paris_results());
        let tool = WebSearchTool::new(primary.clone());

        let first = tool.invoke(&search_call("capital of France")).await;
        let second = tool.invoke(&search_call("capital of France")).await;

        assert_eq!(first.output(), second.output());
        assert_eq!(primary.call_count(), 2);
    }

    #[tokio::test]
    async fn test_every_call_restarts_at_primary() {
        let primary = StubProvider::new("primary", StubOutcome::Outage);
        let secondary = StubProvider::results("secondary", paris_results());
        let tool = WebSearchTool::new(primary.clone()).with_fallback(secondary.clone());

        let _ = tool.invoke(&search_call("q")).await;
        let _ = tool.invoke(&search_call("q")).await;

        // No memory of which provider last succeeded
        assert_eq!(primary.call_count(), 2);
        assert_eq!(secondary.call_count(), 2);
    }

    #[tokio::test]
    async fn test_missing_query_is_invalid_argument() {
        let primary = StubProvider::results("primary", paris_results());
        let tool = WebSearchTool::new(primary.clone());

        let result = tool.invoke(&ToolCall::new(WEB_SEARCH)).await;

        assert!(!result.is_success());
        assert_eq!(result.error().unwrap().code, "INVALID_ARGUMENT");
        assert_eq!(primary.call_count(), 0);
    }

    #[tokio::test]
    async fn test_non_string_query_is_invalid_argument() {
        let primary = StubProvider::results("primary", paris_results());
        let tool = WebSearchTool::new(primary.clone());

        let call = ToolCall::new(WEB_SEARCH).with_arg("query", 42);
        let result = tool.invoke(&call).await;

        assert!(!result.is_success());
        assert_eq!(result.error().unwrap().code, "INVALID_ARGUMENT");
        assert_eq!(primary.call_count(), 0);
    }
}
