//! `web_fetch` tool — visit a webpage and return its readable text.
//!
//! The pipeline is fetch → convert → collapse → truncate:
//!
//! 1. HTTP GET through the [`PageFetcher`] boundary (20-second timeout).
//! 2. Convert the markup to plain text ([`html_to_text`]).
//! 3. Collapse runs of three or more line breaks into two.
//! 4. Bound the text to `max_output_length` characters.
//!
//! # Failure semantics
//!
//! Every network or processing failure is returned as descriptive text
//! in a *successful* result, so the calling agent always receives
//! feedback it can reason over instead of an exception to catch. Only
//! an argument-schema mismatch produces a failed result.
//!
//! # Parameters
//!
//! | Name | Type | Required | Description |
//! |------|------|:---:|-------------|
//! | `url` | string | Yes | The url of the webpage to visit |

use skimmer_domain::fetch::{FetchError, FetchedPage, PageFetcher, PageResponse, collapse_blank_lines};
use skimmer_domain::tool::{
    contract::Tool,
    entities::{ToolCall, ToolDefinition, ToolParameter},
    traits::{DefaultToolValidator, ToolValidator},
    value_objects::{ToolError, ToolResult, ToolResultMetadata},
};

use async_trait::async_trait;
use scraper::{ElementRef, Html, Selector};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::info;

use super::DEFAULT_MAX_OUTPUT_LENGTH;
use crate::providers::USER_AGENT;

/// Canonical tool name for the webpage fetch tool
pub const WEB_FETCH: &str = "web_fetch";

/// Fixed timeout for page retrieval
const FETCH_TIMEOUT: Duration = Duration::from_secs(20);

/// Returned verbatim when the transport times out
const TIMEOUT_MESSAGE: &str = "The request timed out. Please try again later or check the URL.";

/// Create the [`ToolDefinition`] for `web_fetch`
pub fn web_fetch_definition() -> ToolDefinition {
    ToolDefinition::new(
        WEB_FETCH,
        "Visits a webpage at the given url and returns its readable content as text. \
         Use this to browse webpages.",
        "string",
    )
    .with_parameter(ToolParameter::new(
        "url",
        "The url of the webpage to visit",
        true,
    ))
}

/// HTTP transport adapter over a shared `reqwest::Client`
#[derive(Debug, Clone)]
pub struct ReqwestPageFetcher {
    client: reqwest::Client,
}

impl ReqwestPageFetcher {
    pub fn new() -> Self {
        Self::with_timeout(FETCH_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to create HTTP client"),
        }
    }
}

impl Default for ReqwestPageFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PageFetcher for ReqwestPageFetcher {
    async fn get(&self, url: &str) -> Result<PageResponse, FetchError> {
        let response = self
            .client
            .get(url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    FetchError::Timeout
                } else {
                    FetchError::Network(e.to_string())
                }
            })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout
            } else {
                FetchError::Unexpected(format!("Failed to read response body: {}", e))
            }
        })?;

        Ok(PageResponse { status, body })
    }
}

/// Tool that retrieves a webpage as normalized, bounded text
pub struct WebFetchTool {
    definition: ToolDefinition,
    fetcher: Arc<dyn PageFetcher>,
    max_output_length: usize,
}

impl WebFetchTool {
    /// Create the tool with the default reqwest transport
    pub fn new(max_output_length: usize) -> Self {
        Self::with_fetcher(Arc::new(ReqwestPageFetcher::new()), max_output_length)
    }

    /// Create the tool with a custom transport (used by tests)
    pub fn with_fetcher(fetcher: Arc<dyn PageFetcher>, max_output_length: usize) -> Self {
        Self {
            definition: web_fetch_definition(),
            fetcher,
            max_output_length,
        }
    }
}

impl Default for WebFetchTool {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_OUTPUT_LENGTH)
    }
}

#[async_trait]
impl Tool for WebFetchTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn invoke(&self, call: &ToolCall) -> ToolResult {
        if let Err(e) = DefaultToolValidator.validate(call, &self.definition) {
            return ToolResult::failure(WEB_FETCH, ToolError::invalid_argument(e));
        }
        let url = match call.require_string("url") {
            Ok(u) => u,
            Err(e) => {
                return ToolResult::failure(WEB_FETCH, ToolError::invalid_argument(e));
            }
        };
        if url.trim().is_empty() {
            return ToolResult::failure(
                WEB_FETCH,
                ToolError::invalid_argument("url cannot be empty"),
            );
        }

        let start = Instant::now();
        info!("web fetch (url_len={})", url.len());

        let response = match self.fetcher.get(url).await {
            Ok(r) => r,
            Err(FetchError::Timeout) => {
                return ToolResult::success(WEB_FETCH, TIMEOUT_MESSAGE);
            }
            Err(FetchError::Network(cause)) => {
                return ToolResult::success(
                    WEB_FETCH,
                    format!("Error fetching the webpage: {}", cause),
                );
            }
            Err(FetchError::Unexpected(cause)) => {
                return ToolResult::success(
                    WEB_FETCH,
                    format!("An unexpected error occurred: {}", cause),
                );
            }
        };

        if !response.is_success() {
            return ToolResult::success(
                WEB_FETCH,
                format!("Error fetching the webpage: HTTP status {}", response.status),
            );
        }

        let bytes = response.body.len();
        let text = collapse_blank_lines(&html_to_text(&response.body));
        let page = FetchedPage::new(text, self.max_output_length);
        let elapsed = start.elapsed();

        let mut result = ToolResult::success(WEB_FETCH, page.text);
        result.metadata = ToolResultMetadata {
            duration_ms: Some(elapsed.as_millis() as u64),
            bytes: Some(bytes),
            truncated: Some(page.truncated),
            ..Default::default()
        };
        result
    }
}

/// Tags whose entire subtree is ignored
const SKIP_TAGS: &[&str] = &["script", "style", "noscript", "svg", "head", "template"];

/// Tags that separate paragraphs of extracted text
const BLOCK_TAGS: &[&str] = &[
    "p", "div", "section", "article", "main", "aside", "header", "footer", "h1", "h2", "h3", "h4",
    "h5", "h6", "ul", "ol", "table", "blockquote", "pre", "figure", "form",
];

/// Extract readable text from HTML, keeping block structure as line
/// breaks so the collapsing step has real paragraph boundaries to work
/// with. Non-HTML input passes through as its own text content.
pub fn html_to_text(html: &str) -> String {
    let document = Html::parse_document(html);

    // Prefer <body>, fall back to the whole document
    let body_selector = Selector::parse("body").expect("static selector");
    let mut out = String::new();
    match document.select(&body_selector).next() {
        Some(body) => collect_text(body, &mut out),
        None => collect_text(document.root_element(), &mut out),
    }

    out.trim().to_string()
}

/// Recursively collect text, inserting breaks at block boundaries
fn collect_text(element: ElementRef, out: &mut String) {
    let tag = element.value().name();
    if SKIP_TAGS.contains(&tag) {
        return;
    }
    if tag == "br" {
        out.push('\n');
        return;
    }

    let block = BLOCK_TAGS.contains(&tag);
    let line_item = matches!(tag, "li" | "tr" | "dt" | "dd");
    if block {
        push_breaks(out, 2);
    } else if line_item {
        push_breaks(out, 1);
    }

    for child in element.children() {
        match child.value() {
            scraper::Node::Text(text) => {
                let words: Vec<&str> = text.split_whitespace().collect();
                if !words.is_empty() {
                    if !out.is_empty() && !out.ends_with(char::is_whitespace) {
                        out.push(' ');
                    }
                    out.push_str(&words.join(" "));
                }
            }
            scraper::Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    collect_text(child_el, out);
                }
            }
            _ => {}
        }
    }

    if block {
        push_breaks(out, 2);
    } else if line_item {
        push_breaks(out, 1);
    }
}

/// Ensure the buffer ends with at least `n` newlines (never more than
/// already present plus the shortfall, so boundaries do not accumulate)
fn push_breaks(out: &mut String, n: usize) {
    if out.is_empty() {
        return;
    }
    let have = out.chars().rev().take_while(|&c| c == '\n').count();
    for _ in have..n {
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Transport double with a programmed outcome
    struct StubFetcher {
        outcome: Result<PageResponse, FetchError>,
    }

    impl StubFetcher {
        fn ok(status: u16, body: &str) -> Arc<Self> {
            Arc::new(Self {
                outcome: Ok(PageResponse {
                    status,
                    body: body.to_string(),
                }),
            })
        }

        fn err(error: FetchError) -> Arc<Self> {
            Arc::new(Self {
                outcome: Err(error),
            })
        }
    }

    #[async_trait]
    impl PageFetcher for StubFetcher {
        async fn get(&self, _url: &str) -> Result<PageResponse, FetchError> {
            self.outcome.clone()
        }
    }

    fn fetch_call() -> ToolCall {
        ToolCall::new(WEB_FETCH).with_arg("url", "https://example.com")
    }

    #[tokio::test]
    async fn test_timeout_returns_fixed_message() {
        let tool = WebFetchTool::with_fetcher(StubFetcher::err(FetchError::Timeout), 40000);
        let result = tool.invoke(&fetch_call()).await;

        assert!(result.is_success());
        assert_eq!(
            result.output(),
            Some("The request timed out. Please try again later or check the URL.")
        );
    }

    #[tokio::test]
    async fn test_network_fault_returns_descriptive_text() {
        let tool = WebFetchTool::with_fetcher(
            StubFetcher::err(FetchError::Network("dns error".to_string())),
            40000,
        );
        let result = tool.invoke(&fetch_call()).await;

        assert!(result.is_success());
        assert_eq!(
            result.output(),
            Some("Error fetching the webpage: dns error")
        );
    }

    #[tokio::test]
    async fn test_unexpected_fault_returns_descriptive_text() {
        let tool = WebFetchTool::with_fetcher(
            StubFetcher::err(FetchError::Unexpected("bad encoding".to_string())),
            40000,
        );
        let result = tool.invoke(&fetch_call()).await;

        assert!(result.is_success());
        assert_eq!(
            result.output(),
            Some("An unexpected error occurred: bad encoding")
        );
    }

    #[tokio::test]
    async fn test_non_2xx_status_is_text_not_crash() {
        let tool = WebFetchTool::with_fetcher(StubFetcher::ok(404, "not found"), 40000);
        let result = tool.invoke(&fetch_call()).await;

        assert!(result.is_success());
        assert_eq!(
            result.output(),
            Some("Error fetching the webpage: HTTP status 404")
        );
    }

    #[tokio::test]
    async fn test_successful_fetch_extracts_text() {
        let html = r#"
        <html><head><title>t</title></head><body>
            <script>var x = 1;</script>
            <style>.foo { color: red; }</style>
            <h1>Hello</h1>
            <p>First paragraph.</p>
            <p>Second paragraph.</p>
        </body></html>
        "#;
        let tool = WebFetchTool::with_fetcher(StubFetcher::ok(200, html), 40000);
        let result = tool.invoke(&fetch_call()).await;

        assert!(result.is_success());
        let output = result.output().unwrap();
        assert!(output.contains("Hello"));
        assert!(output.contains("First paragraph."));
        assert!(output.contains("Second paragraph."));
        assert!(!output.contains("var x = 1"));
        assert!(!output.contains("color: red"));
        assert!(!output.contains("\n\n\n"));
        assert_eq!(result.metadata.truncated, Some(false));
        assert_eq!(result.metadata.bytes, Some(html.len()));
    }

    #[tokio::test]
    async fn test_output_is_bounded_and_flagged() {
        let html = format!("<html><body><p>{}</p></body></html>", "x".repeat(500));
        let tool = WebFetchTool::with_fetcher(StubFetcher::ok(200, &html), 100);
        let result = tool.invoke(&fetch_call()).await;

        assert!(result.is_success());
        assert_eq!(result.output().unwrap().chars().count(), 100);
        assert_eq!(result.metadata.truncated, Some(true));
    }

    #[tokio::test]
    async fn test_repeated_breaks_are_collapsed() {
        let html = "<html><body>a<br><br><br><br>b</body></html>";
        let tool = WebFetchTool::with_fetcher(StubFetcher::ok(200, html), 40000);
        let result = tool.invoke(&fetch_call()).await;

        assert_eq!(result.output(), Some("a\n\nb"));
    }

    #[tokio::test]
    async fn test_missing_url_is_invalid_argument() {
        let tool = WebFetchTool::with_fetcher(StubFetcher::ok(200, ""), 40000);
        let result = tool.invoke(&ToolCall::new(WEB_FETCH)).await;

        assert!(!result.is_success());
        assert_eq!(result.error().unwrap().code, "INVALID_ARGUMENT");
    }

    #[tokio::test]
    async fn test_non_string_url_is_invalid_argument() {
        let tool = WebFetchTool::with_fetcher(StubFetcher::ok(200, ""), 40000);
        let call = ToolCall::new(WEB_FETCH).with_arg("url", json!(7));
        let result = tool.invoke(&call).await;

        assert!(!result.is_success());
        assert_eq!(result.error().unwrap().code, "INVALID_ARGUMENT");
    }

    #[tokio::test]
    async fn test_identical_calls_yield_identical_output() {
        let html = "<html><body><p>stable</p></body></html>";
        let tool = WebFetchTool::with_fetcher(StubFetcher::ok(200, html), 40000);

        let first = tool.invoke(&fetch_call()).await;
        let second = tool.invoke(&fetch_call()).await;
        assert_eq!(first.output(), second.output());
    }

    #[test]
    fn test_html_to_text_basic() {
        let text = html_to_text("<html><body><h1>Hello</h1><p>World</p></body></html>");
        assert_eq!(text, "Hello\n\nWorld");
    }

    #[test]
    fn test_html_to_text_list_items_on_own_lines() {
        let text = html_to_text("<html><body><ul><li>one</li><li>two</li></ul></body></html>");
        assert!(text.contains("one\ntwo"));
    }

    #[test]
    fn test_html_to_text_plain_input_passes_through() {
        assert_eq!(html_to_text("just plain text"), "just plain text");
    }

    #[test]
    fn test_html_to_text_empty() {
        assert!(html_to_text("").is_empty());
    }
}
