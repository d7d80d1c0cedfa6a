//! Page fetch boundary and text normalization
//!
//! The HTTP transport is an external collaborator, abstracted behind
//! [`PageFetcher`]: status + body in, or a timeout/connection fault.
//! The pure normalization steps applied to fetched content — blank-line
//! collapsing and character-bounded truncation — live here too, so the
//! infrastructure tool only composes them.

use async_trait::async_trait;
use thiserror::Error;

/// Raw HTTP response from the transport, before any interpretation
#[derive(Debug, Clone)]
pub struct PageResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body, decoded to text
    pub body: String,
}

impl PageResponse {
    /// Whether the status is in the 2xx success range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Fault raised by the HTTP transport
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// The request exceeded the transport's fixed timeout
    #[error("request timed out")]
    Timeout,

    /// Connection-level fault (DNS, refused, protocol error)
    #[error("{0}")]
    Network(String),

    /// Fault outside the expected network classes (e.g. body decoding)
    #[error("{0}")]
    Unexpected(String),
}

/// Opaque HTTP GET transport for webpage retrieval
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch a URL, returning the raw status and body
    async fn get(&self, url: &str) -> Result<PageResponse, FetchError>;
}

/// Normalized, bounded page text — one per fetch invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    /// Normalized text content
    pub text: String,
    /// Whether the text was cut at the character limit
    pub truncated: bool,
}

impl FetchedPage {
    /// Bound already-normalized text to at most `max_chars` characters.
    ///
    /// The limit counts characters, not bytes, and is applied after
    /// conversion and collapsing so it bounds user-visible content
    /// rather than markup overhead.
    pub fn new(text: impl Into<String>, max_chars: usize) -> Self {
        let text = text.into();
        match text.char_indices().nth(max_chars) {
            Some((idx, _)) => Self {
                text: text[..idx].to_string(),
                truncated: true,
            },
            None => Self {
                text,
                truncated: false,
            },
        }
    }
}

/// Collapse any run of three or more consecutive line breaks into
/// exactly two, normalizing the whitespace noise common in scraped
/// markup. Runs of one or two line breaks are preserved.
pub fn collapse_blank_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut newlines = 0usize;
    for ch in text.chars() {
        if ch == '\n' {
            newlines += 1;
            if newlines <= 2 {
                out.push('\n');
            }
        } else {
            newlines = 0;
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_long_runs() {
        assert_eq!(collapse_blank_lines("a\n\n\n\n\nb"), "a\n\nb");
        assert_eq!(collapse_blank_lines("a\n\n\nb\n\n\n\nc"), "a\n\nb\n\nc");
    }

    #[test]
    fn test_collapse_preserves_short_runs() {
        assert_eq!(collapse_blank_lines("a\nb"), "a\nb");
        assert_eq!(collapse_blank_lines("a\n\nb"), "a\n\nb");
        assert_eq!(collapse_blank_lines("plain"), "plain");
    }

    #[test]
    fn test_collapsed_text_has_no_triple_break() {
        let collapsed = collapse_blank_lines("x\n\n\n\n\n\n\n\ny\n\n\nz");
        assert!(!collapsed.contains("\n\n\n"));
    }

    #[test]
    fn test_fetched_page_under_limit() {
        let page = FetchedPage::new("short", 10);
        assert_eq!(page.text, "short");
        assert!(!page.truncated);
    }

    #[test]
    fn test_fetched_page_at_exact_limit() {
        let page = FetchedPage::new("exact", 5);
        assert_eq!(page.text, "exact");
        assert!(!page.truncated);
    }

    #[test]
    fn test_fetched_page_truncates_by_chars() {
        let page = FetchedPage::new("hello world", 5);
        assert_eq!(page.text, "hello");
        assert!(page.truncated);
    }

    #[test]
    fn test_fetched_page_truncates_multibyte_safely() {
        // Four 3-byte characters; the limit counts characters, not bytes
        let page = FetchedPage::new("日本語字", 2);
        assert_eq!(page.text, "日本");
        assert!(page.truncated);
    }

    #[test]
    fn test_page_response_status_ranges() {
        let ok = PageResponse {
            status: 204,
            body: String::new(),
        };
        assert!(ok.is_success());

        let redirect = PageResponse {
            status: 301,
            body: String::new(),
        };
        assert!(!redirect.is_success());

        let missing = PageResponse {
            status: 404,
            body: String::new(),
        };
        assert!(!missing.is_success());
    }
}
