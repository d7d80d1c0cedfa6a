//! Tool domain value objects — immutable result and error types
//!
//! These types form the output side of the tool pipeline. Every
//! invocation produces a [`ToolResult`] with optional
//! [`ToolResultMetadata`] (timing, byte counts, provider identity).
//!
//! Error codes in [`ToolError`] tell the calling agent what kind of
//! failure it is looking at:
//!
//! | Code | Description |
//! |------|-------------|
//! | `INVALID_ARGUMENT` | Arguments do not match the declared schema |
//! | `NOT_FOUND` | Unknown tool name |
//! | `NO_RESULTS` | Search backend returned zero matches |
//! | `PROVIDER_OUTAGE` | Transient backend failure (rate limit, 5xx) |
//! | `NO_FALLBACK` | Primary provider degraded, no fallback configured |
//! | `EXECUTION_FAILED` | Other runtime failure |
//! | `TIMEOUT` | Operation timed out |

use serde::{Deserialize, Serialize};

/// Error that occurred during tool execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolError {
    /// Error code (e.g., "NO_RESULTS", "PROVIDER_OUTAGE")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ToolError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    // Common error constructors
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            "NOT_FOUND",
            format!("Resource not found: {}", resource.into()),
        )
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new("INVALID_ARGUMENT", message)
    }

    pub fn execution_failed(message: impl Into<String>) -> Self {
        Self::new("EXECUTION_FAILED", message)
    }

    pub fn no_results(message: impl Into<String>) -> Self {
        Self::new("NO_RESULTS", message)
    }

    pub fn provider_outage(message: impl Into<String>) -> Self {
        Self::new("PROVIDER_OUTAGE", message)
    }

    pub fn no_fallback(message: impl Into<String>) -> Self {
        Self::new("NO_FALLBACK", message)
    }

    pub fn timeout(operation: impl Into<String>) -> Self {
        Self::new(
            "TIMEOUT",
            format!("Operation timed out: {}", operation.into()),
        )
    }
}

impl std::fmt::Display for ToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(details) = &self.details {
            write!(f, " ({})", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for ToolError {}

/// Result of a tool execution, carrying output or error information.
///
/// Produced by the web tools and consumed by the agent loop for context
/// injection and error handling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// Name of the tool that was executed
    pub tool_name: String,
    /// Whether the execution was successful
    pub success: bool,
    /// Output content (for successful execution)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Error information (for failed execution)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ToolError>,
    /// Metadata about the execution
    #[serde(default)]
    pub metadata: ToolResultMetadata,
}

/// Structured metadata about tool execution.
///
/// Each tool populates the relevant fields:
///
/// | Tool | `duration_ms` | `bytes` | `truncated` | `result_count` | `provider` |
/// |------|:---:|:---:|:---:|:---:|:---:|
/// | `web_fetch` | yes | yes | yes | - | - |
/// | `web_search` | yes | - | - | yes | yes |
/// | `final_answer` | - | - | - | - | - |
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolResultMetadata {
    /// Duration of execution in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    /// Number of bytes fetched from the network
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes: Option<usize>,
    /// Whether the output was cut at the configured length limit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncated: Option<bool>,
    /// For search: number of results returned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_count: Option<usize>,
    /// For search: which backend actually served the request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}

impl ToolResult {
    /// Create a successful result
    pub fn success(tool_name: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            success: true,
            output: Some(output.into()),
            error: None,
            metadata: ToolResultMetadata::default(),
        }
    }

    /// Create a failed result
    pub fn failure(tool_name: impl Into<String>, error: ToolError) -> Self {
        Self {
            tool_name: tool_name.into(),
            success: false,
            output: None,
            error: Some(error),
            metadata: ToolResultMetadata::default(),
        }
    }

    /// Add metadata to the result
    pub fn with_metadata(mut self, metadata: ToolResultMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Add duration metadata
    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.metadata.duration_ms = Some(duration_ms);
        self
    }

    /// Check if execution was successful
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get the output content
    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    /// Get the error
    pub fn error(&self) -> Option<&ToolError> {
        self.error.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_error() {
        let err = ToolError::provider_outage("rate limited").with_details("HTTP status 429");

        assert_eq!(err.code, "PROVIDER_OUTAGE");
        assert!(err.message.contains("rate limited"));
        assert!(err.details.is_some());
        assert_eq!(err.to_string(), "[PROVIDER_OUTAGE] rate limited (HTTP status 429)");
    }

    #[test]
    fn test_tool_result_success() {
        let result = ToolResult::success("web_fetch", "page text").with_duration(12);

        assert!(result.is_success());
        assert_eq!(result.output(), Some("page text"));
        assert!(result.error().is_none());
        assert_eq!(result.metadata.duration_ms, Some(12));
    }

    #[test]
    fn test_tool_result_failure() {
        let result = ToolResult::failure(
            "web_search",
            ToolError::no_results("No results found! Try a less restrictive/shorter query."),
        );

        assert!(!result.is_success());
        assert!(result.output().is_none());
        assert_eq!(result.error().unwrap().code, "NO_RESULTS");
    }
}
