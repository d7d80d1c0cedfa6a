//! The executable tool contract
//!
//! Every concrete tool (web search, page fetch, final answer) implements
//! [`Tool`], so callers can hold a heterogeneous set behind
//! `Arc<dyn Tool>` and invoke them polymorphically without knowing
//! anything about their implementation.

use async_trait::async_trait;

use super::entities::{ToolCall, ToolDefinition};
use super::value_objects::ToolResult;

/// A named, schema-described capability invocable by an agent.
///
/// `definition()` is pure and side-effect-free; all I/O is confined to
/// `invoke()`. Implementations validate the call's argument names and
/// coarse types against their definition before doing any work, and
/// report a mismatch as an `INVALID_ARGUMENT` failure.
#[async_trait]
pub trait Tool: Send + Sync {
    /// The immutable definition describing this tool's schema
    fn definition(&self) -> &ToolDefinition;

    /// Tool name, as advertised to the model
    fn name(&self) -> &str {
        &self.definition().name
    }

    /// Execute the tool with the given call
    async fn invoke(&self, call: &ToolCall) -> ToolResult;
}
