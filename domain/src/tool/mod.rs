//! Tool domain module
//!
//! Defines the core abstractions of the agent's tool system: how a
//! caller discovers what a tool accepts, invokes it with keyword
//! arguments, and receives a structured outcome.
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │ ToolSpec     │───▶│ ToolCall     │───▶│ ToolResult   │
//! │ (catalog)    │    │ (invocation) │    │ (output)     │
//! └──────────────┘    └──────────────┘    └──────────────┘
//! ```
//!
//! # Key Types
//!
//! - [`ToolSpec`] — Catalog of available tools
//! - [`ToolDefinition`] — Schema for a single tool (name, params, output type)
//! - [`ToolCall`] — An invocation request with arguments
//! - [`ToolResult`] — Execution outcome with structured [`ToolResultMetadata`](value_objects::ToolResultMetadata)
//! - [`ToolValidator`] — Pure domain trait for argument validation
//! - [`Tool`] — The polymorphic contract every executable tool implements
//!
//! # Architecture
//!
//! - **Domain** (this module): Pure definitions, no I/O
//! - **Application** (`ToolExecutorPort`): Port trait for tool execution
//! - **Infrastructure** (`WebToolExecutor`): Concrete tools performing
//!   HTTP requests (web search, page fetch)

pub mod contract;
pub mod entities;
pub mod traits;
pub mod value_objects;

pub use contract::Tool;
pub use entities::{ToolCall, ToolDefinition, ToolSpec};
pub use traits::{DefaultToolValidator, ToolValidator};
pub use value_objects::{ToolError, ToolResult};
