//! Domain layer for skimmer
//!
//! This crate contains the core entities and contracts of the web tool
//! layer. It has no dependencies on infrastructure or presentation
//! concerns and performs no I/O.
//!
//! # Core Concepts
//!
//! ## Tools
//!
//! A tool is a named, schema-described capability an autonomous agent can
//! invoke. Every tool exposes a [`ToolDefinition`] (name, parameters,
//! output type), is invoked via a [`ToolCall`], and produces a
//! [`ToolResult`] with structured metadata.
//!
//! ## Search and Fetch
//!
//! The two web capabilities are abstracted at their external boundaries:
//! [`SearchProvider`] for search backends and [`PageFetcher`] for raw
//! HTTP page retrieval. Concrete adapters live in the infrastructure
//! layer; the domain only fixes the contracts and the error taxonomy
//! the composite tooling pattern-matches on.

pub mod fetch;
pub mod search;
pub mod tool;

// Re-export commonly used types
pub use fetch::{FetchError, FetchedPage, PageFetcher, PageResponse, collapse_blank_lines};
pub use search::{
    entities::{SearchResult, format_search_results},
    provider::{SearchError, SearchProvider},
};
pub use tool::{
    contract::Tool,
    entities::{ToolCall, ToolDefinition, ToolParameter, ToolSpec},
    traits::{DefaultToolValidator, ToolValidator},
    value_objects::{ToolError, ToolResult, ToolResultMetadata},
};
