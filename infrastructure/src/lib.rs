//! Infrastructure layer for skimmer
//!
//! This crate contains the adapters that implement the domain and
//! application contracts: reqwest-backed search providers and page
//! fetching, the concrete web tools, the tool executor, and
//! configuration file loading.

pub mod config;
pub mod providers;
pub mod tools;

// Re-export commonly used types
pub use config::{ConfigLoader, FileAgentConfig, FileConfig, FileFetchConfig, FileSearchConfig};
pub use providers::{DuckDuckGoProvider, TavilyProvider};
pub use tools::{
    FinalAnswerTool, ReqwestPageFetcher, WebFetchTool, WebSearchTool, WebToolExecutor,
    default_tool_set,
};
