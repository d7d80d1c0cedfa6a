//! File configuration schema (`skimmer.toml`)
//!
//! Example configuration:
//!
//! ```toml
//! [agent]
//! model = "gpt-4o"
//!
//! [search]
//! max_results = 10
//! tavily_api_key = "tvly-..."   # enables the fallback provider
//!
//! [fetch]
//! max_output_length = 40000
//! ```

use serde::{Deserialize, Serialize};

use crate::tools::web::{DEFAULT_MAX_OUTPUT_LENGTH, DEFAULT_MAX_RESULTS};

/// Agent host settings (`[agent]` section)
///
/// The model identifier is loaded here and passed through to the agent
/// host untouched; this layer never interprets it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAgentConfig {
    /// Model identifier handed to the agent host
    pub model: Option<String>,
}

/// Web search settings (`[search]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSearchConfig {
    /// Result cap applied by both search providers
    pub max_results: usize,
    /// Tavily API credential; when present, the keyed provider is
    /// attached as the fallback backend
    pub tavily_api_key: Option<String>,
}

impl Default for FileSearchConfig {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            tavily_api_key: None,
        }
    }
}

/// Webpage fetch settings (`[fetch]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileFetchConfig {
    /// Maximum characters of page text returned by `web_fetch`
    pub max_output_length: usize,
}

impl Default for FileFetchConfig {
    fn default() -> Self {
        Self {
            max_output_length: DEFAULT_MAX_OUTPUT_LENGTH,
        }
    }
}

/// Complete file configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Agent host settings
    pub agent: FileAgentConfig,
    /// Web search settings
    pub search: FileSearchConfig,
    /// Webpage fetch settings
    pub fetch: FileFetchConfig,
}
