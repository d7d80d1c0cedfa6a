//! Configuration loading
//!
//! TOML file configuration merged with environment variables. The
//! credential and model identifier are opaque strings handed to the
//! tool constructors; nothing here interprets them.

pub mod file_config;
pub mod loader;

pub use file_config::{FileAgentConfig, FileConfig, FileFetchConfig, FileSearchConfig};
pub use loader::ConfigLoader;
