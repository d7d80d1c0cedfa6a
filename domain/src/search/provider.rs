//! Search provider abstraction
//!
//! This module defines the [`SearchProvider`] trait, which abstracts the
//! external search backends (a keyless free-tier backend, a keyed paid
//! backend) behind one contract so the composite search tool can route
//! across them without knowing their implementation.
//!
//! # Error classification
//!
//! The error kind carries the routing decision. Only
//! [`SearchError::Outage`] — the provider-specific transient failure
//! class (rate limiting, backend 5xx) — triggers fallback to the
//! secondary provider. Everything else is surfaced directly so the
//! caller can distinguish "provider degraded, retried" from "request
//! itself is invalid".

use async_trait::async_trait;
use thiserror::Error;

use super::entities::SearchResult;

/// Error type for search provider operations
#[derive(Debug, Error)]
pub enum SearchError {
    /// The backend answered but matched nothing. Never silently returned
    /// as an empty success: downstream reasoning could not tell
    /// "searched and found nothing" from "tool broke".
    #[error("No results found! Try a less restrictive/shorter query.")]
    NoResults,

    /// Transient provider-specific failure (rate limit, outage). The
    /// only error class that triggers fallback.
    #[error("Provider outage: {0}")]
    Outage(String),

    /// Any other backend failure (connection fault, unexpected status,
    /// malformed response). Surfaced directly, never retried.
    #[error("Search backend error: {0}")]
    Backend(String),

    /// Required credential missing or blank at construction time
    #[error("Missing API credential for {0}")]
    MissingCredential(&'static str),
}

/// Search backend abstraction - external source of ranked results
///
/// Implementations hold their configuration (result cap, credential)
/// fixed at construction and keep no per-query state.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Unique identifier for this provider
    ///
    /// Examples: "duckduckgo", "tavily"
    fn id(&self) -> &str;

    /// Execute a query, returning a bounded ranked result list
    ///
    /// An empty result set must be reported as
    /// [`SearchError::NoResults`], never as `Ok(vec![])`.
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError>;
}
