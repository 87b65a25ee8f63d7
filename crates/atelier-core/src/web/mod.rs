//! Web search abstractions.
//!
//! This module provides the trait and types for trend-source discovery via a
//! web search API. Implementations live in integration crates (e.g.
//! `atelier-tavily`); the pipeline only depends on [`WebSearchService`].

mod request;
mod response;
mod service;

pub use request::{SearchDepth, SearchRequest};
pub use response::{SearchResponse, SearchResult};
pub use service::WebSearchService;

use crate::Result;
use crate::health::ServiceHealth;

/// Tracing target for web search operations.
pub const TRACING_TARGET: &str = "atelier_core::web";

/// Provider trait for web search implementations.
#[async_trait::async_trait]
pub trait WebSearchProvider: Send + Sync {
    /// Executes a single search query and returns ranked results.
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse>;

    /// Performs a health check on the search service.
    async fn health_check(&self) -> Result<ServiceHealth>;
}
