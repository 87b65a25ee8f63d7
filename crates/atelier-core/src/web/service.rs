//! Web search service wrapper with observability.

use std::sync::Arc;

use super::{SearchRequest, SearchResponse, TRACING_TARGET, WebSearchProvider};
use crate::Result;
use crate::health::ServiceHealth;

/// Web search service wrapper.
///
/// Adds structured logging and timing to any search implementation. The inner
/// provider is wrapped in `Arc` for cheap cloning.
#[derive(Clone)]
pub struct WebSearchService {
    inner: Arc<dyn WebSearchProvider>,
}

impl WebSearchService {
    /// Creates a new web search service wrapper.
    pub fn new<P>(provider: P) -> Self
    where
        P: WebSearchProvider + 'static,
    {
        Self {
            inner: Arc::new(provider),
        }
    }

    /// Executes a search query.
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResponse> {
        let start = std::time::Instant::now();

        tracing::debug!(
            target: TRACING_TARGET,
            query = %request.query,
            max_results = request.max_results,
            "Executing web search"
        );

        let result = self.inner.search(request).await;
        let elapsed = start.elapsed();

        match &result {
            Ok(response) => tracing::debug!(
                target: TRACING_TARGET,
                query = %request.query,
                result_count = response.results.len(),
                elapsed_ms = elapsed.as_millis() as u64,
                "Web search completed"
            ),
            Err(error) => tracing::warn!(
                target: TRACING_TARGET,
                query = %request.query,
                error = %error,
                elapsed_ms = elapsed.as_millis() as u64,
                "Web search failed"
            ),
        }

        result
    }

    /// Performs a health check on the underlying provider.
    pub async fn health_check(&self) -> Result<ServiceHealth> {
        self.inner.health_check().await
    }
}

impl std::fmt::Debug for WebSearchService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebSearchService").finish_non_exhaustive()
    }
}
