//! Text generation service wrapper with observability.

use std::sync::Arc;

use super::{GenerationRequest, GenerationResponse, TRACING_TARGET, TextGenProvider};
use crate::Result;
use crate::health::ServiceHealth;

/// Text generation service wrapper.
///
/// Adds structured logging and timing to any text generation implementation.
#[derive(Clone)]
pub struct TextGenService {
    inner: Arc<dyn TextGenProvider>,
}

impl TextGenService {
    /// Creates a new text generation service wrapper.
    pub fn new<P>(provider: P) -> Self
    where
        P: TextGenProvider + 'static,
    {
        Self {
            inner: Arc::new(provider),
        }
    }

    /// Generates text for the given request.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResponse> {
        let start = std::time::Instant::now();

        tracing::debug!(
            target: TRACING_TARGET,
            request_id = %request.request_id,
            prompt_len = request.prompt.len(),
            "Generating text"
        );

        let result = self.inner.generate(request).await;
        let elapsed = start.elapsed();

        match &result {
            Ok(response) => tracing::debug!(
                target: TRACING_TARGET,
                request_id = %request.request_id,
                response_len = response.text.len(),
                elapsed_ms = elapsed.as_millis() as u64,
                "Text generation completed"
            ),
            Err(error) => tracing::warn!(
                target: TRACING_TARGET,
                request_id = %request.request_id,
                error = %error,
                elapsed_ms = elapsed.as_millis() as u64,
                "Text generation failed"
            ),
        }

        result
    }

    /// Performs a health check on the underlying provider.
    pub async fn health_check(&self) -> Result<ServiceHealth> {
        self.inner.health_check().await
    }
}

impl std::fmt::Debug for TextGenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextGenService").finish_non_exhaustive()
    }
}
