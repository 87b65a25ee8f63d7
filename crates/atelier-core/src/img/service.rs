//! Image generation service wrapper with observability.

use std::sync::Arc;

use super::{ImageGenProvider, ImageRequest, ImageResponse, TRACING_TARGET};
use crate::Result;
use crate::health::ServiceHealth;

/// Image generation service wrapper.
///
/// Adds structured logging and timing to any image generation implementation.
#[derive(Clone)]
pub struct ImageGenService {
    inner: Arc<dyn ImageGenProvider>,
}

impl ImageGenService {
    /// Creates a new image generation service wrapper.
    pub fn new<P>(provider: P) -> Self
    where
        P: ImageGenProvider + 'static,
    {
        Self {
            inner: Arc::new(provider),
        }
    }

    /// Generates an image for the given request.
    pub async fn generate_image(&self, request: &ImageRequest) -> Result<ImageResponse> {
        let start = std::time::Instant::now();

        tracing::debug!(
            target: TRACING_TARGET,
            request_id = %request.request_id,
            prompt_len = request.prompt.len(),
            "Generating image"
        );

        let result = self.inner.generate_image(request).await;
        let elapsed = start.elapsed();

        match &result {
            Ok(response) => tracing::debug!(
                target: TRACING_TARGET,
                request_id = %request.request_id,
                image_bytes = response.len(),
                mime_type = %response.mime_type,
                elapsed_ms = elapsed.as_millis() as u64,
                "Image generation completed"
            ),
            Err(error) => tracing::warn!(
                target: TRACING_TARGET,
                request_id = %request.request_id,
                error = %error,
                elapsed_ms = elapsed.as_millis() as u64,
                "Image generation failed"
            ),
        }

        result
    }

    /// Performs a health check on the underlying provider.
    pub async fn health_check(&self) -> Result<ServiceHealth> {
        self.inner.health_check().await
    }
}

impl std::fmt::Debug for ImageGenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageGenService").finish_non_exhaustive()
    }
}
