//! Image generation abstractions.
//!
//! Trait and types for generative image calls producing product photographs.
//! Implementations live in integration crates (e.g. `atelier-gemini`).

mod request;
mod response;
mod service;

pub use request::ImageRequest;
pub use response::ImageResponse;
pub use service::ImageGenService;

use crate::Result;
use crate::health::ServiceHealth;

/// Tracing target for image generation operations.
pub const TRACING_TARGET: &str = "atelier_core::img";

/// Provider trait for image generation implementations.
#[async_trait::async_trait]
pub trait ImageGenProvider: Send + Sync {
    /// Generates an image for the given prompt.
    ///
    /// Implementations return an error when the backend responds without
    /// usable inline image data; callers decide whether that is fatal.
    async fn generate_image(&self, request: &ImageRequest) -> Result<ImageResponse>;

    /// Performs a health check on the image service.
    async fn health_check(&self) -> Result<ServiceHealth>;
}
