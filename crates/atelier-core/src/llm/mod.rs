//! Text generation abstractions.
//!
//! Trait and types for generative text calls (trend analysis summaries and
//! design concepts). Implementations live in integration crates (e.g.
//! `atelier-gemini`).

mod request;
mod response;
mod service;

pub use request::GenerationRequest;
pub use response::GenerationResponse;
pub use service::TextGenService;

use crate::Result;
use crate::health::ServiceHealth;

/// Tracing target for text generation operations.
pub const TRACING_TARGET: &str = "atelier_core::llm";

/// Provider trait for text generation implementations.
#[async_trait::async_trait]
pub trait TextGenProvider: Send + Sync {
    /// Generates text for the given prompt.
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResponse>;

    /// Performs a health check on the generation service.
    async fn health_check(&self) -> Result<ServiceHealth>;
}
