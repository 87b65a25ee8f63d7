//! Execution context for pipeline runs.

use atelier_core::AiServices;
use atelier_core::fs::ImageStore;

use crate::config::EngineConfig;

/// Everything a pipeline run needs, passed explicitly into every invocation.
///
/// Provider handles are read-only after startup and cheap to clone; no stage
/// reaches for ambient global state.
#[derive(Debug, Clone)]
pub struct EngineContext {
    /// External AI services (web search, text generation, image generation).
    pub services: AiServices,
    /// Store for generated image files.
    pub images: ImageStore,
    /// Pipeline configuration.
    pub config: EngineConfig,
}

impl EngineContext {
    /// Creates a new engine context.
    pub fn new(services: AiServices, images: ImageStore, config: EngineConfig) -> Self {
        Self {
            services,
            images,
            config,
        }
    }
}
