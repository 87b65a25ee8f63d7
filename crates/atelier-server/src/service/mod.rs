//! Application state and dependency injection.

use atelier_core::AiServices;
use atelier_core::fs::ImageStore;
use atelier_engine::{EngineConfig, EngineContext};

/// Application state.
///
/// Used for the [`State`] extraction (dependency injection). All members are
/// cheaply cloneable handles, read-only after startup.
///
/// [`State`]: axum::extract::State
#[must_use = "state does nothing unless you use it"]
#[derive(Debug, Clone)]
pub struct ServiceState {
    /// External AI services (web search, text generation, image generation).
    pub services: AiServices,
    /// Store for generated image files.
    pub images: ImageStore,
    /// Pipeline configuration.
    pub engine_config: EngineConfig,
}

impl ServiceState {
    /// Creates application state from its parts.
    pub fn new(services: AiServices, images: ImageStore, engine_config: EngineConfig) -> Self {
        Self {
            services,
            images,
            engine_config,
        }
    }

    /// Builds the per-request engine context.
    pub fn engine_context(&self) -> EngineContext {
        EngineContext::new(
            self.services.clone(),
            self.images.clone(),
            self.engine_config.clone(),
        )
    }
}

macro_rules! impl_di {
    ($($f:ident: $t:ty),+ $(,)?) => {$(
        impl axum::extract::FromRef<ServiceState> for $t {
            fn from_ref(state: &ServiceState) -> Self {
                state.$f.clone()
            }
        }
    )+};
}

impl_di!(services: AiServices);
impl_di!(images: ImageStore);
impl_di!(engine_config: EngineConfig);
