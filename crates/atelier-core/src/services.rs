//! AI services container for dependency injection.
//!
//! This module provides the [`AiServices`] struct which holds all external
//! service handles (web search, text generation, image generation) for use in
//! application state.

use crate::img::ImageGenService;
use crate::llm::TextGenService;
use crate::web::WebSearchService;

/// Container for external AI services.
///
/// This struct holds the service handles used by the pipeline, enabling
/// dependency injection and centralized service management. All handles are
/// cheaply cloneable and read-only after construction.
#[derive(Debug, Clone)]
pub struct AiServices {
    /// Web search service for trend-source discovery.
    pub web: WebSearchService,
    /// Text generation service for trend analysis and design concepts.
    pub llm: TextGenService,
    /// Image generation service for product photographs.
    pub img: ImageGenService,
}

impl AiServices {
    /// Creates a new AI services container.
    pub fn new(web: WebSearchService, llm: TextGenService, img: ImageGenService) -> Self {
        Self { web, llm, img }
    }
}
