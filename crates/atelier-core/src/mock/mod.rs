//! Mock implementations of AI services for testing.
//!
//! This module provides a unified mock provider that implements all service
//! traits (web search, text generation, image generation). The mocks return
//! configurable canned responses and are useful for unit and integration
//! testing without network access.
//!
//! # Feature Flag
//!
//! This module is only available when the `test-utils` feature is enabled:
//!
//! ```toml
//! [dev-dependencies]
//! atelier-core = { version = "...", features = ["test-utils"] }
//! ```

use std::sync::Arc;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::health::ServiceHealth;
use crate::img::{ImageGenProvider, ImageGenService, ImageRequest, ImageResponse};
use crate::llm::{GenerationRequest, GenerationResponse, TextGenProvider, TextGenService};
use crate::web::{SearchRequest, SearchResponse, SearchResult, WebSearchProvider, WebSearchService};
use crate::{AiServices, Error, Result};

/// Canned search snippet carrying hits for every keyword bucket.
const DEFAULT_SEARCH_CONTENT: &str = "This season's color palette leans on warm neutrals, with \
    sustainable organic cotton fabric everywhere; the silhouette style is relaxed and the \
    trending look favors oversized layering.";

/// Canned design concept narrative.
const DEFAULT_CONCEPT: &str = "A relaxed-fit midi dress in sage green organic cotton with a \
    soft A-line silhouette, patch pockets, and tonal topstitching.";

/// A minimal valid PNG header, enough for byte-level assertions.
const DEFAULT_IMAGE_BYTES: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Configuration for the mock provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MockConfig {
    /// Number of canned results each search returns.
    pub search_result_count: usize,
    /// Content text for canned search results.
    pub search_content: Option<String>,
    /// Text to return for generation requests.
    pub mock_text: Option<String>,
    /// Image bytes to return for image requests.
    pub mock_image: Option<Vec<u8>>,
    /// When true, every search fails.
    pub fail_search: bool,
    /// When true, every text generation fails.
    pub fail_generation: bool,
    /// When true, every image generation fails.
    pub fail_images: bool,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            search_result_count: 1,
            search_content: None,
            mock_text: None,
            mock_image: None,
            fail_search: false,
            fail_generation: false,
            fail_images: false,
        }
    }
}

impl MockConfig {
    /// Convert this configuration into a complete set of AI services.
    pub fn into_services(self) -> AiServices {
        MockProvider::new(self).into_services()
    }
}

/// Unified mock provider for testing.
///
/// Implements `WebSearchProvider`, `TextGenProvider`, and `ImageGenProvider`,
/// returning configurable mock responses for all requests.
#[derive(Clone, Debug)]
pub struct MockProvider {
    config: Arc<MockConfig>,
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new(MockConfig::default())
    }
}

impl MockProvider {
    /// Creates a new mock provider with the given configuration.
    pub fn new(config: MockConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Wraps this provider into the full services container.
    pub fn into_services(self) -> AiServices {
        AiServices::new(
            WebSearchService::new(self.clone()),
            TextGenService::new(self.clone()),
            ImageGenService::new(self),
        )
    }
}

#[async_trait::async_trait]
impl WebSearchProvider for MockProvider {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse> {
        if self.config.fail_search {
            return Err(Error::external_error().with_message("mock search failure"));
        }

        let content = self
            .config
            .search_content
            .clone()
            .unwrap_or_else(|| DEFAULT_SEARCH_CONTENT.to_owned());

        let results = (0..self.config.search_result_count)
            .map(|i| SearchResult {
                title: format!("Result {i} for {}", request.query),
                url: format!("https://example.com/trends/{i}"),
                content: content.clone(),
                score: Some(0.9),
                raw_content: request.include_raw_content.then(|| content.clone()),
            })
            .collect();

        Ok(SearchResponse {
            answer: request.include_answer.then(|| "mock answer".to_owned()),
            results,
        })
    }

    async fn health_check(&self) -> Result<ServiceHealth> {
        Ok(ServiceHealth::healthy())
    }
}

#[async_trait::async_trait]
impl TextGenProvider for MockProvider {
    async fn generate(&self, _request: &GenerationRequest) -> Result<GenerationResponse> {
        if self.config.fail_generation {
            return Err(Error::external_error().with_message("mock generation failure"));
        }

        let text = self
            .config
            .mock_text
            .clone()
            .unwrap_or_else(|| DEFAULT_CONCEPT.to_owned());

        Ok(GenerationResponse {
            text,
            model: Some("mock-model".into()),
        })
    }

    async fn health_check(&self) -> Result<ServiceHealth> {
        Ok(ServiceHealth::healthy())
    }
}

#[async_trait::async_trait]
impl ImageGenProvider for MockProvider {
    async fn generate_image(&self, _request: &ImageRequest) -> Result<ImageResponse> {
        if self.config.fail_images {
            return Err(Error::external_error().with_message("mock image failure"));
        }

        let data = self
            .config
            .mock_image
            .clone()
            .map(Bytes::from)
            .unwrap_or_else(|| Bytes::from_static(DEFAULT_IMAGE_BYTES));

        Ok(ImageResponse {
            data,
            mime_type: "image/png".into(),
        })
    }

    async fn health_check(&self) -> Result<ServiceHealth> {
        Ok(ServiceHealth::healthy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_search_returns_configured_count() {
        let provider = MockProvider::new(MockConfig {
            search_result_count: 3,
            ..MockConfig::default()
        });
        let response = provider
            .search(&SearchRequest::trend_query("fall 2025 fashion trends"))
            .await
            .unwrap();
        assert_eq!(response.results.len(), 3);
    }

    #[tokio::test]
    async fn mock_failures_are_errors() {
        let provider = MockProvider::new(MockConfig {
            fail_generation: true,
            ..MockConfig::default()
        });
        let result = provider
            .generate(&GenerationRequest::new("describe a dress"))
            .await;
        assert!(result.is_err());
    }
}
