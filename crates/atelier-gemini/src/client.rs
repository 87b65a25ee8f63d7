//! Reqwest-based Gemini API client.

use std::num::NonZeroU32;
use std::sync::Arc;

use atelier_core::health::ServiceHealth;
use atelier_core::img::{ImageGenProvider, ImageRequest, ImageResponse};
use atelier_core::llm::{GenerationRequest, GenerationResponse, TextGenProvider};
use bytes::Bytes;
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use reqwest::Client;

use crate::config::GeminiConfig;
use crate::generate::{GenerateContentRequest, GenerateContentResponse, GenerationConfig};
use crate::{Error, Result, TRACING_TARGET};

/// Inner client that holds the HTTP client, configuration, and rate limiter.
struct GeminiClientInner {
    http: Client,
    config: GeminiConfig,
    rate_limiter: DefaultDirectRateLimiter,
}

/// Gemini API client.
///
/// A cheaply cloneable wrapper around an `Arc` inner. All requests pass
/// through a process-wide rate limiter so bursts of pipeline runs cannot
/// exhaust the upstream quota. Implements the core text-generation and
/// image-generation provider traits.
#[derive(Clone)]
pub struct GeminiClient {
    inner: Arc<GeminiClientInner>,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Creates a new Gemini client with the given configuration.
    pub fn new(config: GeminiConfig) -> Result<Self> {
        if config.api_key().is_empty() {
            return Err(Error::config("gemini api key is empty"));
        }
        let quota_limit = NonZeroU32::new(config.rate_limit())
            .ok_or_else(|| Error::config("rate limit must be non-zero"))?;

        tracing::debug!(
            target: TRACING_TARGET,
            base_url = config.base_url(),
            text_model = config.text_model(),
            image_model = config.image_model(),
            rate_limit = config.rate_limit(),
            "Creating gemini client"
        );

        let http = Client::builder()
            .timeout(config.effective_timeout())
            .build()
            .map_err(|e| Error::config(format!("cannot build http client: {e}")))?;

        Ok(Self {
            inner: Arc::new(GeminiClientInner {
                http,
                config,
                rate_limiter: RateLimiter::direct(Quota::per_minute(quota_limit)),
            }),
        })
    }

    /// Gets the client configuration.
    pub fn config(&self) -> &GeminiConfig {
        &self.inner.config
    }

    /// Calls `generateContent` for the given model.
    #[tracing::instrument(skip_all, fields(model = %model))]
    pub async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        self.inner.rate_limiter.until_ready().await;

        let config = &self.inner.config;
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            config.base_url().trim_end_matches('/'),
            model
        );

        let response = self
            .inner
            .http
            .post(&url)
            .header("x-goog-api-key", config.api_key())
            .json(request)
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(Error::api(status.as_u16(), message));
        }

        let decoded: GenerateContentResponse = response.json().await?;

        tracing::debug!(
            target: TRACING_TARGET,
            candidate_count = decoded.candidates.len(),
            "generateContent completed"
        );

        Ok(decoded)
    }

    /// Generates text with the configured text model.
    pub async fn generate_text(&self, prompt: &str) -> Result<String> {
        let request = GenerateContentRequest::from_prompt(prompt);
        let response = self
            .generate_content(self.inner.config.text_model(), &request)
            .await?;
        response.text()
    }

    /// Generates an image with the configured image model.
    ///
    /// Returns the decoded bytes and MIME type of the first inline-data part,
    /// or a missing-content error when the model answered without one.
    pub async fn generate_image(&self, prompt: &str) -> Result<(Bytes, String)> {
        let request = GenerateContentRequest::from_prompt(prompt);
        let response = self
            .generate_content(self.inner.config.image_model(), &request)
            .await?;
        response.first_inline_image()
    }
}

#[async_trait::async_trait]
impl TextGenProvider for GeminiClient {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> atelier_core::Result<GenerationResponse> {
        let wire = GenerateContentRequest::from_prompt(&request.prompt).with_generation_config(
            GenerationConfig {
                temperature: request.temperature,
                max_output_tokens: request.max_output_tokens,
            },
        );

        let response = self
            .generate_content(self.inner.config.text_model(), &wire)
            .await
            .map_err(atelier_core::Error::from)?;

        let text = response.text().map_err(atelier_core::Error::from)?;
        Ok(GenerationResponse {
            text,
            model: Some(self.inner.config.text_model().to_owned()),
        })
    }

    async fn health_check(&self) -> atelier_core::Result<ServiceHealth> {
        // No cheap liveness endpoint; a constructed client with a non-empty
        // key is considered operational.
        Ok(ServiceHealth::healthy())
    }
}

#[async_trait::async_trait]
impl ImageGenProvider for GeminiClient {
    async fn generate_image(&self, request: &ImageRequest) -> atelier_core::Result<ImageResponse> {
        let (data, mime_type) = GeminiClient::generate_image(self, &request.prompt)
            .await
            .map_err(atelier_core::Error::from)?;
        Ok(ImageResponse { data, mime_type })
    }

    async fn health_check(&self) -> atelier_core::Result<ServiceHealth> {
        Ok(ServiceHealth::healthy())
    }
}
