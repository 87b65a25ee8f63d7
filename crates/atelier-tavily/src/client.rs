//! Reqwest-based Tavily search client.

use std::sync::Arc;

use atelier_core::health::ServiceHealth;
use atelier_core::web::{SearchRequest, SearchResponse, WebSearchProvider};
use reqwest::Client;

use crate::config::SearchConfig;
use crate::wire::{WireSearchRequest, WireSearchResponse};
use crate::{Error, Result, TRACING_TARGET};

/// Inner client that holds the HTTP client and configuration.
struct SearchClientInner {
    http: Client,
    config: SearchConfig,
}

/// Tavily search client.
///
/// This is a cheaply cloneable wrapper around an `Arc` inner holding the
/// reqwest client and configuration. It implements the core
/// [`WebSearchProvider`] trait, so it can be injected wherever the pipeline
/// expects a search service.
#[derive(Clone)]
pub struct SearchClient {
    inner: Arc<SearchClientInner>,
}

impl std::fmt::Debug for SearchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchClient")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

impl SearchClient {
    /// Creates a new search client with the given configuration.
    pub fn new(config: SearchConfig) -> Result<Self> {
        if config.api_key().is_empty() {
            return Err(Error::config("tavily api key is empty"));
        }

        tracing::debug!(
            target: TRACING_TARGET,
            base_url = config.base_url(),
            timeout_ms = config.effective_timeout().as_millis() as u64,
            "Creating search client"
        );

        let http = Client::builder()
            .timeout(config.effective_timeout())
            .user_agent(config.effective_user_agent())
            .build()
            .map_err(|e| Error::config(format!("cannot build http client: {e}")))?;

        Ok(Self {
            inner: Arc::new(SearchClientInner { http, config }),
        })
    }

    /// Gets the client configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.inner.config
    }

    /// Executes one search query.
    #[tracing::instrument(skip_all, fields(query = %request.query))]
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResponse> {
        let config = &self.inner.config;
        let url = format!("{}/search", config.base_url().trim_end_matches('/'));
        let body = WireSearchRequest::new(config.api_key(), request);

        let response = self.inner.http.post(&url).json(&body).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(Error::api(status.as_u16(), message));
        }

        let wire: WireSearchResponse = response.json().await?;
        let converted: SearchResponse = wire.into();

        tracing::debug!(
            target: TRACING_TARGET,
            result_count = converted.results.len(),
            has_answer = converted.answer.is_some(),
            "Search completed"
        );

        Ok(converted)
    }
}

#[async_trait::async_trait]
impl WebSearchProvider for SearchClient {
    async fn search(&self, request: &SearchRequest) -> atelier_core::Result<SearchResponse> {
        SearchClient::search(self, request).await.map_err(Into::into)
    }

    async fn health_check(&self) -> atelier_core::Result<ServiceHealth> {
        // Tavily exposes no dedicated health endpoint; a constructed client
        // with a non-empty key is considered operational.
        Ok(ServiceHealth::healthy())
    }
}
