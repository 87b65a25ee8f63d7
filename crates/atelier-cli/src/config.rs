//! Command-line and environment configuration.

use std::time::Duration;

use anyhow::Context;
use atelier_core::AiServices;
use atelier_core::img::ImageGenService;
use atelier_core::llm::TextGenService;
use atelier_core::web::WebSearchService;
use atelier_engine::EngineConfig;
use atelier_gemini::{GeminiClient, GeminiConfig};
use atelier_tavily::{SearchClient, SearchConfig};
use clap::{Args, Parser};

use crate::TRACING_TARGET_CONFIG;

/// Atelier design agent server.
#[derive(Debug, Parser)]
#[command(name = "atelier", version, about)]
pub struct Cli {
    #[command(flatten)]
    pub server: ServerConfig,

    #[command(flatten)]
    pub provider: ProviderConfig,

    #[command(flatten)]
    pub service: ServiceConfig,

    #[command(flatten)]
    pub middleware: MiddlewareConfig,
}

/// Bind address configuration.
#[derive(Debug, Clone, Args)]
pub struct ServerConfig {
    /// Host to bind the HTTP server on.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to bind the HTTP server on.
    #[arg(long, env = "PORT", default_value_t = 8000)]
    pub port: u16,
}

/// External provider credentials and model selection.
#[derive(Debug, Clone, Args)]
pub struct ProviderConfig {
    /// Tavily API key for web search.
    #[arg(long, env = "TAVILY_API_KEY", hide_env_values = true)]
    pub tavily_api_key: String,

    /// Google API key for Gemini.
    #[arg(long, env = "GOOGLE_API_KEY", hide_env_values = true)]
    pub google_api_key: String,

    /// Gemini text model name.
    #[arg(long, env = "GEMINI_TEXT_MODEL", default_value = atelier_gemini::DEFAULT_TEXT_MODEL)]
    pub gemini_text_model: String,

    /// Gemini image model name.
    #[arg(long, env = "GEMINI_IMAGE_MODEL", default_value = atelier_gemini::DEFAULT_IMAGE_MODEL)]
    pub gemini_image_model: String,

    /// Gemini request budget per minute.
    #[arg(long, env = "GEMINI_RATE_LIMIT", default_value_t = 60)]
    pub gemini_rate_limit: u32,

    /// Upstream request timeout in seconds.
    #[arg(long, env = "PROVIDER_TIMEOUT_SECS", default_value_t = 120)]
    pub provider_timeout_secs: u64,
}

/// Pipeline and storage configuration.
#[derive(Debug, Clone, Args)]
pub struct ServiceConfig {
    /// Directory where generated images are stored.
    #[arg(long, env = "UPLOAD_DIR", default_value = "uploads")]
    pub upload_dir: String,

    /// Maximum designs per request.
    #[arg(long, env = "MAX_DESIGNS_PER_REQUEST", default_value_t = 10)]
    pub max_designs_per_request: usize,

    /// Quality threshold, recorded with each run.
    #[arg(long, env = "DESIGN_QUALITY_THRESHOLD", default_value_t = 0.8)]
    pub design_quality_threshold: f64,

    /// Trend confidence threshold, recorded with each run.
    #[arg(long, env = "TREND_CONFIDENCE_THRESHOLD", default_value_t = 0.7)]
    pub trend_confidence_threshold: f64,

    /// Maximum regeneration iterations per run.
    #[arg(long, env = "MAX_ITERATIONS", default_value_t = 1)]
    pub max_iterations: u32,
}

/// HTTP middleware configuration.
#[derive(Debug, Clone, Args)]
pub struct MiddlewareConfig {
    /// Allowed CORS origins; "*" allows any origin.
    #[arg(long, env = "CORS_ORIGINS", value_delimiter = ',', default_value = "*")]
    pub cors_origins: Vec<String>,
}

impl ServiceConfig {
    /// Builds the engine configuration from the flags.
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            max_designs_per_request: self.max_designs_per_request,
            design_quality_threshold: self.design_quality_threshold,
            trend_confidence_threshold: self.trend_confidence_threshold,
            max_iterations: self.max_iterations,
        }
    }
}

/// Connects the external AI services from provider configuration.
///
/// This is the only place that can fail fatally at startup: a client that
/// cannot be constructed aborts the process.
pub fn create_ai_services(provider: &ProviderConfig) -> anyhow::Result<AiServices> {
    let timeout = Duration::from_secs(provider.provider_timeout_secs);

    let search = SearchClient::new(
        SearchConfig::new(&provider.tavily_api_key).with_timeout(timeout),
    )
    .context("failed to create tavily search client")?;

    let gemini = GeminiClient::new(
        GeminiConfig::new(&provider.google_api_key)
            .with_text_model(&provider.gemini_text_model)
            .with_image_model(&provider.gemini_image_model)
            .with_rate_limit(provider.gemini_rate_limit)
            .with_timeout(timeout),
    )
    .context("failed to create gemini client")?;

    tracing::info!(
        target: TRACING_TARGET_CONFIG,
        text_model = %provider.gemini_text_model,
        image_model = %provider.gemini_image_model,
        "AI services initialized"
    );

    Ok(AiServices::new(
        WebSearchService::new(search),
        TextGenService::new(gemini.clone()),
        ImageGenService::new(gemini),
    ))
}

/// Logs the effective server configuration at startup.
pub fn log_server_config(server: &ServerConfig, service: &ServiceConfig) {
    tracing::info!(
        target: TRACING_TARGET_CONFIG,
        host = %server.host,
        port = server.port,
        upload_dir = %service.upload_dir,
        max_designs = service.max_designs_per_request,
        "Server configuration loaded"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_parse() {
        let cli = Cli::parse_from([
            "atelier",
            "--tavily-api-key",
            "tvly-key",
            "--google-api-key",
            "g-key",
        ]);
        assert_eq!(cli.server.port, 8000);
        assert_eq!(cli.service.upload_dir, "uploads");
        assert_eq!(cli.service.engine_config().max_designs_per_request, 10);
        assert_eq!(cli.middleware.cors_origins, vec!["*".to_owned()]);
    }
}
