#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

mod config;
mod server;
mod telemetry;

use std::process;

use anyhow::Context;
use atelier_core::fs::ImageStore;
use atelier_server::handler::routes;
use atelier_server::service::ServiceState;
use axum::Router;
use axum::http::{HeaderValue, Method};
use clap::Parser;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::{Cli, MiddlewareConfig, create_ai_services, log_server_config};

// Tracing target constants
pub const TRACING_TARGET_STARTUP: &str = "atelier_cli::startup";
pub const TRACING_TARGET_SERVER: &str = "atelier_cli::server";
pub const TRACING_TARGET_CONFIG: &str = "atelier_cli::config";

#[tokio::main]
async fn main() {
    let Err(error) = run().await else {
        tracing::info!(
            target: TRACING_TARGET_SERVER,
            "application terminated successfully"
        );
        process::exit(0);
    };

    if tracing::enabled!(tracing::Level::ERROR) {
        tracing::error!(
            target: TRACING_TARGET_SERVER,
            error = %error,
            "application terminated with error"
        );
    } else {
        eprintln!("Error: {error:#}");
    }

    process::exit(1);
}

/// Main application entry point.
async fn run() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    telemetry::init_tracing()?;
    tracing::info!(
        target: TRACING_TARGET_STARTUP,
        version = env!("CARGO_PKG_VERSION"),
        "Starting atelier design agent"
    );
    log_server_config(&cli.server, &cli.service);

    let state = create_service_state(&cli)
        .await
        .context("failed to create service state")?;
    let router = create_router(state, &cli.middleware);

    server::serve(router, &cli.server).await
}

/// Creates the service state from configuration.
async fn create_service_state(cli: &Cli) -> anyhow::Result<ServiceState> {
    let services = create_ai_services(&cli.provider)?;
    let images = ImageStore::init(&cli.service.upload_dir)
        .await
        .context("failed to initialize image store")?;

    Ok(ServiceState::new(
        services,
        images,
        cli.service.engine_config(),
    ))
}

/// Creates the router with middleware layers applied.
///
/// Layers are applied outside-in: tracing wraps CORS, which wraps the routes.
fn create_router(state: ServiceState, middleware: &MiddlewareConfig) -> Router {
    routes(state)
        .layer(cors_layer(middleware))
        .layer(TraceLayer::new_for_http())
}

/// Builds the CORS layer from the configured origins.
fn cors_layer(middleware: &MiddlewareConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    if middleware.cors_origins.iter().any(|origin| origin == "*") {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = middleware
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    layer.allow_origin(origins)
}
