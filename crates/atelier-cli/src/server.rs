//! HTTP server lifecycle with graceful shutdown.

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;

use crate::TRACING_TARGET_SERVER;
use crate::config::ServerConfig;

/// Binds and serves the router until a shutdown signal arrives.
pub(crate) async fn serve(router: Router, config: &ServerConfig) -> anyhow::Result<()> {
    let address = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("cannot bind {address}"))?;

    tracing::info!(
        target: TRACING_TARGET_SERVER,
        address = %address,
        "HTTP server listening"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated abnormally")?;

    tracing::info!(target: TRACING_TARGET_SERVER, "HTTP server stopped");
    Ok(())
}

/// Resolves when the process receives ctrl-c or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install ctrl-c handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!(target: TRACING_TARGET_SERVER, "Shutdown signal received");
}
