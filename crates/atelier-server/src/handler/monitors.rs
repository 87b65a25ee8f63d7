//! System health monitoring handlers.

use atelier_core::AiServices;
use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use jiff::Timestamp;

use super::response::HealthStatus;
use crate::service::ServiceState;

/// Tracing target for monitor operations.
const TRACING_TARGET: &str = "atelier_server::handler::monitors";

/// Health check endpoint.
///
/// Probes every provider; the response is 200 when all are operational and
/// 503 otherwise.
#[tracing::instrument(skip_all)]
async fn health_check(
    State(services): State<AiServices>,
) -> (StatusCode, axum::Json<HealthStatus>) {
    let checks = [
        services.web.health_check().await,
        services.llm.health_check().await,
        services.img.health_check().await,
    ];

    let is_healthy = checks
        .iter()
        .all(|check| check.as_ref().is_ok_and(|health| health.is_operational()));

    let status_code = if is_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    tracing::debug!(
        target: TRACING_TARGET,
        is_healthy,
        status_code = status_code.as_u16(),
        "Health status checked"
    );

    let response = HealthStatus {
        status: if is_healthy { "healthy" } else { "unhealthy" }.to_owned(),
        agent_status: if is_healthy { "healthy" } else { "error" }.to_owned(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
        timestamp: Timestamp::now(),
    };

    (status_code, axum::Json(response))
}

/// Returns a [`Router`] with all health monitoring routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> Router<ServiceState> {
    Router::new().route("/health", get(health_check))
}

#[cfg(test)]
mod tests {
    use atelier_core::mock::MockConfig;

    use super::*;
    use crate::handler::test::create_test_server;

    #[tokio::test]
    async fn health_endpoint_reports_healthy() {
        let (_dir, server) = create_test_server(MockConfig::default()).await;

        let response = server.get("/health").await;
        response.assert_status_ok();

        let status = response.json::<HealthStatus>();
        assert_eq!(status.status, "healthy");
        assert_eq!(status.agent_status, "healthy");
        assert!(!status.version.is_empty());
    }

    #[tokio::test]
    async fn root_endpoint_points_at_health() {
        let (_dir, server) = create_test_server(MockConfig::default()).await;

        let response = server.get("/").await;
        response.assert_status_ok();

        let info = response.json::<serde_json::Value>();
        assert_eq!(info["health"], "/health");
        assert!(info["message"].as_str().unwrap().contains("Atelier"));
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let (_dir, server) = create_test_server(MockConfig::default()).await;

        let response = server.get("/api/v1/nope").await;
        response.assert_status_not_found();
    }
}
