//! All `axum::`[`Router`]s with related `axum::`[`Handler`]s.
//!
//! [`Router`]: axum::routing::Router
//! [`Handler`]: axum::handler::Handler

mod designs;
mod images;
mod monitors;
mod trends;

pub mod request;
pub mod response;

use axum::Router;
use axum::response::{IntoResponse, Response};
use axum::routing::get;

pub use crate::error::{Error, ErrorKind, Result};
use crate::handler::response::ApiInfo;
use crate::service::ServiceState;

#[inline]
async fn fallback_handler() -> Response {
    ErrorKind::NotFound.into_response()
}

/// Root endpoint with API information.
async fn root() -> axum::Json<ApiInfo> {
    axum::Json(ApiInfo {
        message: "Atelier Design Agent API".to_owned(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
        health: "/health".to_owned(),
    })
}

/// Returns a [`Router`] with all routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes(state: ServiceState) -> Router {
    Router::new()
        .route("/", get(root))
        .merge(monitors::routes())
        .merge(designs::routes())
        .merge(trends::routes())
        .merge(images::routes())
        .fallback(fallback_handler)
        .with_state(state)
}

#[cfg(test)]
pub(crate) mod test {
    use atelier_core::fs::ImageStore;
    use atelier_core::mock::MockConfig;
    use atelier_engine::EngineConfig;
    use axum_test::TestServer;

    use super::routes;
    use crate::service::ServiceState;

    /// Builds a test server over the full route set with mock providers.
    ///
    /// The returned tempdir owns the uploads directory and must be kept
    /// alive for the duration of the test.
    pub(crate) async fn create_test_server(mock: MockConfig) -> (tempfile::TempDir, TestServer) {
        let dir = tempfile::tempdir().unwrap();
        let images = ImageStore::init(dir.path().join("uploads")).await.unwrap();
        let state = ServiceState::new(mock.into_services(), images, EngineConfig::default());
        let server = TestServer::new(routes(state)).unwrap();
        (dir, server)
    }
}
