//! Design generation and catalog metadata handlers.

use std::collections::BTreeMap;

use atelier_core::types::{DesignStrategy, GarmentCategory};
use atelier_engine::{DesignRunReport, Pipeline};
use axum::Router;
use axum::extract::State;
use axum::routing::{get, post};
use strum::IntoEnumIterator;
use validator::Validate;

use super::request::GenerateDesigns;
use super::response::{ApiResponse, CategoryCatalog, StrategyCatalog};
use crate::handler::Result;
use crate::service::ServiceState;

/// Tracing target for design operations.
const TRACING_TARGET: &str = "atelier_server::handler::designs";

/// Generates fashion designs based on trends and preferences.
#[tracing::instrument(skip_all, fields(garment_type = %request.garment_type, category = %request.category, count = request.count))]
async fn generate_designs(
    State(state): State<ServiceState>,
    axum::Json(request): axum::Json<GenerateDesigns>,
) -> Result<axum::Json<ApiResponse<DesignRunReport>>> {
    request.validate()?;

    tracing::info!(
        target: TRACING_TARGET,
        strategy = %request.strategy,
        "Generating designs"
    );

    let ctx = state.engine_context();
    let run = Pipeline::standard().execute(&ctx, request.into_brief()).await;

    let envelope = match (run.success, run.final_result) {
        (true, Some(report)) => {
            tracing::info!(
                target: TRACING_TARGET,
                design_count = report.generated_designs.len(),
                image_count = report.final_images.len(),
                "Design generation completed"
            );
            ApiResponse::success("Designs generated successfully", report)
        }
        _ => {
            let error = if run.error_messages.is_empty() {
                "Workflow execution failed".to_owned()
            } else {
                run.error_messages.join("; ")
            };
            tracing::error!(
                target: TRACING_TARGET,
                error = %error,
                "Design generation failed"
            );
            ApiResponse::failure("Design generation failed", error)
        }
    };

    Ok(axum::Json(envelope))
}

/// Lists the available design strategies with their weighted profiles.
async fn get_strategies() -> axum::Json<StrategyCatalog> {
    let strategies: BTreeMap<String, _> = DesignStrategy::iter()
        .map(|strategy| (strategy.to_string(), strategy.profile()))
        .collect();
    axum::Json(StrategyCatalog { strategies })
}

/// Lists the garment categories with their catalog profiles.
async fn get_categories() -> axum::Json<CategoryCatalog> {
    let categories: BTreeMap<String, _> = GarmentCategory::iter()
        .filter_map(|category| category.profile().map(|p| (category.to_string(), p)))
        .collect();
    axum::Json(CategoryCatalog { categories })
}

/// Returns a [`Router`] with all design routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> Router<ServiceState> {
    Router::new()
        .route("/api/v1/designs/generate", post(generate_designs))
        .route("/api/v1/designs/strategies", get(get_strategies))
        .route("/api/v1/designs/categories", get(get_categories))
}

#[cfg(test)]
mod tests {
    use atelier_core::mock::MockConfig;
    use serde_json::json;

    use super::*;
    use crate::handler::test::create_test_server;

    #[tokio::test]
    async fn generate_returns_requested_count() {
        let (_dir, server) = create_test_server(MockConfig::default()).await;

        let response = server
            .post("/api/v1/designs/generate")
            .json(&json!({
                "garmentType": "dress",
                "category": "dresses",
                "strategy": "balanced",
                "count": 2
            }))
            .await;
        response.assert_status_ok();

        let envelope = response.json::<ApiResponse<DesignRunReport>>();
        assert!(envelope.success);
        let report = envelope.data.unwrap();
        assert_eq!(report.generated_designs.len(), 2);
        assert_eq!(report.metadata.category, GarmentCategory::Dresses);
        assert_eq!(report.metadata.strategy, DesignStrategy::Balanced);
    }

    #[tokio::test]
    async fn out_of_range_count_is_rejected() {
        let (_dir, server) = create_test_server(MockConfig::default()).await;

        let response = server
            .post("/api/v1/designs/generate")
            .json(&json!({
                "garmentType": "dress",
                "category": "dresses",
                "count": 11
            }))
            .await;
        assert!(response.status_code().is_client_error());
    }

    #[tokio::test]
    async fn unknown_strategy_is_rejected() {
        let (_dir, server) = create_test_server(MockConfig::default()).await;

        let response = server
            .post("/api/v1/designs/generate")
            .json(&json!({
                "garmentType": "dress",
                "category": "dresses",
                "strategy": "yolo"
            }))
            .await;
        assert!(response.status_code().is_client_error());
    }

    #[tokio::test]
    async fn strategy_catalog_lists_all_strategies() {
        let (_dir, server) = create_test_server(MockConfig::default()).await;

        let response = server.get("/api/v1/designs/strategies").await;
        response.assert_status_ok();

        let catalog = response.json::<serde_json::Value>();
        let strategies = catalog["strategies"].as_object().unwrap();
        assert_eq!(strategies.len(), 4);
        assert_eq!(strategies["balanced"]["trend_weight"], 0.7);
        assert_eq!(strategies["balanced"]["market_fit_weight"], 0.9);
        assert_eq!(
            strategies["sustainable"]["description"],
            "Focus on sustainable and ethical design"
        );
    }

    #[tokio::test]
    async fn category_catalog_excludes_wildcard() {
        let (_dir, server) = create_test_server(MockConfig::default()).await;

        let response = server.get("/api/v1/designs/categories").await;
        response.assert_status_ok();

        let catalog = response.json::<serde_json::Value>();
        let categories = catalog["categories"].as_object().unwrap();
        assert_eq!(categories.len(), 4);
        assert!(categories.contains_key("dresses"));
        assert!(!categories.contains_key("all"));
        assert_eq!(categories["dresses"]["trend_sensitivity"], "very high");
    }
}
