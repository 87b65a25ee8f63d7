//! Standalone trend analysis handlers.

use atelier_engine::Pipeline;
use axum::Router;
use axum::extract::State;
use axum::routing::post;
use validator::Validate;

use super::request::AnalyzeTrends;
use super::response::{ApiResponse, TrendAnalysisPayload};
use crate::handler::Result;
use crate::service::ServiceState;

/// Tracing target for trend operations.
const TRACING_TARGET: &str = "atelier_server::handler::trends";

/// Analyzes current fashion trends for a category without generating designs.
#[tracing::instrument(skip_all, fields(category = %request.category, garment_type = %request.garment_type))]
async fn analyze_trends(
    State(state): State<ServiceState>,
    axum::Json(request): axum::Json<AnalyzeTrends>,
) -> Result<axum::Json<ApiResponse<TrendAnalysisPayload>>> {
    request.validate()?;

    tracing::info!(target: TRACING_TARGET, "Analyzing trends");

    let ctx = state.engine_context();
    let run = Pipeline::analyze_only(
        &ctx,
        request.category,
        request.garment_type,
        request.season,
        request.year,
    )
    .await;

    let envelope = match run.trend_analysis {
        Some(trend_analysis) => ApiResponse::success(
            "Trend analysis completed successfully",
            TrendAnalysisPayload {
                trend_analysis,
                current_step: run.current_step,
            },
        ),
        None => ApiResponse::failure("Trend analysis failed", "No trend data generated"),
    };

    Ok(axum::Json(envelope))
}

/// Returns a [`Router`] with all trend routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> Router<ServiceState> {
    Router::new().route("/api/v1/trends/analyze", post(analyze_trends))
}

#[cfg(test)]
mod tests {
    use atelier_core::mock::MockConfig;
    use atelier_core::types::{GarmentCategory, Season, TrendDataSource};
    use atelier_engine::WorkflowStep;
    use serde_json::json;

    use super::*;
    use crate::handler::test::create_test_server;

    #[tokio::test]
    async fn analyze_falls_back_on_prose_response() {
        // The default mock returns prose, so the structured decode degrades
        // to the per-category fallback while the request still succeeds.
        let (_dir, server) = create_test_server(MockConfig::default()).await;

        let response = server
            .post("/api/v1/trends/analyze")
            .json(&json!({"category": "dresses", "garmentType": "dress"}))
            .await;
        response.assert_status_ok();

        let envelope = response.json::<ApiResponse<TrendAnalysisPayload>>();
        assert!(envelope.success);
        let payload = envelope.data.unwrap();
        assert_eq!(payload.current_step, WorkflowStep::TrendAnalysisComplete);
        assert_eq!(payload.trend_analysis.category, GarmentCategory::Dresses);
        assert_eq!(
            payload.trend_analysis.data_source,
            TrendDataSource::Fallback
        );
    }

    #[tokio::test]
    async fn analyze_honors_requested_period() {
        let (_dir, server) = create_test_server(MockConfig::default()).await;

        let response = server
            .post("/api/v1/trends/analyze")
            .json(&json!({
                "category": "outerwear",
                "garmentType": "coat",
                "season": "winter",
                "year": 2026
            }))
            .await;
        response.assert_status_ok();

        let envelope = response.json::<ApiResponse<TrendAnalysisPayload>>();
        let analysis = envelope.data.unwrap().trend_analysis;
        assert_eq!(analysis.season, Season::Winter);
        assert_eq!(analysis.year, 2026);
    }

    #[tokio::test]
    async fn unknown_category_is_rejected() {
        let (_dir, server) = create_test_server(MockConfig::default()).await;

        let response = server
            .post("/api/v1/trends/analyze")
            .json(&json!({"category": "hats"}))
            .await;
        assert!(response.status_code().is_client_error());
    }
}
