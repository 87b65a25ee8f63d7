//! Trend analysis stage: web gathering plus AI summarization.

use atelier_core::types::{TrendAnalysis, WebDataMetadata};

use super::{Stage, TRACING_TARGET};
use crate::context::EngineContext;
use crate::error::Result;
use crate::state::{WorkflowState, WorkflowStep};
use crate::trends::{analyze_trends, gather_trend_data};

/// Analyzes current fashion trends using web search and AI analysis.
///
/// A failed analysis degrades to the static per-category fallback, annotated
/// with limited-quality web metadata; the failure is recorded in the state's
/// error list, never swallowed silently.
pub struct TrendAnalysisStage;

impl TrendAnalysisStage {
    /// Stage name constant.
    pub const NAME: &'static str = "trend_analyzer";
}

#[async_trait::async_trait]
impl Stage for TrendAnalysisStage {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn run(&self, ctx: &EngineContext, state: &mut WorkflowState) -> Result<()> {
        let category = state.brief.category;
        let garment_type = state.brief.garment_type.clone();

        let gathered =
            gather_trend_data(ctx, category, &garment_type, state.season, state.year).await;

        let analysis = match analyze_trends(
            ctx,
            &gathered,
            category,
            &garment_type,
            state.season,
            state.year,
        )
        .await
        {
            Ok(analysis) => analysis,
            Err(error) => {
                tracing::warn!(
                    target: TRACING_TARGET,
                    stage = Self::NAME,
                    error = %error,
                    "Trend analysis degraded to fallback"
                );
                state.record_error(format!("Trend analysis error: {error}"));

                let mut fallback =
                    TrendAnalysis::fallback(category, state.season, state.year);
                fallback.garment_type = Some(garment_type);
                fallback.web_data_metadata =
                    Some(WebDataMetadata::limited(gathered.sources.len()));
                fallback
            }
        };

        state.trend_analysis = Some(analysis);
        state.current_step = WorkflowStep::TrendAnalysisComplete;
        Ok(())
    }
}
