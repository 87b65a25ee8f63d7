//! Result compilation stage: packaging the final report.

use jiff::Timestamp;

use super::{Stage, TRACING_TARGET};
use crate::context::EngineContext;
use crate::error::Result;
use crate::report::{DesignRunReport, RunMetadata};
use crate::state::{WorkflowState, WorkflowStep};

/// Packages all accumulated artifacts plus request metadata into the final
/// report. Reaching this stage means the run completed; success is declared
/// regardless of how many artifacts survived.
pub struct ResultCompilationStage;

impl ResultCompilationStage {
    /// Stage name constant.
    pub const NAME: &'static str = "result_compiler";
}

#[async_trait::async_trait]
impl Stage for ResultCompilationStage {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn run(&self, _ctx: &EngineContext, state: &mut WorkflowState) -> Result<()> {
        let report = DesignRunReport {
            success: true,
            trend_analysis: state.trend_analysis_or_fallback(),
            generated_designs: state.generated_designs.clone(),
            final_images: state.final_images.clone(),
            metadata: RunMetadata {
                generated_at: Timestamp::now(),
                garment_type: state.brief.garment_type.clone(),
                category: state.brief.category,
                strategy: state.brief.strategy,
                target_audience: state.brief.target_audience.clone(),
                occasion: state.brief.occasion.clone(),
            },
        };

        tracing::info!(
            target: TRACING_TARGET,
            stage = Self::NAME,
            design_count = report.generated_designs.len(),
            image_count = report.final_images.len(),
            error_count = state.error_messages.len(),
            "Run compiled"
        );

        state.final_result = Some(report);
        state.success = true;
        state.current_step = WorkflowStep::Complete;
        Ok(())
    }
}
