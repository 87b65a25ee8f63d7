//! Quality assessment stage: coarse presence scoring.

use super::{Stage, TRACING_TARGET};
use crate::context::EngineContext;
use crate::error::Result;
use crate::state::{WorkflowState, WorkflowStep};

/// Scores the run by artifact presence: +0.5 for any design concepts,
/// +0.5 for any stored images. The score is recorded for observability;
/// nothing downstream thresholds on it.
pub struct QualityAssessmentStage;

impl QualityAssessmentStage {
    /// Stage name constant.
    pub const NAME: &'static str = "quality_assessor";
}

#[async_trait::async_trait]
impl Stage for QualityAssessmentStage {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn run(&self, _ctx: &EngineContext, state: &mut WorkflowState) -> Result<()> {
        let mut quality_score = 0.0;
        if !state.generated_designs.is_empty() {
            quality_score += 0.5;
        }
        if !state.final_images.is_empty() {
            quality_score += 0.5;
        }

        tracing::debug!(
            target: TRACING_TARGET,
            stage = Self::NAME,
            quality_score,
            design_count = state.generated_designs.len(),
            image_count = state.final_images.len(),
            "Quality assessed"
        );

        state.quality_score = quality_score;
        state.current_step = WorkflowStep::QualityAssessmentComplete;
        Ok(())
    }
}
