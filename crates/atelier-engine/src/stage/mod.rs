//! Pipeline stages.
//!
//! Each stage consumes and augments the shared [`WorkflowState`]. Stages
//! handle their own expected failures by recording an error message and
//! substituting fallback values; an `Err` escaping a stage is caught by the
//! pipeline driver, which records it and moves on.
//!
//! [`WorkflowState`]: crate::WorkflowState

mod design_generation;
mod design_planning;
mod image_creation;
mod quality_assessment;
mod result_compilation;
mod trend_analysis;

pub use design_generation::DesignGenerationStage;
pub use design_planning::DesignPlanningStage;
pub use image_creation::ImageCreationStage;
pub use quality_assessment::QualityAssessmentStage;
pub use result_compilation::ResultCompilationStage;
pub use trend_analysis::TrendAnalysisStage;

use crate::context::EngineContext;
use crate::error::Result;
use crate::state::WorkflowState;

/// Tracing target for stage execution.
pub const TRACING_TARGET: &str = "atelier_engine::stage";

/// One step of the fixed pipeline.
#[async_trait::async_trait]
pub trait Stage: Send + Sync {
    /// Stable stage name used in logs and the regeneration jump.
    fn name(&self) -> &'static str;

    /// Runs the stage against the shared state.
    async fn run(&self, ctx: &EngineContext, state: &mut WorkflowState) -> Result<()>;
}
