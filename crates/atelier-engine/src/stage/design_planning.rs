//! Design planning stage: one prompt per requested variation.

use atelier_core::types::DesignPrompt;

use super::{Stage, TRACING_TARGET};
use crate::context::EngineContext;
use crate::error::Result;
use crate::prompts::build_design_prompt;
use crate::state::{WorkflowState, WorkflowStep};

/// Plans design generation based on the trend analysis.
///
/// Always produces exactly `count` prompt records with distinct variation
/// indices `0..count`.
pub struct DesignPlanningStage;

impl DesignPlanningStage {
    /// Stage name constant.
    pub const NAME: &'static str = "design_planner";
}

#[async_trait::async_trait]
impl Stage for DesignPlanningStage {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn run(&self, _ctx: &EngineContext, state: &mut WorkflowState) -> Result<()> {
        let trend_analysis = state.trend_analysis_or_fallback();
        let profile = state.brief.strategy.profile();

        let prompts: Vec<DesignPrompt> = (0..state.brief.count)
            .map(|variation| {
                let prompt = build_design_prompt(
                    &trend_analysis,
                    &state.brief.garment_type,
                    &profile,
                    &state.brief.target_audience,
                    &state.brief.occasion,
                    &state.brief.preferences,
                );
                DesignPrompt::new(
                    variation,
                    prompt,
                    state.brief.strategy,
                    state.brief.target_audience.clone(),
                    state.brief.occasion.clone(),
                )
            })
            .collect();

        tracing::debug!(
            target: TRACING_TARGET,
            stage = Self::NAME,
            prompt_count = prompts.len(),
            strategy = %state.brief.strategy,
            "Design prompts planned"
        );

        state.design_prompts = prompts;
        state.current_step = WorkflowStep::DesignPlanningComplete;
        Ok(())
    }
}
