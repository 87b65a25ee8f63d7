//! Design generation stage: one text-model call per variation.

use atelier_core::llm::GenerationRequest;
use atelier_core::types::DesignConcept;

use super::{Stage, TRACING_TARGET};
use crate::context::EngineContext;
use crate::error::Result;
use crate::state::{WorkflowState, WorkflowStep};

/// Generates a design concept for every planned prompt.
///
/// Failure isolation here is deliberately per-item: a failed variation is
/// recorded as a fallback marker and its siblings keep generating.
pub struct DesignGenerationStage;

impl DesignGenerationStage {
    /// Stage name constant.
    pub const NAME: &'static str = "design_generator";
}

#[async_trait::async_trait]
impl Stage for DesignGenerationStage {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn run(&self, ctx: &EngineContext, state: &mut WorkflowState) -> Result<()> {
        // A regeneration pass replaces the previous batch wholesale.
        state.generated_designs = Vec::with_capacity(state.design_prompts.len());

        let garment_type = state.brief.garment_type.clone();
        let category = state.brief.category;
        let prompts = state.design_prompts.clone();

        for prompt in &prompts {
            let request = GenerationRequest::new(prompt.prompt.clone());
            let concept = match ctx.services.llm.generate(&request).await {
                Ok(response) => {
                    DesignConcept::from_prompt(prompt, response.text, &garment_type, category)
                }
                Err(error) => {
                    tracing::warn!(
                        target: TRACING_TARGET,
                        stage = Self::NAME,
                        design_id = %prompt.id,
                        error = %error,
                        "Design generation failed for variation"
                    );
                    DesignConcept::fallback(prompt, error.to_string(), &garment_type, category)
                }
            };
            state.generated_designs.push(concept);
        }

        tracing::debug!(
            target: TRACING_TARGET,
            stage = Self::NAME,
            generated = state.generated_designs.iter().filter(|d| !d.is_fallback).count(),
            fallbacks = state.generated_designs.iter().filter(|d| d.is_fallback).count(),
            "Design generation completed"
        );

        state.current_step = WorkflowStep::DesignGenerationComplete;
        Ok(())
    }
}
