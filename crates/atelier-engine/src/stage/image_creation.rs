//! Image creation stage: one image-model call per successful concept.

use atelier_core::img::ImageRequest;

use super::{Stage, TRACING_TARGET};
use crate::context::EngineContext;
use crate::error::Result;
use crate::prompts::build_image_prompt;
use crate::state::{WorkflowState, WorkflowStep};

/// Creates product photographs for the generated design concepts.
///
/// Fallback concepts are skipped. A call that fails or answers without
/// inline image data skips that design; siblings keep going and the stage
/// never fails the run.
pub struct ImageCreationStage;

impl ImageCreationStage {
    /// Stage name constant.
    pub const NAME: &'static str = "image_creator";
}

#[async_trait::async_trait]
impl Stage for ImageCreationStage {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn run(&self, ctx: &EngineContext, state: &mut WorkflowState) -> Result<()> {
        state.final_images = Vec::new();

        let candidates: Vec<(String, String)> = state
            .generated_designs
            .iter()
            .filter(|design| !design.is_fallback)
            .filter_map(|design| {
                design.concept.as_ref().map(|concept| {
                    let prompt = build_image_prompt(
                        concept,
                        &design.garment_type,
                        &design.target_audience,
                        &design.occasion,
                    );
                    (design.id.clone(), prompt)
                })
            })
            .collect();

        for (design_id, prompt) in candidates {
            let image = match ctx.services.img.generate_image(&ImageRequest::new(prompt)).await {
                Ok(image) => image,
                Err(error) => {
                    tracing::warn!(
                        target: TRACING_TARGET,
                        stage = Self::NAME,
                        design_id = %design_id,
                        error = %error,
                        "Image generation failed, skipping design"
                    );
                    continue;
                }
            };

            match ctx.images.save_png(&design_id, &image.data).await {
                Ok(path) => state.final_images.push(path.display().to_string()),
                Err(error) => {
                    tracing::warn!(
                        target: TRACING_TARGET,
                        stage = Self::NAME,
                        design_id = %design_id,
                        error = %error,
                        "Image write failed"
                    );
                    state.record_error(format!("Image save error for {design_id}: {error}"));
                }
            }
        }

        tracing::debug!(
            target: TRACING_TARGET,
            stage = Self::NAME,
            image_count = state.final_images.len(),
            "Image creation completed"
        );

        state.current_step = WorkflowStep::ImageCreationComplete;
        Ok(())
    }
}
