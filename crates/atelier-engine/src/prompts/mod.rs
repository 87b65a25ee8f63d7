//! Prompt templates for design and image generation.

mod design;
mod image;

pub use design::build_design_prompt;
pub use image::{build_image_prompt, styling_guidelines};
