//! Request types for image generation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single image generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRequest {
    /// Unique identifier for this request.
    pub request_id: Uuid,
    /// The full prompt text describing the image.
    pub prompt: String,
}

impl ImageRequest {
    /// Creates an image request from a prompt.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            prompt: prompt.into(),
        }
    }
}
