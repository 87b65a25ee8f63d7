//! Request types for text generation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single text generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Unique identifier for this request.
    pub request_id: Uuid,
    /// The full prompt text.
    pub prompt: String,
    /// Sampling temperature in [0,1], provider default when absent.
    pub temperature: Option<f32>,
    /// Output token cap, provider default when absent.
    pub max_output_tokens: Option<u32>,
}

impl GenerationRequest {
    /// Creates a request with provider-default sampling options.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            prompt: prompt.into(),
            temperature: None,
            max_output_tokens: None,
        }
    }

    /// Sets the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}
