//! Response types for text generation.

use serde::{Deserialize, Serialize};

/// Text produced by a generation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResponse {
    /// The generated text, concatenated across response parts.
    pub text: String,
    /// Model that produced the text, when reported.
    pub model: Option<String>,
}

impl GenerationResponse {
    /// Creates a response from plain text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            model: None,
        }
    }
}
