//! Design prompt and design concept records.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{DesignStrategy, GarmentCategory};

/// A rendered design-generation prompt for one variation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignPrompt {
    /// Stable per-run identifier, `prompt_{variation}`.
    pub id: String,
    /// The full natural-language prompt sent to the text model.
    pub prompt: String,
    pub strategy: DesignStrategy,
    pub target_audience: String,
    pub occasion: String,
    /// Ordinal variation index, 0-based.
    pub variation: usize,
}

impl DesignPrompt {
    /// Creates a prompt record for the given variation index.
    pub fn new(
        variation: usize,
        prompt: String,
        strategy: DesignStrategy,
        target_audience: impl Into<String>,
        occasion: impl Into<String>,
    ) -> Self {
        Self {
            id: format!("prompt_{variation}"),
            prompt,
            strategy,
            target_audience: target_audience.into(),
            occasion: occasion.into(),
            variation,
        }
    }
}

/// A generated design concept, or a fallback marker when generation failed.
///
/// Per-variation failures never block sibling variations; the failed slot is
/// kept in the batch with `is_fallback = true` and the error text attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignConcept {
    pub id: String,
    pub prompt: String,
    /// Free-text design narrative; absent on fallback records.
    pub concept: Option<String>,
    pub strategy: DesignStrategy,
    pub target_audience: String,
    pub occasion: String,
    pub variation: usize,
    pub garment_type: String,
    pub category: GarmentCategory,
    pub generated_at: Timestamp,
    #[serde(default)]
    pub is_fallback: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DesignConcept {
    /// Creates a successful concept record from its prompt.
    pub fn from_prompt(
        prompt: &DesignPrompt,
        concept: String,
        garment_type: impl Into<String>,
        category: GarmentCategory,
    ) -> Self {
        Self {
            id: prompt.id.clone(),
            prompt: prompt.prompt.clone(),
            concept: Some(concept),
            strategy: prompt.strategy,
            target_audience: prompt.target_audience.clone(),
            occasion: prompt.occasion.clone(),
            variation: prompt.variation,
            garment_type: garment_type.into(),
            category,
            generated_at: Timestamp::now(),
            is_fallback: false,
            error: None,
        }
    }

    /// Creates a fallback marker for a failed variation.
    pub fn fallback(
        prompt: &DesignPrompt,
        error: impl Into<String>,
        garment_type: impl Into<String>,
        category: GarmentCategory,
    ) -> Self {
        Self {
            id: prompt.id.clone(),
            prompt: prompt.prompt.clone(),
            concept: None,
            strategy: prompt.strategy,
            target_audience: prompt.target_audience.clone(),
            occasion: prompt.occasion.clone(),
            variation: prompt.variation,
            garment_type: garment_type.into(),
            category,
            generated_at: Timestamp::now(),
            is_fallback: true,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt() -> DesignPrompt {
        DesignPrompt::new(
            3,
            "design a dress".into(),
            DesignStrategy::Balanced,
            "young professionals",
            "work",
        )
    }

    #[test]
    fn prompt_id_tracks_variation() {
        assert_eq!(prompt().id, "prompt_3");
    }

    #[test]
    fn fallback_concept_keeps_slot_metadata() {
        let concept = DesignConcept::fallback(&prompt(), "model timed out", "dress", GarmentCategory::Dresses);
        assert!(concept.is_fallback);
        assert!(concept.concept.is_none());
        assert_eq!(concept.variation, 3);
        assert_eq!(concept.error.as_deref(), Some("model timed out"));
    }
}
