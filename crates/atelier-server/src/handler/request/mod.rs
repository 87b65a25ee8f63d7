//! Request types for the HTTP API.

use atelier_core::types::{DesignStrategy, GarmentCategory, Season};
use atelier_engine::DesignBrief;
use serde::{Deserialize, Serialize};
use validator::Validate;

fn default_count() -> usize {
    3
}

fn default_audience() -> String {
    "general".to_owned()
}

fn default_occasion() -> String {
    "everyday".to_owned()
}

fn default_garment_type() -> String {
    "general".to_owned()
}

/// Request payload for design generation.
///
/// Strategy and category are typed enums, so unknown values are rejected at
/// deserialization; the count is validated against the accepted range. All
/// other fields pass through untyped.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateDesigns {
    /// Type of garment, e.g. "dress" or "blazer".
    pub garment_type: String,
    /// Garment category to resolve trends for.
    pub category: GarmentCategory,
    /// Design strategy.
    #[serde(default)]
    pub strategy: DesignStrategy,
    /// Number of designs to generate.
    #[serde(default = "default_count")]
    #[validate(range(min = 1, max = 10, message = "count must be between 1 and 10"))]
    pub count: usize,
    /// Target audience for the designs.
    #[serde(default = "default_audience")]
    pub target_audience: String,
    /// Occasion for the designs.
    #[serde(default = "default_occasion")]
    pub occasion: String,
    /// Additional design preferences, passed through untyped.
    #[serde(default)]
    pub preferences: serde_json::Map<String, serde_json::Value>,
}

impl GenerateDesigns {
    /// Converts the validated request into a pipeline brief.
    pub fn into_brief(self) -> DesignBrief {
        DesignBrief {
            garment_type: self.garment_type,
            category: self.category,
            strategy: self.strategy,
            count: self.count,
            target_audience: self.target_audience,
            occasion: self.occasion,
            preferences: self.preferences,
        }
    }
}

/// Request payload for standalone trend analysis.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeTrends {
    /// Garment category to analyze.
    pub category: GarmentCategory,
    /// Specific garment type.
    #[serde(default = "default_garment_type")]
    pub garment_type: String,
    /// Season to analyze; the current season when absent.
    #[serde(default)]
    pub season: Option<Season>,
    /// Year to analyze; the current year when absent.
    #[serde(default)]
    pub year: Option<i16>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_optional_fields() {
        let request: GenerateDesigns =
            serde_json::from_str(r#"{"garmentType":"dress","category":"dresses"}"#).unwrap();
        assert_eq!(request.count, 3);
        assert_eq!(request.strategy, DesignStrategy::Balanced);
        assert_eq!(request.target_audience, "general");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn unknown_strategy_is_rejected_at_decode() {
        let result = serde_json::from_str::<GenerateDesigns>(
            r#"{"garmentType":"dress","category":"dresses","strategy":"aggressive"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn out_of_range_count_fails_validation() {
        let request: GenerateDesigns = serde_json::from_str(
            r#"{"garmentType":"dress","category":"dresses","count":11}"#,
        )
        .unwrap();
        assert!(request.validate().is_err());
    }
}
