//! Final report compiled at the end of a pipeline run.

use atelier_core::types::{DesignConcept, DesignStrategy, GarmentCategory, TrendAnalysis};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Static metadata echoed back with every report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunMetadata {
    pub generated_at: Timestamp,
    pub garment_type: String,
    pub category: GarmentCategory,
    pub strategy: DesignStrategy,
    pub target_audience: String,
    pub occasion: String,
}

/// Everything a completed run produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignRunReport {
    pub success: bool,
    pub trend_analysis: TrendAnalysis,
    /// One entry per requested variation: a concept or a fallback marker.
    pub generated_designs: Vec<DesignConcept>,
    /// Stored image file paths.
    pub final_images: Vec<String>,
    pub metadata: RunMetadata,
}
