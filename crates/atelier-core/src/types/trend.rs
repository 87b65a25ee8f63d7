//! Trend analysis records produced by web search plus AI summarization.
//!
//! Field names serialize in camelCase to preserve the wire shape consumers of
//! the original service already depend on.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{GarmentCategory, Season};

/// Number of sources above which web-derived data is considered high quality.
const HIGH_QUALITY_SOURCE_COUNT: usize = 5;

/// Where a trend analysis came from.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDataSource {
    /// Derived from live web search results summarized by the text model.
    #[default]
    WebSearch,
    /// Static substitute used when analysis or parsing failed.
    Fallback,
}

/// Coarse quality grade for the gathered web data.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataQuality {
    High,
    #[default]
    Medium,
    Limited,
}

/// Bookkeeping about the web data behind an analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebDataMetadata {
    /// Number of distinct web sources consulted.
    pub sources_count: usize,
    /// When the analysis ran.
    pub analysis_date: Timestamp,
    /// Coarse grade based on source count.
    pub data_quality: DataQuality,
}

impl WebDataMetadata {
    /// Grades gathered web data by source count.
    pub fn from_source_count(sources_count: usize) -> Self {
        let data_quality = if sources_count > HIGH_QUALITY_SOURCE_COUNT {
            DataQuality::High
        } else {
            DataQuality::Medium
        };
        Self {
            sources_count,
            analysis_date: Timestamp::now(),
            data_quality,
        }
    }

    /// Metadata for a fallback analysis, graded limited.
    pub fn limited(sources_count: usize) -> Self {
        Self {
            sources_count,
            analysis_date: Timestamp::now(),
            data_quality: DataQuality::Limited,
        }
    }
}

/// A named seasonal trend with design guidance.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KeyTrend {
    pub name: String,
    pub description: String,
    /// Confidence in [0,1] based on how frequently the trend is mentioned.
    pub confidence: f64,
    pub design_implications: Vec<String>,
    pub source: Option<String>,
}

/// A color palette with a trend-strength score.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorPalette {
    pub name: String,
    pub colors: Vec<String>,
    /// primary/secondary/accent.
    pub usage: String,
    pub trend_strength: f64,
    pub source: Option<String>,
}

/// A style direction with key elements and an audience.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleDirection {
    pub name: String,
    pub description: String,
    pub key_elements: Vec<String>,
    pub target_audience: String,
    pub source: Option<String>,
}

/// A material trend with sustainability classification.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MaterialTrend {
    pub material: String,
    pub usage: String,
    /// sustainable/conventional.
    pub sustainability: String,
    pub trend_strength: f64,
    pub source: Option<String>,
}

/// An emerging trend with growth outlook.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmergingTrend {
    pub name: String,
    pub description: String,
    pub growth_potential: f64,
    /// short/medium/long term.
    pub timeframe: String,
}

/// A market observation with relevance grading.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MarketInsight {
    pub insight: String,
    /// high/medium/low.
    pub relevance: String,
    pub source: Option<String>,
}

/// Structured (or defaulted) summary of seasonal fashion signals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendAnalysis {
    pub season: Season,
    pub year: i16,
    pub category: GarmentCategory,
    #[serde(default)]
    pub garment_type: Option<String>,
    #[serde(default)]
    pub data_source: TrendDataSource,
    #[serde(default)]
    pub key_trends: Vec<KeyTrend>,
    #[serde(default)]
    pub color_palettes: Vec<ColorPalette>,
    #[serde(default)]
    pub style_directions: Vec<StyleDirection>,
    #[serde(default)]
    pub material_trends: Vec<MaterialTrend>,
    #[serde(default)]
    pub emerging_trends: Vec<EmergingTrend>,
    #[serde(default)]
    pub market_insights: Vec<MarketInsight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_data_metadata: Option<WebDataMetadata>,
}

impl TrendAnalysis {
    /// Returns the static fallback analysis for a category.
    ///
    /// Used whenever web gathering or AI analysis fails; the record is tagged
    /// with [`TrendDataSource::Fallback`] so consumers can tell it apart from
    /// live data. The content is deterministic for a given season/year input.
    pub fn fallback(category: GarmentCategory, season: Season, year: i16) -> Self {
        Self {
            season,
            year,
            category,
            garment_type: None,
            data_source: TrendDataSource::Fallback,
            key_trends: vec![KeyTrend {
                name: "Sustainable Fashion".into(),
                description: "Eco-friendly materials and ethical production methods".into(),
                confidence: 0.9,
                design_implications: vec![
                    "Use organic materials".into(),
                    "Minimize waste".into(),
                    "Consider lifecycle".into(),
                ],
                source: None,
            }],
            color_palettes: vec![ColorPalette {
                name: "Earth Tones".into(),
                colors: vec![
                    "sage green".into(),
                    "terracotta".into(),
                    "cream".into(),
                    "navy".into(),
                    "rust".into(),
                ],
                usage: "primary".into(),
                trend_strength: 0.8,
                source: None,
            }],
            style_directions: vec![StyleDirection {
                name: "Modern Minimalism".into(),
                description: "Clean, functional, and timeless designs".into(),
                key_elements: vec![
                    "oversized fits".into(),
                    "neutral colors".into(),
                    "quality materials".into(),
                ],
                target_audience: "conscious consumers".into(),
                source: None,
            }],
            material_trends: vec![MaterialTrend {
                material: "organic cotton".into(),
                usage: "primary fabric".into(),
                sustainability: "sustainable".into(),
                trend_strength: 0.8,
                source: None,
            }],
            emerging_trends: Vec::new(),
            market_insights: Vec::new(),
            web_data_metadata: None,
        }
    }

    /// Returns true if this analysis is the static fallback.
    pub fn is_fallback(&self) -> bool {
        self.data_source == TrendDataSource::Fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_is_idempotent() {
        let a = TrendAnalysis::fallback(GarmentCategory::Dresses, Season::Fall, 2025);
        let b = TrendAnalysis::fallback(GarmentCategory::Dresses, Season::Fall, 2025);
        assert_eq!(a, b);
        assert!(a.is_fallback());
        assert_eq!(a.key_trends.len(), 1);
        assert_eq!(a.color_palettes[0].colors.len(), 5);
    }

    #[test]
    fn serializes_camel_case() {
        let analysis = TrendAnalysis::fallback(GarmentCategory::Tops, Season::Spring, 2026);
        let value = serde_json::to_value(&analysis).unwrap();
        assert!(value.get("keyTrends").is_some());
        assert!(value.get("colorPalettes").is_some());
        assert_eq!(value["dataSource"], "fallback");
    }

    #[test]
    fn decodes_partial_documents() {
        // The model is allowed to omit sections; missing arrays decode empty.
        let raw = r#"{"season":"fall","year":2025,"category":"dresses","keyTrends":[{"name":"Quiet Luxury"}]}"#;
        let analysis: TrendAnalysis = serde_json::from_str(raw).unwrap();
        assert_eq!(analysis.key_trends.len(), 1);
        assert_eq!(analysis.key_trends[0].name, "Quiet Luxury");
        assert!(analysis.material_trends.is_empty());
        assert_eq!(analysis.data_source, TrendDataSource::WebSearch);
    }

    #[test]
    fn web_metadata_grades_by_source_count() {
        assert_eq!(
            WebDataMetadata::from_source_count(6).data_quality,
            DataQuality::High
        );
        assert_eq!(
            WebDataMetadata::from_source_count(5).data_quality,
            DataQuality::Medium
        );
        assert_eq!(
            WebDataMetadata::limited(0).data_quality,
            DataQuality::Limited
        );
    }
}
