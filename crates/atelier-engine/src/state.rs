//! Workflow state threaded through the pipeline stages.

use atelier_core::types::{
    DesignConcept, DesignPrompt, DesignStrategy, GarmentCategory, Season, TrendAnalysis,
};
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::config::EngineConfig;
use crate::report::DesignRunReport;

/// The request parameters a pipeline run was started with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignBrief {
    /// Concrete garment type, e.g. "dress" or "blazer".
    pub garment_type: String,
    pub category: GarmentCategory,
    pub strategy: DesignStrategy,
    /// Requested variation count; clamped by the engine configuration.
    pub count: usize,
    pub target_audience: String,
    pub occasion: String,
    /// Free-form client preferences, passed through untyped.
    #[serde(default)]
    pub preferences: serde_json::Map<String, serde_json::Value>,
}

impl Default for DesignBrief {
    fn default() -> Self {
        Self {
            garment_type: "general".to_owned(),
            category: GarmentCategory::All,
            strategy: DesignStrategy::Balanced,
            count: 3,
            target_audience: "general".to_owned(),
            occasion: "everyday".to_owned(),
            preferences: serde_json::Map::new(),
        }
    }
}

/// Label for the stage the workflow last completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum WorkflowStep {
    Initialized,
    TrendAnalysisComplete,
    DesignPlanningComplete,
    DesignGenerationComplete,
    ImageCreationComplete,
    QualityAssessmentComplete,
    Complete,
}

/// Mutable state for one pipeline run.
///
/// Created once per request, mutated additively by each stage, discarded
/// after the final report is extracted. There is no identity beyond the
/// lifetime of one call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowState {
    /// Request parameters.
    pub brief: DesignBrief,
    /// Season the run resolves trends for.
    pub season: Season,
    /// Year the run resolves trends for.
    pub year: i16,

    /// Accumulated outputs.
    pub trend_analysis: Option<TrendAnalysis>,
    pub design_prompts: Vec<DesignPrompt>,
    pub generated_designs: Vec<DesignConcept>,
    /// Paths of stored image files, as displayed strings.
    pub final_images: Vec<String>,

    /// Bookkeeping.
    pub current_step: WorkflowStep,
    pub iteration_count: u32,
    pub max_iterations: u32,
    pub quality_score: f64,
    pub error_messages: Vec<String>,

    /// Results.
    pub success: bool,
    pub final_result: Option<DesignRunReport>,
}

impl WorkflowState {
    /// Initializes state for a run, resolving the current season and year
    /// and clamping the requested count.
    pub fn new(mut brief: DesignBrief, config: &EngineConfig) -> Self {
        brief.count = config.clamp_count(brief.count);
        Self {
            brief,
            season: Season::current(),
            year: Season::current_year(),
            trend_analysis: None,
            design_prompts: Vec::new(),
            generated_designs: Vec::new(),
            final_images: Vec::new(),
            current_step: WorkflowStep::Initialized,
            iteration_count: 0,
            max_iterations: config.max_iterations,
            quality_score: 0.0,
            error_messages: Vec::new(),
            success: false,
            final_result: None,
        }
    }

    /// Overrides the season/year the run resolves trends for.
    pub fn with_period(mut self, season: Season, year: i16) -> Self {
        self.season = season;
        self.year = year;
        self
    }

    /// Records a stage error without interrupting the run.
    pub fn record_error(&mut self, message: impl Into<String>) {
        self.error_messages.push(message.into());
    }

    /// Returns the trend analysis, or the static fallback if none was set.
    pub fn trend_analysis_or_fallback(&self) -> TrendAnalysis {
        self.trend_analysis.clone().unwrap_or_else(|| {
            TrendAnalysis::fallback(self.brief.category, self.season, self.year)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_clamps_count() {
        let brief = DesignBrief {
            count: 99,
            ..DesignBrief::default()
        };
        let state = WorkflowState::new(brief, &EngineConfig::default());
        assert_eq!(state.brief.count, 10);
        assert_eq!(state.current_step, WorkflowStep::Initialized);
        assert!(!state.success);
    }

    #[test]
    fn step_labels_are_snake_case() {
        assert_eq!(
            WorkflowStep::TrendAnalysisComplete.to_string(),
            "trend_analysis_complete"
        );
        assert_eq!(WorkflowStep::Complete.to_string(), "complete");
    }
}
