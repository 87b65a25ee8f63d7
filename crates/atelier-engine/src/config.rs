//! Pipeline configuration.

use serde::{Deserialize, Serialize};

/// Default cap on designs per request.
pub const DEFAULT_MAX_DESIGNS_PER_REQUEST: usize = 10;

/// Default quality threshold. Recorded for observability; the post-assessment
/// decision intentionally does not enforce it.
pub const DEFAULT_QUALITY_THRESHOLD: f64 = 0.8;

/// Default trend-confidence threshold.
pub const DEFAULT_TREND_CONFIDENCE_THRESHOLD: f64 = 0.7;

/// Default maximum regeneration iterations per run.
pub const DEFAULT_MAX_ITERATIONS: u32 = 1;

/// Configuration for the design generation pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Hard cap on the number of design variations per request.
    pub max_designs_per_request: usize,
    /// Quality score a run would need to skip regeneration. Recorded only.
    pub design_quality_threshold: f64,
    /// Minimum confidence for trend entries. Recorded only.
    pub trend_confidence_threshold: f64,
    /// Maximum regeneration iterations per run.
    pub max_iterations: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_designs_per_request: DEFAULT_MAX_DESIGNS_PER_REQUEST,
            design_quality_threshold: DEFAULT_QUALITY_THRESHOLD,
            trend_confidence_threshold: DEFAULT_TREND_CONFIDENCE_THRESHOLD,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl EngineConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the per-request design cap.
    pub fn with_max_designs_per_request(mut self, max: usize) -> Self {
        self.max_designs_per_request = max;
        self
    }

    /// Clamps a requested variation count into the accepted range.
    pub fn clamp_count(&self, count: usize) -> usize {
        count.clamp(1, self.max_designs_per_request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_bounds_count() {
        let config = EngineConfig::default();
        assert_eq!(config.clamp_count(0), 1);
        assert_eq!(config.clamp_count(3), 3);
        assert_eq!(config.clamp_count(25), 10);
    }
}
