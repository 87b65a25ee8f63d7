//! Response types for the HTTP API.

use std::collections::BTreeMap;

use atelier_core::types::{CategoryProfile, StrategyProfile, TrendAnalysis};
use atelier_engine::WorkflowStep;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Uniform response envelope shared by all JSON endpoints.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub timestamp: Timestamp,
}

impl<T> ApiResponse<T> {
    /// Creates a success envelope with a payload.
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            error: None,
            timestamp: Timestamp::now(),
        }
    }

    /// Creates a failure envelope with an error string.
    pub fn failure(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            error: Some(error.into()),
            timestamp: Timestamp::now(),
        }
    }
}

/// API info served at the root endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiInfo {
    pub message: String,
    pub version: String,
    pub health: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub agent_status: String,
    pub version: String,
    pub timestamp: Timestamp,
}

/// Static strategy metadata listing.
#[derive(Debug, Clone, Serialize)]
pub struct StrategyCatalog {
    pub strategies: BTreeMap<String, StrategyProfile>,
}

/// Static garment-category metadata listing.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryCatalog {
    pub categories: BTreeMap<String, CategoryProfile>,
}

/// Payload for the standalone trend analysis endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendAnalysisPayload {
    pub trend_analysis: TrendAnalysis,
    pub current_step: WorkflowStep,
}

/// One entry in the generated-image listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageEntry {
    pub filename: String,
    pub size: u64,
    pub created: Timestamp,
    pub url: String,
}

/// Generated-image listing, newest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageListing {
    pub images: Vec<ImageEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_shape() {
        let envelope = ApiResponse::success("ok", 42);
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["data"], 42);
        assert!(value.get("error").is_none());
        assert!(value.get("timestamp").is_some());
    }

    #[test]
    fn failure_envelope_omits_data() {
        let envelope = ApiResponse::<()>::failure("Design generation failed", "upstream error");
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["error"], "upstream error");
        assert!(value.get("data").is_none());
    }
}
