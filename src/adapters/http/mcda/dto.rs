//! HTTP DTOs for the decision-analysis endpoints.
//!
//! Request bodies use the snake_case field names of the JSON API. Responses
//! are the engine results wrapped in `CalculationResponse`, so only the
//! bodies that have no engine counterpart are defined here.

use serde::{Deserialize, Serialize};

use crate::application::{
    CalculateAhpCommand, CalculateSawCommand, ScoreHardwareQuery, ScoreStoreListingQuery,
};

pub use crate::application::{CalculationResponse, HardwareScores, StoreListingScores};
pub use crate::domain::ahp::AhpResult;
pub use crate::domain::saw::SawResult;
pub use crate::ports::ImportedTable;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to weight criteria with AHP.
#[derive(Debug, Clone, Deserialize)]
pub struct CalculateAhpRequest {
    pub criteria: Vec<String>,
    pub pairwise_matrix: Vec<Vec<f64>>,
}

impl From<CalculateAhpRequest> for CalculateAhpCommand {
    fn from(request: CalculateAhpRequest) -> Self {
        Self {
            criteria: request.criteria,
            pairwise_matrix: request.pairwise_matrix,
        }
    }
}

/// Request to rank alternatives with SAW.
#[derive(Debug, Clone, Deserialize)]
pub struct CalculateSawRequest {
    pub alternatives: Vec<String>,
    pub criteria: Vec<String>,
    pub weights: Vec<f64>,
    pub decision_matrix: Vec<Vec<f64>>,
    pub criteria_types: Vec<String>,
}

impl From<CalculateSawRequest> for CalculateSawCommand {
    fn from(request: CalculateSawRequest) -> Self {
        Self {
            alternatives: request.alternatives,
            criteria: request.criteria,
            weights: request.weights,
            decision_matrix: request.decision_matrix,
            criteria_types: request.criteria_types,
        }
    }
}

/// Request to score hardware by name.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoreHardwareRequest {
    #[serde(default)]
    pub cpu: Option<String>,
    #[serde(default)]
    pub gpu: Option<String>,
}

impl From<ScoreHardwareRequest> for ScoreHardwareQuery {
    fn from(request: ScoreHardwareRequest) -> Self {
        Self {
            cpu: request.cpu,
            gpu: request.gpu,
        }
    }
}

/// Request to score a store listing's release year and review label.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoreStoreListingRequest {
    #[serde(default)]
    pub release_year: Option<i32>,
    #[serde(default)]
    pub rating: Option<String>,
}

impl From<ScoreStoreListingRequest> for ScoreStoreListingQuery {
    fn from(request: ScoreStoreListingRequest) -> Self {
        Self {
            release_year: request.release_year,
            rating: request.rating,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Liveness probe body.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self { status: "ok" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ahp_request_accepts_integer_judgments() {
        let request: CalculateAhpRequest = serde_json::from_str(
            r#"{"criteria": ["A", "B"], "pairwise_matrix": [[1, 3], [0.3333, 1]]}"#,
        )
        .unwrap();

        let cmd = CalculateAhpCommand::from(request);
        assert_eq!(cmd.pairwise_matrix[0], vec![1.0, 3.0]);
    }

    #[test]
    fn saw_request_requires_every_field() {
        let result = serde_json::from_str::<CalculateSawRequest>(
            r#"{"alternatives": ["A"], "criteria": ["C"], "weights": [1.0]}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn hardware_request_fields_are_optional() {
        let request: ScoreHardwareRequest = serde_json::from_str(r#"{"gpu": "GTX 970"}"#).unwrap();
        let query = ScoreHardwareQuery::from(request);

        assert!(query.cpu.is_none());
        assert_eq!(query.gpu.as_deref(), Some("GTX 970"));
    }
}
