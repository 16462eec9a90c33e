//! HTTP handlers for the decision-analysis endpoints.
//!
//! Validation failures answer `200 OK` with `{ "success": false, "error": ... }`.
//! Only a body that is not valid JSON for the request type gets a `400`,
//! still in the same envelope.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::debug;

use crate::application::{
    CalculateAhpHandler, CalculateSawHandler, ImportDecisionMatrixHandler, ScoreHardwareHandler,
    ScoreStoreListingHandler,
};
use crate::domain::attributes::HardwareScorer;
use crate::ports::DecisionMatrixImporter;

use super::dto::{
    CalculateAhpRequest, CalculateSawRequest, CalculationResponse, HealthResponse,
    ScoreHardwareRequest, ScoreStoreListingRequest,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for the decision-analysis routes.
///
/// Cloned per request; dependencies are Arc-wrapped.
#[derive(Clone)]
pub struct McdaAppState {
    pub importer: Arc<dyn DecisionMatrixImporter>,
    pub hardware_scorer: HardwareScorer,
}

impl McdaAppState {
    pub fn new(importer: Arc<dyn DecisionMatrixImporter>, hardware_scorer: HardwareScorer) -> Self {
        Self {
            importer,
            hardware_scorer,
        }
    }

    pub fn calculate_ahp_handler(&self) -> CalculateAhpHandler {
        CalculateAhpHandler::new()
    }

    pub fn calculate_saw_handler(&self) -> CalculateSawHandler {
        CalculateSawHandler::new()
    }

    pub fn import_handler(&self) -> ImportDecisionMatrixHandler {
        ImportDecisionMatrixHandler::new(self.importer.clone())
    }

    pub fn score_hardware_handler(&self) -> ScoreHardwareHandler {
        ScoreHardwareHandler::new(self.hardware_scorer.clone())
    }

    pub fn score_store_listing_handler(&self) -> ScoreStoreListingHandler {
        ScoreStoreListingHandler::new()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Request Body Rejection
// ════════════════════════════════════════════════════════════════════════════════

/// A request body that could not be read as the expected JSON.
pub struct MalformedRequest(JsonRejection);

impl IntoResponse for MalformedRequest {
    fn into_response(self) -> Response {
        let message = self.0.body_text();
        debug!(status = %self.0.status(), error = %message, "Malformed request body");

        let body = CalculationResponse::<()>::failure(message);
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

impl From<JsonRejection> for MalformedRequest {
    fn from(rejection: JsonRejection) -> Self {
        Self(rejection)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /calculate_ahp - Criterion weights and consistency
pub async fn calculate_ahp(
    State(state): State<McdaAppState>,
    request: Result<Json<CalculateAhpRequest>, JsonRejection>,
) -> Result<impl IntoResponse, MalformedRequest> {
    let Json(request) = request?;
    let result = state.calculate_ahp_handler().handle(request.into());
    Ok(Json(CalculationResponse::from(result)))
}

/// POST /calculate_saw - Scores and ranking of alternatives
pub async fn calculate_saw(
    State(state): State<McdaAppState>,
    request: Result<Json<CalculateSawRequest>, JsonRejection>,
) -> Result<impl IntoResponse, MalformedRequest> {
    let Json(request) = request?;
    let result = state.calculate_saw_handler().handle(request.into());
    Ok(Json(CalculationResponse::from(result)))
}

/// POST /upload_saw_data - Decision table from an uploaded CSV body
pub async fn upload_saw_data(State(state): State<McdaAppState>, body: Bytes) -> impl IntoResponse {
    let result = state.import_handler().handle(&body);
    Json(CalculationResponse::from(result))
}

/// POST /score_hardware - CPU and GPU names to 1-5 benchmark scores
pub async fn score_hardware(
    State(state): State<McdaAppState>,
    request: Result<Json<ScoreHardwareRequest>, JsonRejection>,
) -> Result<impl IntoResponse, MalformedRequest> {
    let Json(request) = request?;
    let scores = state.score_hardware_handler().handle(request.into());
    Ok(Json(CalculationResponse::Success(scores)))
}

/// POST /score_store_listing - Release year and review label to ordinal scores
pub async fn score_store_listing(
    State(state): State<McdaAppState>,
    request: Result<Json<ScoreStoreListingRequest>, JsonRejection>,
) -> Result<impl IntoResponse, MalformedRequest> {
    let Json(request) = request?;
    let scores = state.score_store_listing_handler().handle(request.into());
    Ok(Json(CalculationResponse::Success(scores)))
}

/// GET /health - Liveness probe
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse::ok())
}
