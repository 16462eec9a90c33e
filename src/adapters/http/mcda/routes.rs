//! Axum router configuration for the decision-analysis endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    calculate_ahp, calculate_saw, health, score_hardware, score_store_listing, upload_saw_data,
    McdaAppState,
};

/// Create the decision-analysis router.
///
/// # Routes
///
/// - `POST /calculate_ahp` - AHP weights and consistency
/// - `POST /calculate_saw` - SAW scores and ranking
/// - `POST /upload_saw_data` - Parse a CSV decision table
/// - `POST /score_hardware` - Benchmark scores for CPU / GPU names
/// - `POST /score_store_listing` - Release year and review label scores
/// - `GET /health` - Liveness probe
pub fn mcda_routes() -> Router<McdaAppState> {
    Router::new()
        .route("/calculate_ahp", post(calculate_ahp))
        .route("/calculate_saw", post(calculate_saw))
        .route("/upload_saw_data", post(upload_saw_data))
        .route("/score_hardware", post(score_hardware))
        .route("/score_store_listing", post(score_store_listing))
        .route("/health", get(health))
}

/// Create the complete router with state applied.
pub fn mcda_router(state: McdaAppState) -> Router {
    mcda_routes().with_state(state)
}
