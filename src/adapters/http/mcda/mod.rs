//! HTTP adapter for the decision-analysis engines.
//!
//! Exposes the engines via a JSON API:
//! - `POST /calculate_ahp` - Weight criteria from a pairwise comparison matrix
//! - `POST /calculate_saw` - Score and rank alternatives
//! - `POST /upload_saw_data` - Read a CSV decision table
//! - `POST /score_hardware` - Score CPU / GPU names against benchmark catalogs
//! - `POST /score_store_listing` - Score a release year and store review label
//! - `GET /health` - Liveness probe

pub mod dto;
mod handlers;
mod routes;

pub use handlers::{McdaAppState, MalformedRequest};
pub use routes::{mcda_router, mcda_routes};
