//! Decision-analysis handlers.
//!
//! Each handler turns a command or query into an engine call and returns the
//! engine's `Result` unchanged; callers wrap it in `CalculationResponse`.

mod calculate_ahp;
mod calculate_saw;
mod import_decision_matrix;
mod score_hardware;
mod score_store_listing;

pub use calculate_ahp::{CalculateAhpCommand, CalculateAhpHandler};
pub use calculate_saw::{CalculateSawCommand, CalculateSawHandler};
pub use import_decision_matrix::ImportDecisionMatrixHandler;
pub use score_hardware::{HardwareScores, ScoreHardwareHandler, ScoreHardwareQuery};
pub use score_store_listing::{
    ScoreStoreListingHandler, ScoreStoreListingQuery, StoreListingScores,
};
