//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates the engines and coordinates between ports. It is
//! also where engine results are wrapped in the `{ success, ... }` envelope.

pub mod handlers;
mod response;

pub use handlers::{
    CalculateAhpCommand, CalculateAhpHandler, CalculateSawCommand, CalculateSawHandler,
    HardwareScores, ImportDecisionMatrixHandler, ScoreHardwareHandler, ScoreHardwareQuery,
    ScoreStoreListingHandler, ScoreStoreListingQuery, StoreListingScores,
};
pub use response::CalculationResponse;
