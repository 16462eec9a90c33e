//! Application handlers.
//!
//! Command and query handlers that orchestrate the engines and ports.

pub mod mcda;

pub use mcda::{
    CalculateAhpCommand, CalculateAhpHandler, CalculateSawCommand, CalculateSawHandler,
    HardwareScores, ImportDecisionMatrixHandler, ScoreHardwareHandler, ScoreHardwareQuery,
    ScoreStoreListingHandler, ScoreStoreListingQuery, StoreListingScores,
};
