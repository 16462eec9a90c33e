//! SAW Module - Simple Additive Weighting over a decision matrix.
//!
//! # Components
//!
//! - `normalization` - Benefit and cost column rules, with degenerate-column policy
//! - `SawCalculator` - Validation, scoring, ranking, contribution breakdown,
//!   best/worst/compare queries
//!
//! Weights are treated as an opaque vector and re-validated here regardless
//! of whether they came from the AHP engine.

mod calculator;
mod errors;
mod normalization;

pub use calculator::{
    AlternativeBreakdown, AlternativeComparison, AlternativeScore, CriterionContribution,
    RankedAlternative, SawCalculator, SawInput, SawResult,
};
pub use errors::SawError;
pub use normalization::{normalize_benefit, normalize_column, normalize_cost, normalize_matrix};
