//! AHP Module - Criterion weights from pairwise expert judgments.
//!
//! # Components
//!
//! - `PairwiseComparisonMatrix` - Validated reciprocal judgment matrix
//! - `AhpCalculator` - Weight derivation, weight ranking, full analysis
//! - `ConsistencyReport` - λmax, CI, RI, CR and the acceptability flag
//! - `random_index` - Saaty's Random Index table
//!
//! All functions are pure and stateless; an inconsistent matrix still yields
//! weights and is reported through `ConsistencyReport::is_consistent`.

mod calculator;
mod consistency;
mod errors;
mod pairwise_matrix;
mod random_index;

pub use calculator::{AhpCalculator, AhpResult, CriterionRank, WeightDetail};
pub use consistency::{ConsistencyReport, CONSISTENCY_THRESHOLD};
pub use errors::AhpError;
pub use pairwise_matrix::PairwiseComparisonMatrix;
pub use random_index::{random_index, DEFAULT_RANDOM_INDEX, RANDOM_INDEX_TABLE};
