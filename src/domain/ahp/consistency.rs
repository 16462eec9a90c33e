//! Consistency diagnostic for a set of pairwise judgments.

use serde::{Deserialize, Serialize};

use super::random_index;

/// Judgments with a consistency ratio below this are considered acceptable.
pub const CONSISTENCY_THRESHOLD: f64 = 0.10;

/// λmax, CI, CR and RI for one pairwise matrix.
///
/// An inconsistent report is not an error: the weights are still usable, the
/// caller is expected to warn the user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyReport {
    pub lambda_max: f64,
    pub consistency_index: f64,
    pub consistency_ratio: f64,
    pub random_index: f64,
    pub is_consistent: bool,
}

impl ConsistencyReport {
    /// Derives CI, RI and CR from λmax for an `n x n` matrix.
    ///
    /// # Edge Cases
    /// - n <= 1: CI is 0, a single criterion is trivially consistent
    /// - RI = 0 (n <= 2): CR is 0
    pub fn from_lambda_max(lambda_max: f64, n: usize) -> Self {
        let consistency_index = if n > 1 {
            (lambda_max - n as f64) / (n as f64 - 1.0)
        } else {
            0.0
        };

        let random_index = random_index(n);
        let consistency_ratio = if random_index == 0.0 {
            0.0
        } else {
            consistency_index / random_index
        };

        Self {
            lambda_max,
            consistency_index,
            consistency_ratio,
            random_index,
            is_consistent: consistency_ratio < CONSISTENCY_THRESHOLD,
        }
    }
}
