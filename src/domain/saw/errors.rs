//! SAW validation errors.

use thiserror::Error;

use crate::domain::foundation::{ErrorKind, MatrixError};

/// Reasons a scoring input or query is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SawError {
    #[error(transparent)]
    Shape(#[from] MatrixError),

    #[error("Decision matrix must be {expected_rows}x{expected_cols}")]
    DecisionMatrixShape {
        expected_rows: usize,
        expected_cols: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Number of weights must match number of criteria ({expected})")]
    WeightCount { expected: usize, actual: usize },

    #[error("Weights must sum to 1.0 (current sum: {sum:.4})")]
    WeightSum { sum: f64 },

    #[error("Weights cannot be negative (got {value} at index {index})")]
    NegativeWeight { index: usize, value: f64 },

    #[error("Number of criteria types must match number of criteria")]
    CriteriaTypeCount { expected: usize, actual: usize },

    #[error("Criteria type must be 'benefit' or 'cost' (got '{value}' at index {index})")]
    InvalidCriteriaType { index: usize, value: String },

    #[error("Decision matrix cannot contain negative values")]
    NegativeValue { row: usize, col: usize, value: f64 },

    #[error("Decision matrix values must be finite numbers (row {row}, column {col})")]
    NonFiniteValue { row: usize, col: usize },

    #[error("Alternative index {index} is out of range (there are {count} alternatives)")]
    AlternativeIndexOutOfRange { index: usize, count: usize },
}

impl SawError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SawError::Shape(_)
            | SawError::DecisionMatrixShape { .. }
            | SawError::WeightCount { .. }
            | SawError::CriteriaTypeCount { .. }
            | SawError::InvalidCriteriaType { .. }
            | SawError::AlternativeIndexOutOfRange { .. } => ErrorKind::Structural,
            SawError::WeightSum { .. }
            | SawError::NegativeWeight { .. }
            | SawError::NegativeValue { .. }
            | SawError::NonFiniteValue { .. } => ErrorKind::NumericInvariant,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_sum_shows_four_decimals() {
        let err = SawError::WeightSum { sum: 0.9 };
        assert_eq!(err.to_string(), "Weights must sum to 1.0 (current sum: 0.9000)");
    }

    #[test]
    fn shape_error_shows_expected_dimensions() {
        let err = SawError::DecisionMatrixShape {
            expected_rows: 3,
            expected_cols: 2,
            rows: 2,
            cols: 2,
        };
        assert_eq!(err.to_string(), "Decision matrix must be 3x2");
    }

    #[test]
    fn invalid_type_names_value_and_index() {
        let err = SawError::InvalidCriteriaType {
            index: 1,
            value: "profit".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Criteria type must be 'benefit' or 'cost' (got 'profit' at index 1)"
        );
    }

    #[test]
    fn kinds_follow_taxonomy() {
        assert_eq!(
            SawError::WeightCount { expected: 2, actual: 3 }.kind(),
            ErrorKind::Structural
        );
        assert_eq!(
            SawError::WeightSum { sum: 0.9 }.kind(),
            ErrorKind::NumericInvariant
        );
    }
}
