//! AHP validation errors.

use thiserror::Error;

use crate::domain::foundation::{ErrorKind, MatrixError};

/// Reasons a pairwise comparison input is rejected.
///
/// Checks run in declaration order; the first violation wins.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AhpError {
    #[error("At least one criterion is required")]
    NoCriteria,

    #[error(transparent)]
    Shape(#[from] MatrixError),

    #[error("Matrix must be square")]
    NotSquare { rows: usize, cols: usize },

    #[error("Matrix size must match number of criteria")]
    SizeMismatch { size: usize, criteria: usize },

    #[error("Diagonal elements must be 1")]
    NonUnitDiagonal { index: usize, value: f64 },

    #[error("Reciprocal property violated at ({row},{col})")]
    NotReciprocal { row: usize, col: usize, product: f64 },

    #[error("Pairwise comparison at ({row},{col}) must be a positive finite number")]
    NonPositiveEntry { row: usize, col: usize, value: f64 },

    #[error("Pairwise comparisons in column {col} are too large to normalize")]
    ColumnSumOverflow { col: usize },
}

impl AhpError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AhpError::NoCriteria
            | AhpError::Shape(_)
            | AhpError::NotSquare { .. }
            | AhpError::SizeMismatch { .. } => ErrorKind::Structural,
            AhpError::NonUnitDiagonal { .. }
            | AhpError::NotReciprocal { .. }
            | AhpError::NonPositiveEntry { .. }
            | AhpError::ColumnSumOverflow { .. } => ErrorKind::NumericInvariant,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reciprocal_violation_names_position() {
        let err = AhpError::NotReciprocal {
            row: 0,
            col: 1,
            product: 1.5,
        };
        assert_eq!(err.to_string(), "Reciprocal property violated at (0,1)");
    }

    #[test]
    fn shape_errors_are_structural() {
        assert_eq!(AhpError::NotSquare { rows: 2, cols: 3 }.kind(), ErrorKind::Structural);
        assert_eq!(
            AhpError::SizeMismatch { size: 2, criteria: 3 }.kind(),
            ErrorKind::Structural
        );
    }

    #[test]
    fn value_errors_are_numeric() {
        assert_eq!(
            AhpError::NonUnitDiagonal { index: 0, value: 2.0 }.kind(),
            ErrorKind::NumericInvariant
        );
    }

    #[test]
    fn ragged_rows_pass_through_message() {
        let err = AhpError::from(MatrixError::RaggedRow {
            row: 1,
            expected: 3,
            actual: 2,
        });
        assert_eq!(err.to_string(), "Matrix row 1 has length 2, expected 3");
    }
}
