//! Validated reciprocal pairwise comparison matrix.

use crate::domain::foundation::{
    is_close, Matrix, EXACT_RELATIVE_TOLERANCE, JUDGEMENT_RELATIVE_TOLERANCE,
};

use super::AhpError;

/// An `n x n` reciprocal matrix of positive judgments with a unit diagonal.
///
/// Entry `(i, j)` says how much more important criterion `i` is than `j`.
/// Only obtainable through [`PairwiseComparisonMatrix::new`], so holding one
/// means every invariant below has been checked.
#[derive(Debug, Clone, PartialEq)]
pub struct PairwiseComparisonMatrix {
    matrix: Matrix,
}

impl PairwiseComparisonMatrix {
    /// Validates `matrix` against `criteria_count` criteria.
    ///
    /// # Checks (first failure wins)
    /// 1. at least one criterion
    /// 2. matrix is square
    /// 3. dimension equals the criterion count
    /// 4. diagonal entries equal 1
    /// 5. `M[i][j] * M[j][i]` within 1% of 1, scanning `i` ascending then `j > i`
    /// 6. every entry is finite and strictly positive
    /// 7. every column sum is finite
    pub fn new(criteria_count: usize, matrix: Matrix) -> Result<Self, AhpError> {
        if criteria_count == 0 {
            return Err(AhpError::NoCriteria);
        }

        if !matrix.is_square() {
            return Err(AhpError::NotSquare {
                rows: matrix.rows(),
                cols: matrix.cols(),
            });
        }

        let n = matrix.rows();
        if n != criteria_count {
            return Err(AhpError::SizeMismatch {
                size: n,
                criteria: criteria_count,
            });
        }

        for index in 0..n {
            let value = matrix.get(index, index);
            if !is_close(value, 1.0, EXACT_RELATIVE_TOLERANCE) {
                return Err(AhpError::NonUnitDiagonal { index, value });
            }
        }

        for row in 0..n {
            for col in (row + 1)..n {
                let product = matrix.get(row, col) * matrix.get(col, row);
                if !is_close(product, 1.0, JUDGEMENT_RELATIVE_TOLERANCE) {
                    return Err(AhpError::NotReciprocal { row, col, product });
                }
            }
        }

        // Two negative reciprocals multiply to 1, so sign is checked separately.
        if let Some((row, col, value)) = matrix
            .entries()
            .find(|&(_, _, value)| !(value.is_finite() && value > 0.0))
        {
            return Err(AhpError::NonPositiveEntry { row, col, value });
        }

        if let Some(col) = matrix.column_sums().iter().position(|sum| !sum.is_finite()) {
            return Err(AhpError::ColumnSumOverflow { col });
        }

        Ok(Self { matrix })
    }

    /// Number of criteria compared.
    pub fn size(&self) -> usize {
        self.matrix.rows()
    }

    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: Vec<Vec<f64>>) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    fn three_criteria() -> Matrix {
        matrix(vec![
            vec![1.0, 3.0, 5.0],
            vec![1.0 / 3.0, 1.0, 2.0],
            vec![1.0 / 5.0, 1.0 / 2.0, 1.0],
        ])
    }

    #[test]
    fn accepts_valid_reciprocal_matrix() {
        let pcm = PairwiseComparisonMatrix::new(3, three_criteria()).unwrap();
        assert_eq!(pcm.size(), 3);
    }

    #[test]
    fn accepts_rounded_reciprocals_within_tolerance() {
        // 0.333 * 3 = 0.999
        let m = matrix(vec![vec![1.0, 3.0], vec![0.333, 1.0]]);
        assert!(PairwiseComparisonMatrix::new(2, m).is_ok());
    }

    #[test]
    fn rejects_empty_criteria() {
        let result = PairwiseComparisonMatrix::new(0, Matrix::zeros(0, 0));
        assert_eq!(result.unwrap_err(), AhpError::NoCriteria);
    }

    #[test]
    fn rejects_non_square() {
        let m = matrix(vec![vec![1.0, 2.0, 3.0], vec![0.5, 1.0, 1.0]]);
        let err = PairwiseComparisonMatrix::new(2, m).unwrap_err();
        assert_eq!(err.to_string(), "Matrix must be square");
    }

    #[test]
    fn rejects_size_mismatch() {
        let err = PairwiseComparisonMatrix::new(2, three_criteria()).unwrap_err();
        assert_eq!(err.to_string(), "Matrix size must match number of criteria");
    }

    #[test]
    fn rejects_non_unit_diagonal() {
        let m = matrix(vec![vec![1.0, 2.0], vec![0.5, 2.0]]);
        let err = PairwiseComparisonMatrix::new(2, m).unwrap_err();
        assert_eq!(err, AhpError::NonUnitDiagonal { index: 1, value: 2.0 });
        assert_eq!(err.to_string(), "Diagonal elements must be 1");
    }

    #[test]
    fn reports_first_reciprocal_violation_in_row_major_order() {
        let m = matrix(vec![
            vec![1.0, 2.0, 3.0],
            vec![0.5, 1.0, 4.0],
            vec![1.0, 1.0, 1.0],
        ]);
        let err = PairwiseComparisonMatrix::new(3, m).unwrap_err();
        assert_eq!(err.to_string(), "Reciprocal property violated at (0,2)");
    }

    #[test]
    fn rejects_reciprocal_deviation_over_one_percent() {
        let m = matrix(vec![vec![1.0, 3.0], vec![0.3, 1.0]]);
        let err = PairwiseComparisonMatrix::new(2, m).unwrap_err();
        assert!(matches!(err, AhpError::NotReciprocal { row: 0, col: 1, .. }));
    }

    #[test]
    fn rejects_negative_reciprocal_pairs() {
        let m = matrix(vec![vec![1.0, -2.0], vec![-0.5, 1.0]]);
        let err = PairwiseComparisonMatrix::new(2, m).unwrap_err();
        assert_eq!(
            err,
            AhpError::NonPositiveEntry {
                row: 0,
                col: 1,
                value: -2.0
            }
        );
    }

    #[test]
    fn rejects_columns_whose_sum_overflows() {
        let m = matrix(vec![
            vec![1.0, 1.0, 1e308],
            vec![1.0, 1.0, 1e308],
            vec![1e-308, 1e-308, 1.0],
        ]);
        let err = PairwiseComparisonMatrix::new(3, m).unwrap_err();
        assert_eq!(err, AhpError::ColumnSumOverflow { col: 2 });
        assert_eq!(
            err.to_string(),
            "Pairwise comparisons in column 2 are too large to normalize"
        );
    }

    #[test]
    fn single_criterion_is_valid() {
        let pcm = PairwiseComparisonMatrix::new(1, matrix(vec![vec![1.0]])).unwrap();
        assert_eq!(pcm.size(), 1);
    }
}
