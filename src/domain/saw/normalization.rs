//! Column normalization rules for benefit and cost criteria.

use crate::domain::foundation::{CriterionType, Matrix};

/// Benefit column: `r[i] = x[i] / max(x)`.
///
/// An all-zero column (max = 0) is returned unchanged.
pub fn normalize_benefit(column: &[f64]) -> Vec<f64> {
    let max = column.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max == 0.0 {
        return column.to_vec();
    }
    column.iter().map(|value| value / max).collect()
}

/// Cost column: `r[i] = min(x) / x[i]`.
///
/// # Edge Cases
/// - min = 0: every row normalizes to 1.0
/// - min != 0 but `x[i] = 0`: that row normalizes to 0.0
pub fn normalize_cost(column: &[f64]) -> Vec<f64> {
    let min = column.iter().copied().fold(f64::INFINITY, f64::min);
    if min == 0.0 {
        return vec![1.0; column.len()];
    }
    column
        .iter()
        .map(|&value| if value == 0.0 { 0.0 } else { min / value })
        .collect()
}

/// Normalizes a single column according to its type.
pub fn normalize_column(column: &[f64], criterion_type: CriterionType) -> Vec<f64> {
    match criterion_type {
        CriterionType::Benefit => normalize_benefit(column),
        CriterionType::Cost => normalize_cost(column),
    }
}

/// Normalizes every column of `matrix` independently.
///
/// `types` must have one entry per column.
pub fn normalize_matrix(matrix: &Matrix, types: &[CriterionType]) -> Matrix {
    let mut normalized = Matrix::zeros(matrix.rows(), matrix.cols());

    for (col, &criterion_type) in types.iter().enumerate().take(matrix.cols()) {
        let values = normalize_column(&matrix.column(col), criterion_type);
        for (row, value) in values.into_iter().enumerate() {
            normalized.set(row, col, value);
        }
    }

    normalized
}
