//! AHP Calculator - Criterion weights and consistency from pairwise judgments.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::foundation::Matrix;

use super::{AhpError, ConsistencyReport, PairwiseComparisonMatrix};

/// One criterion's share of the total weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightDetail {
    pub criterion: String,
    pub weight: f64,
    /// `weight * 100`.
    pub percentage: f64,
}

/// A criterion's position when criteria are ordered by weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionRank {
    pub criterion: String,
    pub weight: f64,
    pub rank: usize,
}

/// Complete output of one AHP run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AhpResult {
    pub criteria: Vec<String>,
    /// Aligned with `criteria`; sums to 1.
    pub weights: Vec<f64>,
    /// Sorted by weight, heaviest first.
    pub weight_details: Vec<WeightDetail>,
    pub normalized_matrix: Matrix,
    #[serde(flatten)]
    pub consistency: ConsistencyReport,
}

/// Derives criterion weights with the column-normalization / row-average
/// approximation of the principal eigenvector.
///
/// Construction validates the input, so every method afterwards works on a
/// reciprocal, positive, unit-diagonal matrix and cannot fail.
#[derive(Debug, Clone)]
pub struct AhpCalculator {
    criteria: Vec<String>,
    matrix: PairwiseComparisonMatrix,
}

impl AhpCalculator {
    /// Validates the pairwise matrix against the ordered criterion names.
    pub fn new(criteria: Vec<String>, pairwise_matrix: Matrix) -> Result<Self, AhpError> {
        let matrix = PairwiseComparisonMatrix::new(criteria.len(), pairwise_matrix)?;
        Ok(Self { criteria, matrix })
    }

    /// Like [`AhpCalculator::new`], starting from nested rows.
    pub fn from_rows(criteria: Vec<String>, rows: Vec<Vec<f64>>) -> Result<Self, AhpError> {
        let matrix = Matrix::from_rows(rows)?;
        Self::new(criteria, matrix)
    }

    pub fn criteria(&self) -> &[String] {
        &self.criteria
    }

    pub fn pairwise_matrix(&self) -> &PairwiseComparisonMatrix {
        &self.matrix
    }

    /// Divides every entry by its column sum.
    ///
    /// Column sums are strictly positive for a validated matrix, so each
    /// column of the result sums to 1.
    pub fn normalized_matrix(&self) -> Matrix {
        let source = self.matrix.matrix();
        let sums = source.column_sums();
        let mut normalized = Matrix::zeros(source.rows(), source.cols());

        for (row, col, value) in source.entries() {
            normalized.set(row, col, value / sums[col]);
        }

        normalized
    }

    /// Weight of each criterion: the mean of its row in the normalized matrix.
    ///
    /// Every normalized column sums to 1, so the row means sum to `n / n = 1`.
    pub fn weights(&self) -> Vec<f64> {
        self.normalized_matrix().row_means()
    }

    /// Computes λmax as the mean of `(M·w)[i] / w[i]`, then CI, RI and CR.
    pub fn consistency(&self, weights: &[f64]) -> ConsistencyReport {
        let n = self.matrix.size();
        let weighted_sum = self.matrix.matrix().mul_vec(weights);
        let lambda_max = weighted_sum
            .iter()
            .zip(weights)
            .map(|(sum, weight)| sum / weight)
            .sum::<f64>()
            / n as f64;

        ConsistencyReport::from_lambda_max(lambda_max, n)
    }

    /// Weight details sorted heaviest first. Equal weights keep input order.
    pub fn weight_details(&self, weights: &[f64]) -> Vec<WeightDetail> {
        let mut details: Vec<WeightDetail> = self
            .criteria
            .iter()
            .zip(weights)
            .map(|(criterion, &weight)| WeightDetail {
                criterion: criterion.clone(),
                weight,
                percentage: weight * 100.0,
            })
            .collect();

        details.sort_by(|a, b| b.weight.partial_cmp(&a.weight).unwrap_or(Ordering::Equal));
        details
    }

    /// Criteria ranked by weight, rank 1 being the heaviest.
    pub fn criterion_ranking(&self) -> Vec<CriterionRank> {
        self.weight_details(&self.weights())
            .into_iter()
            .enumerate()
            .map(|(position, detail)| CriterionRank {
                criterion: detail.criterion,
                weight: detail.weight,
                rank: position + 1,
            })
            .collect()
    }

    /// Runs the full analysis.
    pub fn calculate(&self) -> AhpResult {
        let normalized_matrix = self.normalized_matrix();
        let weights = normalized_matrix.row_means();
        let consistency = self.consistency(&weights);
        let weight_details = self.weight_details(&weights);

        AhpResult {
            criteria: self.criteria.clone(),
            weights,
            weight_details,
            normalized_matrix,
            consistency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn price_performance_rating() -> AhpCalculator {
        AhpCalculator::from_rows(
            names(&["Price", "Performance", "Rating"]),
            vec![
                vec![1.0, 3.0, 5.0],
                vec![1.0 / 3.0, 1.0, 2.0],
                vec![1.0 / 5.0, 1.0 / 2.0, 1.0],
            ],
        )
        .unwrap()
    }

    /// `M[i][j] = w[i] / w[j]` for the given weights.
    fn consistent_from(weights: &[f64]) -> AhpCalculator {
        let rows = weights
            .iter()
            .map(|wi| weights.iter().map(|wj| wi / wj).collect())
            .collect();
        let criteria = (0..weights.len()).map(|i| format!("C{}", i)).collect();
        AhpCalculator::from_rows(criteria, rows).unwrap()
    }

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() < tolerance,
            "expected {} to be within {} of {}",
            actual,
            tolerance,
            expected
        );
    }

    #[test]
    fn normalized_columns_sum_to_one() {
        let normalized = price_performance_rating().normalized_matrix();
        for sum in normalized.column_sums() {
            assert_close(sum, 1.0, 1e-12);
        }
    }

    #[test]
    fn weights_are_row_means_of_normalized_matrix() {
        let weights = price_performance_rating().weights();
        assert_close(weights[0], 0.647947, 1e-5);
        assert_close(weights[1], 0.229871, 1e-5);
        assert_close(weights[2], 0.122182, 1e-5);
        assert_close(weights.iter().sum(), 1.0, 1e-12);
    }

    #[test]
    fn consistent_matrix_has_lambda_equal_to_n() {
        let calc = consistent_from(&[0.5, 0.3, 0.15, 0.05]);
        let weights = calc.weights();
        let report = calc.consistency(&weights);

        assert_close(weights[0], 0.5, 1e-12);
        assert_close(weights[3], 0.05, 1e-12);
        assert_close(report.lambda_max, 4.0, 1e-9);
        assert_close(report.consistency_ratio, 0.0, 1e-9);
        assert!(report.is_consistent);
    }

    #[test]
    fn consistency_of_example_matrix_is_acceptable() {
        let calc = price_performance_rating();
        let report = calc.consistency(&calc.weights());
        assert_eq!(report.random_index, 0.58);
        assert!(report.lambda_max > 3.0);
        assert!(report.consistency_ratio < 0.1);
        assert!(report.is_consistent);
    }

    #[test]
    fn contradictory_judgments_are_flagged_inconsistent() {
        // A > B, B > C, but C much more important than A
        let calc = AhpCalculator::from_rows(
            names(&["A", "B", "C"]),
            vec![
                vec![1.0, 5.0, 1.0 / 7.0],
                vec![1.0 / 5.0, 1.0, 5.0],
                vec![7.0, 1.0 / 5.0, 1.0],
            ],
        )
        .unwrap();
        let result = calc.calculate();

        assert!(!result.consistency.is_consistent);
        assert!(result.consistency.consistency_ratio >= 0.1);
        assert_close(result.weights.iter().sum(), 1.0, 1e-12);
    }

    #[test]
    fn weight_details_sorted_descending_with_percentages() {
        let calc = AhpCalculator::from_rows(
            names(&["Low", "High"]),
            vec![vec![1.0, 1.0 / 3.0], vec![3.0, 1.0]],
        )
        .unwrap();
        let details = calc.weight_details(&calc.weights());

        assert_eq!(details[0].criterion, "High");
        assert_close(details[0].weight, 0.75, 1e-12);
        assert_close(details[0].percentage, 75.0, 1e-9);
        assert_eq!(details[1].criterion, "Low");
    }

    #[test]
    fn equal_weights_keep_input_order() {
        let calc = consistent_from(&[1.0, 1.0, 1.0]);
        let ranking = calc.criterion_ranking();

        let order: Vec<_> = ranking.iter().map(|r| r.criterion.as_str()).collect();
        assert_eq!(order, vec!["C0", "C1", "C2"]);
        let ranks: Vec<_> = ranking.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn single_criterion_gets_full_weight() {
        let calc = AhpCalculator::from_rows(names(&["Only"]), vec![vec![1.0]]).unwrap();
        let result = calc.calculate();

        assert_eq!(result.weights, vec![1.0]);
        assert_eq!(result.consistency.consistency_index, 0.0);
        assert_eq!(result.consistency.consistency_ratio, 0.0);
        assert_eq!(result.consistency.random_index, 0.0);
        assert!(result.consistency.is_consistent);
    }

    #[test]
    fn from_rows_reports_ragged_input() {
        let err = AhpCalculator::from_rows(names(&["A", "B"]), vec![vec![1.0, 2.0], vec![0.5]])
            .unwrap_err();
        assert!(matches!(err, AhpError::Shape(_)));
    }

    #[test]
    fn result_serializes_flat_consistency_fields() {
        let json = serde_json::to_value(price_performance_rating().calculate()).unwrap();

        assert!(json.get("lambda_max").is_some());
        assert!(json.get("consistency_index").is_some());
        assert!(json.get("consistency_ratio").is_some());
        assert_eq!(json["random_index"], 0.58);
        assert_eq!(json["is_consistent"], true);
        assert!(json.get("consistency").is_none());
        assert_eq!(json["normalized_matrix"].as_array().unwrap().len(), 3);
        assert_eq!(json["weight_details"][0]["criterion"], "Price");
    }
}
