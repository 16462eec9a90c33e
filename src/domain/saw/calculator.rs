//! SAW Calculator - Weighted scoring and ranking of alternatives.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::foundation::{
    dot, is_close, CriterionType, Matrix, JUDGEMENT_RELATIVE_TOLERANCE,
};

use super::{normalize_matrix, SawError};

/// An alternative's place in the final ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAlternative {
    pub alternative: String,
    pub score: f64,
    pub rank: usize,
}

/// How much one criterion adds to an alternative's score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionContribution {
    pub criterion: String,
    pub normalized_value: f64,
    pub weight: f64,
    /// `normalized_value * weight`.
    pub contribution: f64,
    /// Share of the alternative's total score, 0 when the total is 0.
    pub percentage: f64,
}

/// Per-criterion breakdown of one alternative's score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeBreakdown {
    pub alternative: String,
    pub total_score: f64,
    pub contributions: Vec<CriterionContribution>,
}

/// An alternative with its score and input position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeScore {
    pub alternative: String,
    pub score: f64,
    pub index: usize,
}

/// Head-to-head comparison of two alternatives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeComparison {
    pub alternative_1: AlternativeScore,
    pub alternative_2: AlternativeScore,
    /// Absolute score difference.
    pub score_difference: f64,
    pub better_alternative: String,
    pub is_tie: bool,
}

/// Complete output of one SAW run, echoing the inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SawResult {
    /// Sorted by rank, best first.
    pub ranking: Vec<RankedAlternative>,
    pub normalized_matrix: Matrix,
    /// Aligned with `alternatives`.
    pub scores: Vec<f64>,
    pub detailed_scores: Vec<AlternativeBreakdown>,
    pub decision_matrix: Matrix,
    pub weights: Vec<f64>,
    pub criteria: Vec<String>,
    pub alternatives: Vec<String>,
    /// Exactly as supplied by the caller.
    pub criteria_types: Vec<String>,
}

/// Caller-supplied SAW inputs, before validation.
#[derive(Debug, Clone)]
pub struct SawInput {
    pub alternatives: Vec<String>,
    pub criteria: Vec<String>,
    pub weights: Vec<f64>,
    pub decision_matrix: Matrix,
    pub criteria_types: Vec<String>,
}

/// Scores alternatives as the weighted sum of their normalized criterion values.
///
/// Construction validates everything; once built, no method can produce NaN
/// or fail except [`SawCalculator::compare`] on an out-of-range index.
#[derive(Debug, Clone)]
pub struct SawCalculator {
    alternatives: Vec<String>,
    criteria: Vec<String>,
    weights: Vec<f64>,
    decision_matrix: Matrix,
    types: Vec<CriterionType>,
    type_labels: Vec<String>,
}

impl SawCalculator {
    /// Validates the inputs.
    ///
    /// # Checks (first failure wins)
    /// 1. decision matrix is exactly `m x n`
    /// 2. one weight per criterion
    /// 3. weights sum to 1 within 1%
    /// 4. no negative weight
    /// 5. one type per criterion, each "benefit" or "cost" (any case)
    /// 6. no negative or non-finite decision value
    pub fn new(input: SawInput) -> Result<Self, SawError> {
        let SawInput {
            alternatives,
            criteria,
            weights,
            decision_matrix,
            criteria_types,
        } = input;

        let m = alternatives.len();
        let n = criteria.len();

        if decision_matrix.shape() != (m, n) {
            return Err(SawError::DecisionMatrixShape {
                expected_rows: m,
                expected_cols: n,
                rows: decision_matrix.rows(),
                cols: decision_matrix.cols(),
            });
        }

        if weights.len() != n {
            return Err(SawError::WeightCount {
                expected: n,
                actual: weights.len(),
            });
        }

        let sum: f64 = weights.iter().sum();
        if !is_close(sum, 1.0, JUDGEMENT_RELATIVE_TOLERANCE) {
            return Err(SawError::WeightSum { sum });
        }

        if let Some((index, &value)) = weights.iter().enumerate().find(|(_, w)| **w < 0.0) {
            return Err(SawError::NegativeWeight { index, value });
        }

        if criteria_types.len() != n {
            return Err(SawError::CriteriaTypeCount {
                expected: n,
                actual: criteria_types.len(),
            });
        }

        let types = criteria_types
            .iter()
            .enumerate()
            .map(|(index, label)| {
                label.parse::<CriterionType>().map_err(|_| SawError::InvalidCriteriaType {
                    index,
                    value: label.clone(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        for (row, col, value) in decision_matrix.entries() {
            if value < 0.0 {
                return Err(SawError::NegativeValue { row, col, value });
            }
            if !value.is_finite() {
                return Err(SawError::NonFiniteValue { row, col });
            }
        }

        Ok(Self {
            alternatives,
            criteria,
            weights,
            decision_matrix,
            types,
            type_labels: criteria_types,
        })
    }

    pub fn alternatives(&self) -> &[String] {
        &self.alternatives
    }

    pub fn criteria(&self) -> &[String] {
        &self.criteria
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn criterion_types(&self) -> &[CriterionType] {
        &self.types
    }

    /// Decision matrix with every column normalized per its criterion type.
    pub fn normalized_matrix(&self) -> Matrix {
        normalize_matrix(&self.decision_matrix, &self.types)
    }

    /// `score[i] = Σ_j normalized[i][j] * weight[j]`.
    pub fn scores(&self, normalized: &Matrix) -> Vec<f64> {
        (0..normalized.rows())
            .map(|row| dot(normalized.row(row), &self.weights))
            .collect()
    }

    /// Alternatives sorted by score, highest first, ranked 1..m.
    ///
    /// The sort is stable: equal scores keep their input order.
    pub fn ranking(&self, scores: &[f64]) -> Vec<RankedAlternative> {
        let mut ranked: Vec<RankedAlternative> = self
            .alternatives
            .iter()
            .zip(scores)
            .map(|(alternative, &score)| RankedAlternative {
                alternative: alternative.clone(),
                score,
                rank: 0,
            })
            .collect();

        ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        for (position, item) in ranked.iter_mut().enumerate() {
            item.rank = position + 1;
        }

        ranked
    }

    /// Contribution of every criterion to every alternative's score.
    pub fn detailed_scores(&self, normalized: &Matrix, scores: &[f64]) -> Vec<AlternativeBreakdown> {
        self.alternatives
            .iter()
            .enumerate()
            .map(|(row, alternative)| {
                let total_score = scores[row];
                let contributions = self
                    .criteria
                    .iter()
                    .enumerate()
                    .map(|(col, criterion)| {
                        let normalized_value = normalized.get(row, col);
                        let weight = self.weights[col];
                        let contribution = normalized_value * weight;
                        let percentage = if total_score > 0.0 {
                            contribution / total_score * 100.0
                        } else {
                            0.0
                        };

                        CriterionContribution {
                            criterion: criterion.clone(),
                            normalized_value,
                            weight,
                            contribution,
                            percentage,
                        }
                    })
                    .collect();

                AlternativeBreakdown {
                    alternative: alternative.clone(),
                    total_score,
                    contributions,
                }
            })
            .collect()
    }

    /// Runs the full analysis.
    pub fn calculate(&self) -> SawResult {
        let normalized_matrix = self.normalized_matrix();
        let scores = self.scores(&normalized_matrix);
        let ranking = self.ranking(&scores);
        let detailed_scores = self.detailed_scores(&normalized_matrix, &scores);

        SawResult {
            ranking,
            normalized_matrix,
            scores,
            detailed_scores,
            decision_matrix: self.decision_matrix.clone(),
            weights: self.weights.clone(),
            criteria: self.criteria.clone(),
            alternatives: self.alternatives.clone(),
            criteria_types: self.type_labels.clone(),
        }
    }

    /// Highest-scoring alternative; the first one in input order on ties.
    pub fn best(&self) -> Option<AlternativeScore> {
        self.pick(|candidate, current| candidate > current)
    }

    /// Lowest-scoring alternative; the first one in input order on ties.
    pub fn worst(&self) -> Option<AlternativeScore> {
        self.pick(|candidate, current| candidate < current)
    }

    /// Compares the alternatives at indices `first` and `second`.
    ///
    /// On equal scores the alternative with the lower index is reported as
    /// better, matching its position in the ranking. This differs from a
    /// strict `score_1 > score_2` test, which would name `second` on a tie;
    /// callers that need either rule can check `is_tie`.
    pub fn compare(&self, first: usize, second: usize) -> Result<AlternativeComparison, SawError> {
        let scores = self.scores(&self.normalized_matrix());
        let alternative_1 = self.score_at(&scores, first)?;
        let alternative_2 = self.score_at(&scores, second)?;

        let ordering = alternative_1
            .score
            .partial_cmp(&alternative_2.score)
            .unwrap_or(Ordering::Equal)
            .then(second.cmp(&first));
        let better_alternative = match ordering {
            Ordering::Less => alternative_2.alternative.clone(),
            _ => alternative_1.alternative.clone(),
        };

        Ok(AlternativeComparison {
            score_difference: (alternative_1.score - alternative_2.score).abs(),
            is_tie: alternative_1.score == alternative_2.score,
            better_alternative,
            alternative_1,
            alternative_2,
        })
    }

    fn score_at(&self, scores: &[f64], index: usize) -> Result<AlternativeScore, SawError> {
        let score = *scores.get(index).ok_or(SawError::AlternativeIndexOutOfRange {
            index,
            count: self.alternatives.len(),
        })?;

        Ok(AlternativeScore {
            alternative: self.alternatives[index].clone(),
            score,
            index,
        })
    }

    /// Keeps the earliest alternative unless `replaces(candidate, current)`.
    fn pick(&self, replaces: impl Fn(f64, f64) -> bool) -> Option<AlternativeScore> {
        let scores = self.scores(&self.normalized_matrix());
        let index = (1..scores.len()).fold(0, |current, candidate| {
            if replaces(scores[candidate], scores[current]) {
                candidate
            } else {
                current
            }
        });

        let score = *scores.get(index)?;
        Some(AlternativeScore {
            alternative: self.alternatives[index].clone(),
            score,
            index,
        })
    }
}
