//! CalculateSawHandler - Command handler for scoring and ranking alternatives.

use tracing::{debug, info};

use crate::domain::foundation::Matrix;
use crate::domain::saw::{SawCalculator, SawError, SawInput, SawResult};

/// Command to rank alternatives by weighted score.
#[derive(Debug, Clone)]
pub struct CalculateSawCommand {
    pub alternatives: Vec<String>,
    pub criteria: Vec<String>,
    /// One per criterion, summing to 1.
    pub weights: Vec<f64>,
    /// `decision_matrix[i][j]` is alternative i's raw value on criterion j.
    pub decision_matrix: Vec<Vec<f64>>,
    /// "benefit" or "cost" per criterion, any case.
    pub criteria_types: Vec<String>,
}

/// Handler for SAW calculations.
#[derive(Debug, Clone, Default)]
pub struct CalculateSawHandler;

impl CalculateSawHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, cmd: CalculateSawCommand) -> Result<SawResult, SawError> {
        debug!(
            alternatives = cmd.alternatives.len(),
            criteria = cmd.criteria.len(),
            "Calculating SAW ranking"
        );

        let calculator = Matrix::from_rows(cmd.decision_matrix)
            .map_err(SawError::from)
            .and_then(|decision_matrix| {
                SawCalculator::new(SawInput {
                    alternatives: cmd.alternatives,
                    criteria: cmd.criteria,
                    weights: cmd.weights,
                    decision_matrix,
                    criteria_types: cmd.criteria_types,
                })
            })
            .map_err(|err| {
                debug!(kind = %err.kind(), error = %err, "SAW input rejected");
                err
            })?;

        let result = calculator.calculate();

        if let Some(top) = result.ranking.first() {
            info!(
                best = %top.alternative,
                score = top.score,
                "SAW ranking calculated"
            );
        }

        Ok(result)
    }
}
