//! CalculateAhpHandler - Command handler for deriving criterion weights.

use tracing::{debug, info, warn};

use crate::domain::ahp::{AhpCalculator, AhpError, AhpResult};

/// Command to weight criteria from a pairwise comparison matrix.
#[derive(Debug, Clone)]
pub struct CalculateAhpCommand {
    /// Criterion names, in matrix order.
    pub criteria: Vec<String>,
    /// `pairwise_matrix[i][j]` is how much more important criterion i is than j.
    pub pairwise_matrix: Vec<Vec<f64>>,
}

/// Handler for AHP calculations.
///
/// Inconsistent judgments are not an error: the weights are still returned,
/// with `is_consistent` set to false.
#[derive(Debug, Clone, Default)]
pub struct CalculateAhpHandler;

impl CalculateAhpHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, cmd: CalculateAhpCommand) -> Result<AhpResult, AhpError> {
        debug!(criteria = cmd.criteria.len(), "Calculating AHP weights");

        let calculator = AhpCalculator::from_rows(cmd.criteria, cmd.pairwise_matrix)
            .map_err(|err| {
                debug!(kind = %err.kind(), error = %err, "Pairwise matrix rejected");
                err
            })?;
        let result = calculator.calculate();

        let report = &result.consistency;
        if report.is_consistent {
            info!(
                lambda_max = report.lambda_max,
                consistency_ratio = report.consistency_ratio,
                "AHP weights calculated"
            );
        } else {
            warn!(
                lambda_max = report.lambda_max,
                consistency_ratio = report.consistency_ratio,
                "Pairwise judgments are inconsistent"
            );
        }

        Ok(result)
    }
}
