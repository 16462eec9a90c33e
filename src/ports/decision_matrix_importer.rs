//! Decision Matrix Importer Port - Tabular sources into SAW inputs.
//!
//! A table's first column names the alternatives; the header cells after it
//! name the criteria; every other cell is a numeric criterion value.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::Matrix;

/// Alternatives, criteria and decision matrix read from a table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportedTable {
    pub alternatives: Vec<String>,
    pub criteria_from_file: Vec<String>,
    pub decision_matrix: Matrix,
}

/// Errors raised while reading a table.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ImportError {
    #[error("Uploaded table is empty")]
    Empty,

    #[error("Uploaded table needs at least one criterion column")]
    NoCriteria,

    #[error("Row {row} has {actual} cells, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Value '{value}' in row {row}, column '{column}' is not a number")]
    NotANumber {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Error processing file: {0}")]
    Malformed(String),
}

/// Port for reading a decision table from raw bytes.
///
/// # Contract
///
/// Implementations must:
/// - Reject a table with no data rows as [`ImportError::Empty`]
/// - Keep row and column order exactly as in the source
/// - Return a matrix of shape `alternatives x criteria_from_file`
pub trait DecisionMatrixImporter: Send + Sync {
    fn import(&self, source: &[u8]) -> Result<ImportedTable, ImportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_message_matches_upload_contract() {
        assert_eq!(ImportError::Empty.to_string(), "Uploaded table is empty");
    }

    #[test]
    fn not_a_number_names_cell() {
        let err = ImportError::NotANumber {
            row: 2,
            column: "Price".to_string(),
            value: "cheap".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Value 'cheap' in row 2, column 'Price' is not a number"
        );
    }
}
