//! Error types shared by the calculation engines.

use std::fmt;
use thiserror::Error;

/// Errors raised while building a dense matrix from nested rows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    #[error("Matrix row {row} has length {actual}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

/// Broad classification of a rejected input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Wrong shape, wrong length, missing or invalid enum value.
    Structural,
    /// Shape is fine but a numeric invariant does not hold.
    NumericInvariant,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::Structural => "STRUCTURAL",
            ErrorKind::NumericInvariant => "NUMERIC_INVARIANT",
        };
        write!(f, "{}", s)
    }
}
