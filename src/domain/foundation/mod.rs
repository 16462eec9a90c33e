//! Foundation module - Shared numeric primitives.
//!
//! Contains the dense matrix container, tolerance helpers, the criterion
//! type enum, and the error types shared by the AHP and SAW engines.

mod criterion_type;
mod errors;
mod matrix;
mod tolerance;

pub use criterion_type::{CriterionType, UnknownCriterionType};
pub use errors::{ErrorKind, MatrixError};
pub use matrix::{dot, Matrix};
pub use tolerance::{
    is_close, ABSOLUTE_TOLERANCE, EXACT_RELATIVE_TOLERANCE, JUDGEMENT_RELATIVE_TOLERANCE,
};
