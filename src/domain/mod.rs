//! Domain layer containing the decision-analysis engines.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (matrix container, tolerances, criterion types, errors)
//! - `ahp` - Criterion weights and consistency from pairwise comparisons
//! - `saw` - Normalization, scoring and ranking of alternatives
//! - `attributes` - Conversion tables from raw product attributes to criterion scores
//!
//! Everything here is synchronous and side-effect free.

pub mod ahp;
pub mod attributes;
pub mod foundation;
pub mod saw;
