//! Floating point comparison with relative tolerance.

/// Absolute slack added to every comparison, so values near zero compare sanely.
pub const ABSOLUTE_TOLERANCE: f64 = 1e-8;

/// Relative tolerance used when checking that a value is "exactly" some target
/// (diagonal entries of a pairwise matrix).
pub const EXACT_RELATIVE_TOLERANCE: f64 = 1e-5;

/// Relative tolerance for the reciprocal check and the weight-sum check (1%).
pub const JUDGEMENT_RELATIVE_TOLERANCE: f64 = 0.01;

/// Returns true when `|actual - expected| <= ABSOLUTE_TOLERANCE + rtol * |expected|`.
///
/// Non-finite inputs never compare close.
pub fn is_close(actual: f64, expected: f64, rtol: f64) -> bool {
    if !actual.is_finite() || !expected.is_finite() {
        return false;
    }
    (actual - expected).abs() <= ABSOLUTE_TOLERANCE + rtol * expected.abs()
}
