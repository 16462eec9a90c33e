//! Saaty's Random Index table.

/// Random Index for matrix sizes 1 through 10, indexed by `n - 1`.
///
/// | n  | RI   |
/// |----|------|
/// | 1  | 0.00 |
/// | 2  | 0.00 |
/// | 3  | 0.58 |
/// | 4  | 0.90 |
/// | 5  | 1.12 |
/// | 6  | 1.24 |
/// | 7  | 1.32 |
/// | 8  | 1.41 |
/// | 9  | 1.45 |
/// | 10 | 1.49 |
pub const RANDOM_INDEX_TABLE: [f64; 10] = [0.0, 0.0, 0.58, 0.90, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49];

/// Used for any size the table does not cover (n > 10, and n = 0).
pub const DEFAULT_RANDOM_INDEX: f64 = 1.49;

/// Looks up the Random Index for an `n x n` matrix.
pub fn random_index(n: usize) -> f64 {
    match n {
        1..=10 => RANDOM_INDEX_TABLE[n - 1],
        _ => DEFAULT_RANDOM_INDEX,
    }
}
