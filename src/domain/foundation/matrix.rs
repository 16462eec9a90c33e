//! Dense row-major matrix with its shape fixed at construction.

use serde::{Deserialize, Serialize};

use super::MatrixError;

/// A dense `rows x cols` matrix of `f64` values.
///
/// The shape is validated once in [`Matrix::from_rows`]; every arithmetic
/// helper afterwards can rely on it. On the wire a matrix is a list of rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Builds a matrix from nested rows.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::RaggedRow`] if any row differs in length from
    /// the first one.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        let mut data = Vec::with_capacity(rows.len() * cols);

        for (index, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(MatrixError::RaggedRow {
                    row: index,
                    expected: cols,
                    actual: row.len(),
                });
            }
            data.extend_from_slice(row);
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// Creates a zero-filled matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Returns the entry at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the position lies outside the matrix.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.rows && col < self.cols, "matrix index out of bounds");
        self.data[row * self.cols + col]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: f64) {
        assert!(row < self.rows && col < self.cols, "matrix index out of bounds");
        self.data[row * self.cols + col] = value;
    }

    /// Borrows one row as a slice.
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Copies one column out.
    pub fn column(&self, col: usize) -> Vec<f64> {
        (0..self.rows).map(|row| self.get(row, col)).collect()
    }

    /// Iterates over every entry with its position, row-major.
    pub fn entries(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        let cols = self.cols;
        self.data
            .iter()
            .enumerate()
            .map(move |(offset, &value)| (offset / cols, offset % cols, value))
    }

    /// Sum of each column.
    pub fn column_sums(&self) -> Vec<f64> {
        (0..self.cols)
            .map(|col| (0..self.rows).map(|row| self.get(row, col)).sum())
            .collect()
    }

    /// Arithmetic mean of each row. Empty rows average to zero.
    pub fn row_means(&self) -> Vec<f64> {
        (0..self.rows)
            .map(|row| {
                if self.cols == 0 {
                    0.0
                } else {
                    self.row(row).iter().sum::<f64>() / self.cols as f64
                }
            })
            .collect()
    }

    /// Matrix-vector product `self * vector`.
    ///
    /// # Panics
    ///
    /// Panics if `vector.len() != self.cols()`.
    pub fn mul_vec(&self, vector: &[f64]) -> Vec<f64> {
        assert_eq!(vector.len(), self.cols, "vector length must match column count");
        (0..self.rows)
            .map(|row| dot(self.row(row), vector))
            .collect()
    }

    /// Copies the matrix back into nested rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.rows).map(|row| self.row(row).to_vec()).collect()
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(matrix: Matrix) -> Self {
        matrix.to_rows()
    }
}

/// Dot product of two equal-length slices.
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}
