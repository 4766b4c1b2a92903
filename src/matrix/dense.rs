//! Dense‐matrix API on top of Faer.
//!
//! This module provides the `DenseMatrix` trait and its implementation for the `faer::Mat<T>` type,
//! enabling construction from raw column-major storage or from a list of rows as an
//! input layer would collect them.

use crate::core::traits::{MatShape, MatVec, MatrixGet};
use crate::error::RelaxError;
use faer::Mat;
use num_traits::Float;

/// Any Faer Mat<T> is a DenseMatrix.
pub trait DenseMatrix<T>: MatVec<Vec<T>> + MatrixGet<T> + MatShape + Sized {
    /// Construct from raw column-major storage.
    fn from_raw(nrows: usize, ncols: usize, data: Vec<T>) -> Self;

    /// Construct a square matrix from row-major rows, rejecting empty or ragged input.
    fn from_rows(rows: &[Vec<T>]) -> Result<Self, RelaxError>;
}

impl<T: Float> DenseMatrix<T> for Mat<T> {
    fn from_raw(nrows: usize, ncols: usize, data: Vec<T>) -> Self {
        Mat::from_fn(nrows, ncols, |i, j| data[j * nrows + i])
    }

    fn from_rows(rows: &[Vec<T>]) -> Result<Self, RelaxError> {
        let n = rows.len();
        if n == 0 {
            return Err(RelaxError::EmptySystem);
        }
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != n) {
            return Err(RelaxError::NotSquare { row: i + 1, len: row.len(), n });
        }
        Ok(Mat::from_fn(n, n, |i, j| rows[i][j]))
    }
}
