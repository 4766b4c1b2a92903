//! Wrappers for faer dense matrices, row lists and vectors.
//!
//! This module implements the core linear-algebra traits for `faer::Mat`,
//! `faer::MatRef`, row-major `Vec<Vec<T>>` and `Vec<T>`, so the relaxation
//! solver can take either a faer matrix or a plain list of rows.
//!
//! # Features
//! - Matrix-vector multiplication for faer dense matrices and row lists.
//! - Entry access and shape queries used by the Gauss-Seidel sweep.
//! - Euclidean norm for vectors.
//!
//! The norm folds sequentially. Systems handled here are small and a
//! fixed summation order keeps repeated solves bit-for-bit identical; batch
//! parallelism lives one level up in [`crate::parallel`].
//!
//! # References
//! - [faer crate documentation](https://docs.rs/faer)
//! - [num-traits crate documentation](https://docs.rs/num-traits)

use crate::core::traits::{InnerProduct, MatShape, MatVec, MatrixGet};
use faer::{Mat, MatRef};
use num_traits::Float;

/// Implements matrix-vector multiplication for `faer::Mat`.
///
/// Computes `y = A * x` where `A` is a dense matrix, `x` and `y` are vectors.
impl<T: Float> MatVec<Vec<T>> for Mat<T> {
    fn matvec(&self, x: &Vec<T>, y: &mut Vec<T>) {
        self.as_ref().matvec(x, y);
    }
}

/// Implements matrix-vector multiplication for a matrix reference (`faer::MatRef`).
impl<'a, T: Float> MatVec<Vec<T>> for MatRef<'a, T> {
    fn matvec(&self, x: &Vec<T>, y: &mut Vec<T>) {
        assert_eq!(self.nrows(), y.len(), "Output vector y has incorrect length");
        assert_eq!(self.ncols(), x.len(), "Input vector x has incorrect length");
        for i in 0..self.nrows() {
            let mut acc = T::zero();
            for j in 0..self.ncols() {
                acc = acc + self[(i, j)] * x[j];
            }
            y[i] = acc;
        }
    }
}

/// Implements matrix-vector multiplication for a row-major list of rows.
impl<T: Float> MatVec<Vec<T>> for Vec<Vec<T>> {
    fn matvec(&self, x: &Vec<T>, y: &mut Vec<T>) {
        assert_eq!(self.len(), y.len(), "Output vector y has incorrect length");
        for (yi, row) in y.iter_mut().zip(self) {
            assert_eq!(row.len(), x.len(), "Input vector x has incorrect length");
            *yi = row
                .iter()
                .zip(x)
                .fold(T::zero(), |acc, (&aij, &xj)| acc + aij * xj);
        }
    }
}

impl<T: Float> MatrixGet<T> for Mat<T> {
    fn get(&self, i: usize, j: usize) -> T {
        self[(i, j)]
    }
}

impl<T: Float> MatrixGet<T> for Vec<Vec<T>> {
    fn get(&self, i: usize, j: usize) -> T {
        self[i][j]
    }
}

impl<T> MatShape for Mat<T> {
    fn nrows(&self) -> usize {
        self.nrows()
    }
    fn ncols(&self) -> usize {
        self.ncols()
    }
}

impl<T> MatShape for Vec<Vec<T>> {
    fn nrows(&self) -> usize {
        self.len()
    }
    fn ncols(&self) -> usize {
        self.first().map_or(0, Vec::len)
    }
    fn row_len(&self, i: usize) -> usize {
        self[i].len()
    }
}

/// Implements the Euclidean norm for vectors.
impl<T: Float> InnerProduct<Vec<T>> for () {
    type Scalar = T;
    /// Computes the Euclidean norm of a vector: `||x||_2`.
    fn norm(&self, x: &Vec<T>) -> T {
        x.iter()
            .map(|xi| *xi * *xi)
            .fold(T::zero(), |acc, v| acc + v)
            .sqrt()
    }
}
