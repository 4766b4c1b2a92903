use std::fmt;

use num_traits::Float;
use tracing::trace;

use crate::core::traits::{MatShape, MatrixGet};
use crate::smoother::Smoother;

/// Diagonal entries with magnitude below this are treated as zero pivots.
pub const PIVOT_TOLERANCE: f64 = 1e-12;

/// Forward Gauss–Seidel sweep.
///
/// Row i is updated as x[i] = (b[i] − Σ_{j≠i} A[i,j]·x[j]) / A[i,i], reading
/// the entries already overwritten earlier in the same pass. A row whose
/// diagonal is smaller than `pivot_tol` in magnitude is left untouched; no
/// pivoting is attempted and the solve goes on, so the caller sees the effect
/// only through the residual.
#[derive(Debug, Clone, Copy)]
pub struct GaussSeidel<T> {
    pub pivot_tol: T,
}

impl<T: Float> GaussSeidel<T> {
    pub fn new() -> Self {
        Self { pivot_tol: T::from(PIVOT_TOLERANCE).unwrap_or_else(T::min_positive_value) }
    }
    pub fn set_pivot_tol(&mut self, pivot_tol: T) { self.pivot_tol = pivot_tol; }
    pub fn pivot_tol(&self) -> T { self.pivot_tol }
}

impl<T: Float> Default for GaussSeidel<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Display for GaussSeidel<T>
where
    T: Float + fmt::LowerExp,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GaussSeidel(pivot_tol={:e})", self.pivot_tol)
    }
}

impl<M, T> Smoother<M, T> for GaussSeidel<T>
where
    M: MatrixGet<T> + MatShape,
    T: Float,
{
    fn sweep(&self, a: &M, b: &[T], x: &mut [T]) {
        let n = x.len();
        for i in 0..n {
            let aii = a.get(i, i);
            if aii.abs() < self.pivot_tol {
                trace!(row = i + 1, "near-zero pivot, row left unchanged");
                continue;
            }
            let mut sigma = T::zero();
            for j in 0..i {
                sigma = sigma + a.get(i, j) * x[j];
            }
            for j in (i + 1)..n {
                sigma = sigma + a.get(i, j) * x[j];
            }
            x[i] = (b[i] - sigma) / aii;
        }
    }
}
