//! Smoothers for the relaxation solver.
//!
//! A smoother updates an approximate solution in place, one sweep at a time.
//! The relaxation solver only ever calls [`Smoother::smooth`]; the sweep count
//! comes from the cycle policy.

pub mod gauss_seidel;

pub use gauss_seidel::{GaussSeidel, PIVOT_TOLERANCE};

/// In-place relaxation x ← S(A, b, x).
pub trait Smoother<M, T> {
    /// One relaxation pass over every row of `x`.
    fn sweep(&self, a: &M, b: &[T], x: &mut [T]);

    /// Run `sweeps` consecutive passes.
    fn smooth(&self, a: &M, b: &[T], x: &mut [T], sweeps: usize) {
        for _ in 0..sweeps {
            self.sweep(a, b, x);
        }
    }
}
