//! Solver interfaces.

use crate::utils::convergence::SolveStats;

/// Common interface for any direct or iterative solver.
pub trait LinearSolver<M, V> {
    type Error;
    type Scalar: Copy + PartialOrd;
    /// Solve A·x = b, writing result into `x`.
    /// Returns iteration stats (including convergence info).
    fn solve(
        &mut self,
        a: &M,
        b: &V,
        x: &mut V,
    ) -> Result<SolveStats<<Self as LinearSolver<M, V>>::Scalar>, Self::Error>;
}

pub mod relaxation;
pub use relaxation::{solve, RelaxationSolver, SolveResult};
