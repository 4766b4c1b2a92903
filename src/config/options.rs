//! Command-line or API options for the relaxation solver.
//!
//! This module provides the `SolverOptions` struct, which front ends fill in
//! (from prompts, arguments or code) and hand to
//! [`RelaxationSolver::from_options`](crate::solver::RelaxationSolver::from_options).
//! The cycle type chooses the effort policy; the tolerance and the dimension
//! bound default to the values used by the interactive reference tool.

use num_traits::Float;

use super::cycle::CycleType;

/// Residual-norm threshold below which a solve is accepted.
pub const DEFAULT_TOLERANCE: f64 = 1e-8;

/// Largest system size accepted by interactive front ends.
pub const MAX_INTERACTIVE_DIM: usize = 12;

/// Solver type & parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverOptions<T> {
    /// Effort policy (V or W)
    pub cycle: CycleType,

    /// Absolute residual-norm tolerance
    pub tol: T,

    /// Optional upper bound on the system dimension
    pub max_dim: Option<usize>,
}

impl<T: Float> Default for SolverOptions<T> {
    fn default() -> Self {
        Self {
            cycle: CycleType::V,
            tol: T::from(DEFAULT_TOLERANCE).unwrap_or_else(T::epsilon),
            max_dim: Some(MAX_INTERACTIVE_DIM),
        }
    }
}

impl<T: Float> SolverOptions<T> {
    pub fn with_cycle(mut self, cycle: CycleType) -> Self {
        self.cycle = cycle;
        self
    }
}
