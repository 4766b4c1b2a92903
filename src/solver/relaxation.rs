//! Gauss–Seidel relaxation solver with V/W effort cycles.
//!
//! Each outer iteration runs a block of Gauss–Seidel sweeps, then checks the
//! absolute residual norm ‖b − A x‖₂ against the tolerance:
//!
//! ```text
//! x = 0
//! for k = 1..=max_iterations:
//!     smooth(x, sweeps)
//!     res = ‖b − A x‖₂
//!     if res < tol: converged
//!     if extra_phase: smooth(x, sweeps)
//! ```
//!
//! The cycle type only picks `max_iterations`, `sweeps` and `extra_phase`
//! from [`CyclePolicy`](crate::config::CyclePolicy). There is no coarse grid:
//! the W cycle reruns the smoother after every check that fails, including
//! the last one, so the returned `x` may have been relaxed past the recorded
//! residual.
//!
//! Rows with a near-zero diagonal are skipped by the smoother. Failure to
//! converge is reported through [`SolveResult::converged`], never as an
//! error; errors are reserved for malformed input.

use std::fmt;

use num_traits::Float;
use tracing::{debug, instrument, trace, warn};

use crate::config::{CycleType, SolverOptions, DEFAULT_TOLERANCE};
use crate::core::traits::{MatShape, MatVec, MatrixGet};
use crate::error::RelaxError;
use crate::smoother::{GaussSeidel, Smoother};
use crate::solver::LinearSolver;
use crate::utils::convergence::{Convergence, SolveState, SolveStats};
use crate::utils::residual::residual_norm_with;
use crate::utils::validation::validate_system;

/// Outcome of one solve: the final iterate plus its diagnostics.
#[derive(Clone, Debug, PartialEq)]
pub struct SolveResult<T> {
    pub x: Vec<T>,
    pub iterations: usize,
    pub residual: T,
    pub converged: bool,
}

impl<T> SolveResult<T> {
    pub fn state(&self) -> SolveState {
        if self.converged { SolveState::Converged } else { SolveState::Exhausted }
    }

    fn from_stats(x: Vec<T>, stats: SolveStats<T>) -> Self {
        Self {
            x,
            iterations: stats.iterations,
            residual: stats.final_residual,
            converged: stats.converged,
        }
    }
}

pub struct RelaxationSolver<T> {
    pub cycle: CycleType,
    pub conv: Convergence<T>,
    pub smoother: GaussSeidel<T>,
    pub max_dim: Option<usize>,
}

impl<T: Float> RelaxationSolver<T> {
    pub fn new(cycle: CycleType) -> Self {
        let tol = T::from(DEFAULT_TOLERANCE).unwrap_or_else(T::epsilon);
        Self {
            cycle,
            conv: Convergence { tol, max_iters: cycle.policy().max_iterations },
            smoother: GaussSeidel::new(),
            max_dim: None,
        }
    }

    pub fn from_options(opts: &SolverOptions<T>) -> Self {
        Self::new(opts.cycle).with_tolerance(opts.tol).with_max_dim(opts.max_dim)
    }

    pub fn with_tolerance(mut self, tol: T) -> Self {
        self.conv.tol = tol;
        self
    }

    pub fn with_max_dim(mut self, max_dim: Option<usize>) -> Self {
        self.max_dim = max_dim;
        self
    }

    /// Solve A·x = b from a zero initial guess and return the final iterate.
    pub fn run<M>(&self, a: &M, b: &[T]) -> Result<SolveResult<T>, RelaxError>
    where
        M: MatVec<Vec<T>> + MatrixGet<T> + MatShape,
    {
        let b = b.to_vec();
        let mut x = Vec::new();
        let stats = self.iterate(a, &b, &mut x)?;
        Ok(SolveResult::from_stats(x, stats))
    }

    #[instrument(skip_all, fields(n = b.len(), cycle = %self.cycle))]
    fn iterate<M>(&self, a: &M, b: &Vec<T>, x: &mut Vec<T>) -> Result<SolveStats<T>, RelaxError>
    where
        M: MatVec<Vec<T>> + MatrixGet<T> + MatShape,
    {
        let n = validate_system(a, b.len(), self.max_dim)?;
        let policy = self.cycle.policy();

        x.clear();
        x.resize(n, T::zero());
        let mut r = vec![T::zero(); n];
        let mut stats = SolveStats { iterations: 0, final_residual: T::nan(), converged: false };

        for i in 1..=self.conv.max_iters {
            self.smoother.smooth(a, b, x, policy.smoothing_sweeps);
            let res_norm = residual_norm_with(a, b, x, &mut r);
            let (state, s) = self.conv.check(res_norm, i);
            stats = s;
            trace!(iteration = i, residual = res_norm.to_f64().unwrap_or(f64::NAN), "relaxation step");
            if state == SolveState::Converged {
                debug!(iterations = i, residual = res_norm.to_f64().unwrap_or(f64::NAN), "converged");
                return Ok(stats);
            }
            if policy.extra_phase {
                self.smoother.smooth(a, b, x, policy.smoothing_sweeps);
            }
            if state == SolveState::Exhausted {
                break;
            }
        }
        warn!(
            iterations = stats.iterations,
            residual = stats.final_residual.to_f64().unwrap_or(f64::NAN),
            "iteration cap reached without convergence"
        );
        Ok(stats)
    }
}

impl<M, T> LinearSolver<M, Vec<T>> for RelaxationSolver<T>
where
    M: MatVec<Vec<T>> + MatrixGet<T> + MatShape,
    T: Float,
{
    type Error = RelaxError;
    type Scalar = T;

    /// Solve A·x = b. Whatever `x` holds on entry is discarded: it is resized
    /// to n and zeroed before the first sweep.
    fn solve(&mut self, a: &M, b: &Vec<T>, x: &mut Vec<T>) -> Result<SolveStats<T>, RelaxError> {
        self.iterate(a, b, x)
    }
}

impl<T> fmt::Display for RelaxationSolver<T>
where
    T: Float + fmt::LowerExp,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.cycle.policy();
        write!(
            f,
            "Relaxation(cycle={}, max_iters={}, sweeps={}, tol={:e})",
            self.cycle, self.conv.max_iters, p.smoothing_sweeps, self.conv.tol
        )
    }
}

/// Solve A·x = b with the given cycle and the default tolerance.
pub fn solve<M, T>(a: &M, b: &[T], cycle: CycleType) -> Result<SolveResult<T>, RelaxError>
where
    M: MatVec<Vec<T>> + MatrixGet<T> + MatShape,
    T: Float,
{
    RelaxationSolver::new(cycle).run(a, b)
}
