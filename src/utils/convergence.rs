//! Convergence tracking & tolerance checks for the relaxation solver.

/// Stopping criteria & stats.
#[derive(Clone, Debug)]
pub struct Convergence<T> {
    pub tol: T,
    pub max_iters: usize,
}

/// Where a solve ended up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolveState {
    Running,
    /// Residual norm dropped below the tolerance.
    Converged,
    /// Iteration cap reached without convergence.
    Exhausted,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SolveStats<T> {
    pub iterations: usize,
    pub final_residual: T,
    pub converged: bool,
}

impl<T: Copy + num_traits::Float> Convergence<T> {
    /// Returns (state, stats) given the current absolute `res_norm` at 1-based iteration `i`.
    ///
    /// A NaN residual never compares below the tolerance, so it runs to the cap.
    pub fn check(&self, res_norm: T, i: usize) -> (SolveState, SolveStats<T>) {
        let converged = res_norm < self.tol;
        let state = if converged {
            SolveState::Converged
        } else if i >= self.max_iters {
            SolveState::Exhausted
        } else {
            SolveState::Running
        };
        (
            state,
            SolveStats {
                iterations: i,
                final_residual: res_norm,
                converged,
            },
        )
    }
}
