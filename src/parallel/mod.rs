//! Batch solving of independent systems.
//!
//! A single relaxation solve is sequential. Independent systems share no
//! state, so a batch is spread over the rayon pool one system per task when
//! the `rayon` feature is enabled, and solved in order otherwise. Both paths
//! return results in input order and produce identical values.

use num_traits::Float;

use crate::config::CycleType;
use crate::core::traits::{MatShape, MatVec, MatrixGet};
use crate::error::RelaxError;
use crate::solver::{RelaxationSolver, SolveResult};

#[cfg(feature = "rayon")]
pub mod rayon_pool;
#[cfg(feature = "rayon")]
pub use rayon_pool::init_thread_pool;

/// One system A·x = b.
pub type System<M, T> = (M, Vec<T>);

/// Solve every system in `systems` with the same cycle.
pub fn solve_batch<M, T>(
    systems: &[System<M, T>],
    cycle: CycleType,
) -> Vec<Result<SolveResult<T>, RelaxError>>
where
    M: MatVec<Vec<T>> + MatrixGet<T> + MatShape + Sync,
    T: Float + Send + Sync,
{
    let solver = RelaxationSolver::new(cycle);
    #[cfg(feature = "rayon")]
    {
        use rayon::prelude::*;
        systems
            .par_iter()
            .map(|(a, b)| solver.run(a, b))
            .collect()
    }
    #[cfg(not(feature = "rayon"))]
    {
        systems.iter().map(|(a, b)| solver.run(a, b)).collect()
    }
}
