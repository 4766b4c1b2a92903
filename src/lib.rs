//! gsrelax: Gauss–Seidel relaxation over Faer
//!
//! This crate approximates the solution of small dense systems `Ax = b` with repeated
//! Gauss–Seidel sweeps. A V or W cycle sets how much relaxation work is spent between
//! residual checks; non-convergence is reported in the result rather than as an error.
//!
//! ```rust
//! use gsrelax::{solve, CycleType};
//!
//! let a = vec![vec![4.0_f64, 1.0], vec![1.0, 3.0]];
//! let res = solve(&a, &[1.0, 2.0], CycleType::V).unwrap();
//! assert!(res.converged);
//! assert!((res.x[0] - 1.0 / 11.0).abs() < 1e-8);
//! ```

pub mod parallel;

pub mod config;
pub mod core;
pub mod error;
pub mod matrix;
pub mod smoother;
pub mod solver;
pub mod utils;

// Re-exports for convenience
pub use crate::config::{CyclePolicy, CycleType, SolverOptions, DEFAULT_TOLERANCE, MAX_INTERACTIVE_DIM};
pub use crate::core::traits::{InnerProduct, MatShape, MatVec, MatrixGet};
pub use crate::error::RelaxError;
pub use crate::matrix::DenseMatrix;
pub use crate::parallel::solve_batch;
pub use crate::smoother::{GaussSeidel, Smoother};
pub use crate::solver::{solve, LinearSolver, RelaxationSolver, SolveResult};
pub use crate::utils::convergence::{SolveState, SolveStats};
pub use crate::utils::residual::{residual, residual_norm};
