//! Solver configuration: cycle types, effort policies and options.

pub mod cycle;
pub mod options;

pub use cycle::{CyclePolicy, CycleType, V_POLICY, W_POLICY};
pub use options::{SolverOptions, DEFAULT_TOLERANCE, MAX_INTERACTIVE_DIM};
