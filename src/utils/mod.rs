//! Residuals, convergence tracking and input validation.

pub mod convergence;
pub mod residual;
pub mod validation;
