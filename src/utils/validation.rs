//! Input validation for the relaxation solver.
//!
//! Checks run eagerly, before any sweep, so a malformed system is rejected
//! with a precise error instead of indexing out of bounds halfway through a
//! solve. Values are not checked for finiteness: NaN and Inf flow through
//! to the residual.

use crate::core::traits::MatShape;
use crate::error::RelaxError;

/// Validate that `a` is a non-empty n×n matrix, `rhs_len == n` and, if
/// given, `n <= max_dim`. Returns n.
pub fn validate_system<M: MatShape>(
    a: &M,
    rhs_len: usize,
    max_dim: Option<usize>,
) -> Result<usize, RelaxError> {
    let n = a.nrows();
    if n == 0 {
        return Err(RelaxError::EmptySystem);
    }
    if let Some(max) = max_dim {
        if n > max {
            return Err(RelaxError::DimensionTooLarge { n, max });
        }
    }
    for i in 0..n {
        let len = a.row_len(i);
        if len != n {
            return Err(RelaxError::NotSquare { row: i + 1, len, n });
        }
    }
    if rhs_len != n {
        return Err(RelaxError::DimensionMismatch { n, rhs: rhs_len });
    }
    Ok(n)
}
