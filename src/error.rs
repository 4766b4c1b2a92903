use thiserror::Error;

// Unified error type for gsrelax

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelaxError {
    #[error("empty system: matrix must have at least one row")]
    EmptySystem,
    #[error("matrix is not square: row {row} has {len} entries, expected {n}")]
    NotSquare { row: usize, len: usize, n: usize },
    #[error("dimension mismatch: matrix is {n}x{n} but rhs has length {rhs}")]
    DimensionMismatch { n: usize, rhs: usize },
    #[error("dimension {n} exceeds maximum supported {max}")]
    DimensionTooLarge { n: usize, max: usize },
    #[error("unknown cycle type: {0}")]
    UnknownCycle(String),
}
