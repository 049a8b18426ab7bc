//! Error types for the math kernel
//!
//! Every fallible operation in this crate reports one of these variants to
//! its immediate caller. Nothing is retried or clamped internally.

use thiserror::Error;

/// Error type for math operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// Component or row index outside `0..len`
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    /// The determinant of the relevant block is exactly zero
    #[error("{dimension}x{dimension} matrix is not invertible")]
    NotInvertible { dimension: usize },
    /// Sub-dimension outside `1..=4`
    #[error("dimension {n} out of range, expected 1 <= n <= 4")]
    DimensionOutOfRange { n: usize },
    /// Integer division or modulo by zero
    #[error("division by zero")]
    DivisionByZero,
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, MathError>;
