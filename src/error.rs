//! Error types for the percolation crate.

use thiserror::Error;

/// Result type for percolation operations.
pub type Result<T> = std::result::Result<T, PercolationError>;

/// Contract violations surfaced by the grid, the connectivity structure and
/// the estimator.
///
/// None of these are recoverable runtime conditions: they indicate a caller
/// passed parameters outside the documented domain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PercolationError {
    /// A constructor parameter is outside its valid domain (e.g. `n == 0`).
    #[error("invalid argument `{name}`: {value} (must be > 0)")]
    InvalidArgument { name: &'static str, value: i64 },

    /// A grid coordinate lies outside `[0, size - 1]`.
    #[error("site ({row}, {col}) is outside a {size}x{size} grid")]
    IndexOutOfRange { row: usize, col: usize, size: usize },

    /// A connectivity node identifier is `>= len`.
    #[error("node {index} is out of range for {len} nodes")]
    OutOfRange { index: usize, len: usize },
}
