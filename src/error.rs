//! Error types for matrix operations.

use thiserror::Error;

/// Result type alias for matrix operations.
pub type Result<T> = std::result::Result<T, MatrixError>;

/// Everything that can go wrong when building or multiplying matrices.
///
/// All errors are deterministic shape problems, reported before any work is
/// done, so no partial result is ever produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// Operand shapes violate the operation's precondition.
    #[error("dimension mismatch in {op}: left is {}x{}, right is {}x{}", .left.0, .left.1, .right.0, .right.1)]
    DimensionMismatch {
        /// Operation that rejected the operands
        op: &'static str,
        /// Shape of the left operand as (rows, cols)
        left: (usize, usize),
        /// Shape of the right operand as (rows, cols)
        right: (usize, usize),
    },

    /// Strassen operand is not a square power-of-two matrix.
    #[error("invalid size for Strassen multiplication: {rows}x{cols} is not a square power-of-two matrix")]
    InvalidSize { rows: usize, cols: usize },

    /// Buffer length doesn't match the requested shape.
    #[error("buffer of {len} elements cannot form a {rows}x{cols} matrix")]
    BufferLength { rows: usize, cols: usize, len: usize },

    /// A row in nested-rows input has the wrong length.
    #[error("row {row} has {len} elements, expected {expected}")]
    RaggedRows {
        row: usize,
        len: usize,
        expected: usize,
    },
}
