//! Strassen matrix multiplication in Rust, checked against brute force.
//!
//! I built this to see Strassen's trick work for real: multiply two n×n
//! matrices with seven half-size products per level instead of eight. The
//! brute-force triple loop is kept alongside as the correctness oracle, and
//! every public entry point checks shapes up front and returns a typed error
//! instead of indexing out of bounds.
//!
//! ## Usage
//!
//! ```
//! use strassen::{multiply_brute_force, strassen_multiply, Matrix};
//!
//! let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
//! let b = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]]).unwrap();
//!
//! let fast = strassen_multiply(&a, &b).unwrap();
//! let slow = multiply_brute_force(&a, &b).unwrap();
//!
//! assert_eq!(fast, slow);
//! assert_eq!(fast.to_rows(), vec![vec![19, 22], vec![43, 50]]);
//! ```
//!
//! Sizes that Strassen can't split evenly are rejected:
//!
//! ```
//! use strassen::{strassen_multiply, Matrix, MatrixError};
//!
//! let a = Matrix::<i32>::identity(3);
//! let err = strassen_multiply(&a, &a).unwrap_err();
//! assert_eq!(err, MatrixError::InvalidSize { rows: 3, cols: 3 });
//! ```
//!
//! ## What's inside
//!
//! - Contiguous row-major [`Matrix`] with zero-copy quadrant views
//! - Brute-force i-k-j baseline
//! - Recursive Strassen with a configurable brute-force leaf size

pub mod error;
pub mod matrix;
pub mod strassen;

pub use error::{MatrixError, Result};
pub use matrix::elementwise::{matrix_add, matrix_subtract};
pub use matrix::naive_ikj::multiply_brute_force;
pub use matrix::{Element, Matrix, MatrixView, RingElement};
pub use strassen::Strassen;

/// Matrix multiply with Strassen's algorithm: C = A * B.
///
/// Both operands must be n×n with n a power of two. Recurses all the way
/// down to 1×1; use [`Strassen::with_leaf_size`] to stop earlier.
///
/// Results are identical to [`multiply_brute_force`] for integers and equal
/// up to rounding for floats. Integer intermediates wrap instead of
/// overflowing, see [`RingElement`].
///
/// # Errors
///
/// - [`MatrixError::InvalidSize`] if an operand isn't a square power of two
/// - [`MatrixError::DimensionMismatch`] if the operands differ in size
pub fn strassen_multiply<T: RingElement>(
    a: &Matrix<T>,
    b: &Matrix<T>,
) -> Result<Matrix<T>> {
    Strassen::default().multiply(a, b)
}
