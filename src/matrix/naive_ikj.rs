use log::debug;

use crate::error::{MatrixError, Result};
use crate::matrix::{Element, Matrix, MatrixView};

/// Brute-force matrix multiplication: C = A * B.
///
/// A is m×n, B is n×p, the result is m×p with
/// `C[i][j] = Σ_k A[i][k] * B[k][j]`. Neither input is modified.
///
/// # Errors
///
/// Returns [`MatrixError::DimensionMismatch`] if the columns of A don't
/// match the rows of B.
///
/// # Example
///
/// ```
/// use strassen::{multiply_brute_force, Matrix};
///
/// let a = Matrix::from_rows(vec![vec![-1, 4], vec![2, 3]]).unwrap();
/// let b = Matrix::from_rows(vec![vec![9, -3], vec![6, 1]]).unwrap();
///
/// let c = multiply_brute_force(&a, &b).unwrap();
/// assert_eq!(c.to_rows(), vec![vec![15, 7], vec![36, -3]]);
/// ```
pub fn multiply_brute_force<T: Element>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    if a.n_cols() != b.n_rows() {
        return Err(MatrixError::DimensionMismatch {
            op: "multiply_brute_force",
            left: a.shape(),
            right: b.shape(),
        });
    }
    debug!(
        "brute force multiply: {}x{} * {}x{}",
        a.n_rows(),
        a.n_cols(),
        b.n_rows(),
        b.n_cols()
    );
    Ok(multiply_views(a.view(), b.view()))
}

/// i-k-j triple loop over views.
///
/// The innermost loop walks a row of B and a row of C together, so both are
/// read sequentially even when the views are quadrants of a larger buffer.
/// Callers must have checked `a.n_cols() == b.n_rows()`.
pub(crate) fn multiply_views<T: Element>(
    a: MatrixView<'_, T>,
    b: MatrixView<'_, T>,
) -> Matrix<T> {
    multiply_views_with(a, b, |x, y| x + y, |x, y| x * y)
}

/// Same loop as [`multiply_views`] with caller-chosen `add` and `mul`.
pub(crate) fn multiply_views_with<T: Element>(
    a: MatrixView<'_, T>,
    b: MatrixView<'_, T>,
    add: impl Fn(T, T) -> T,
    mul: impl Fn(T, T) -> T,
) -> Matrix<T> {
    debug_assert_eq!(a.n_cols(), b.n_rows());
    let m = a.n_rows();
    let n = b.n_cols();
    let mut c = Matrix::zeros(m, n);
    if n == 0 {
        return c;
    }

    for (i, c_row) in c.as_mut_slice().chunks_exact_mut(n).enumerate() {
        for (p, &a_ip) in a.row(i).iter().enumerate() {
            for (c_ij, &b_pj) in c_row.iter_mut().zip(b.row(p)) {
                *c_ij = add(*c_ij, mul(a_ip, b_pj));
            }
        }
    }
    c
}
