//! Elementwise addition and subtraction.

use log::debug;

use crate::error::{MatrixError, Result};
use crate::matrix::{Element, Matrix, MatrixView};

/// Returns A + B as a new matrix.
///
/// # Errors
///
/// Returns [`MatrixError::DimensionMismatch`] if the shapes differ.
///
/// # Example
///
/// ```
/// use strassen::{matrix_add, Matrix};
///
/// let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
/// let b = Matrix::from_rows(vec![vec![5, 0], vec![7, 2]]).unwrap();
/// assert_eq!(matrix_add(&a, &b).unwrap().to_rows(), vec![vec![6, 2], vec![10, 6]]);
/// ```
pub fn matrix_add<T: Element>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    check_same_shape("matrix_add", a, b)?;
    debug!("matrix add: {}x{}", a.n_rows(), a.n_cols());
    Ok(add_views(a.view(), b.view()))
}

/// Returns A - B as a new matrix.
///
/// # Errors
///
/// Returns [`MatrixError::DimensionMismatch`] if the shapes differ.
///
/// # Example
///
/// ```
/// use strassen::{matrix_subtract, Matrix};
///
/// let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
/// let b = Matrix::from_rows(vec![vec![5, 0], vec![7, 2]]).unwrap();
/// assert_eq!(matrix_subtract(&a, &b).unwrap().to_rows(), vec![vec![-4, 2], vec![-4, 2]]);
/// ```
pub fn matrix_subtract<T: Element>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    check_same_shape("matrix_subtract", a, b)?;
    debug!("matrix subtract: {}x{}", a.n_rows(), a.n_cols());
    Ok(sub_views(a.view(), b.view()))
}

fn check_same_shape<T: Element>(op: &'static str, a: &Matrix<T>, b: &Matrix<T>) -> Result<()> {
    if a.shape() != b.shape() {
        return Err(MatrixError::DimensionMismatch {
            op,
            left: a.shape(),
            right: b.shape(),
        });
    }
    Ok(())
}

fn add_views<T: Element>(a: MatrixView<'_, T>, b: MatrixView<'_, T>) -> Matrix<T> {
    zip_with(a, b, |x, y| x + y)
}

fn sub_views<T: Element>(a: MatrixView<'_, T>, b: MatrixView<'_, T>) -> Matrix<T> {
    zip_with(a, b, |x, y| x - y)
}

/// Applies `op` pairwise over two same-shape views.
pub(crate) fn zip_with<T: Element>(
    a: MatrixView<'_, T>,
    b: MatrixView<'_, T>,
    op: impl Fn(T, T) -> T,
) -> Matrix<T> {
    debug_assert_eq!(a.shape(), b.shape());
    let (rows, cols) = a.shape();
    let mut out = Matrix::zeros(rows, cols);
    if cols == 0 {
        return out;
    }

    for (r, dst) in out.as_mut_slice().chunks_exact_mut(cols).enumerate() {
        for ((d, &x), &y) in dst.iter_mut().zip(a.row(r)).zip(b.row(r)) {
            *d = op(x, y);
        }
    }
    out
}
