use log::{debug, trace};

use crate::error::{MatrixError, Result};
use crate::matrix::elementwise::zip_with;
use crate::matrix::naive_ikj::multiply_views_with;
use crate::matrix::{Element, Matrix, MatrixView, RingElement};
use crate::strassen::quadrant::combine;

/// Strassen multiplier with a configurable leaf size.
///
/// Subproblems of size `n <= leaf_size` go to the brute-force kernel instead
/// of recursing further. The default leaf size of 1 recurses all the way down
/// to scalar products.
///
/// # Example
///
/// ```
/// use strassen::{Matrix, Strassen};
///
/// let a = Matrix::<i64>::identity(8);
/// let b = Matrix::from_vec(8, 8, (0..64).collect()).unwrap();
///
/// let c = Strassen::new().with_leaf_size(4).multiply(&a, &b).unwrap();
/// assert_eq!(c, b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strassen {
    leaf_size: usize,
}

impl Default for Strassen {
    fn default() -> Self {
        Self { leaf_size: 1 }
    }
}

impl Strassen {
    /// Multiplier with the default leaf size of 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the size at or below which subproblems are multiplied directly.
    ///
    /// A leaf size of 0 behaves like 1.
    pub fn with_leaf_size(mut self, leaf_size: usize) -> Self {
        self.leaf_size = leaf_size;
        self
    }

    /// Size at or below which subproblems are multiplied directly.
    pub fn leaf_size(&self) -> usize {
        self.leaf_size
    }

    /// Multiplies two n×n matrices, n a power of two.
    ///
    /// # Errors
    ///
    /// - [`MatrixError::InvalidSize`] if either operand is not square or its
    ///   size is not a power of two (this includes 0×0)
    /// - [`MatrixError::DimensionMismatch`] if both are valid but of
    ///   different sizes
    ///
    /// Integer entries never panic on overflow: intermediate sums wrap, and
    /// the result is exact whenever the true product fits in `T`.
    pub fn multiply<T: RingElement>(
        &self,
        a: &Matrix<T>,
        b: &Matrix<T>,
    ) -> Result<Matrix<T>> {
        validate(a, b)?;
        debug!(
            "strassen multiply: {}x{} (leaf size {})",
            a.n_rows(),
            a.n_cols(),
            self.leaf_size
        );
        Ok(self.recurse(a.view(), b.view()))
    }

    fn recurse<T: RingElement>(
        &self,
        lhs: MatrixView<'_, T>,
        rhs: MatrixView<'_, T>,
    ) -> Matrix<T> {
        let n = lhs.n_rows();
        if n == 1 {
            return Matrix::from_scalar(lhs.get(0, 0).ring_mul(rhs.get(0, 0)));
        }
        if n <= self.leaf_size {
            return multiply_views_with(lhs, rhs, T::ring_add, T::ring_mul);
        }
        trace!("strassen: splitting {}x{}", n, n);

        let [a, b, c, d] = lhs.quadrants();
        let [e, f, g, h] = rhs.quadrants();

        let m1 = self.recurse(ring_add_views(a, d).view(), ring_add_views(e, h).view());
        let m2 = self.recurse(ring_add_views(c, d).view(), e);
        let m3 = self.recurse(a, ring_sub_views(f, h).view());
        let m4 = self.recurse(d, ring_sub_views(g, e).view());
        let m5 = self.recurse(ring_add_views(a, b).view(), h);
        let m6 = self.recurse(ring_sub_views(c, a).view(), ring_add_views(e, f).view());
        let m7 = self.recurse(ring_sub_views(b, d).view(), ring_add_views(g, h).view());

        combine(&[m1, m2, m3, m4, m5, m6, m7])
    }
}

fn ring_add_views<T: RingElement>(a: MatrixView<'_, T>, b: MatrixView<'_, T>) -> Matrix<T> {
    zip_with(a, b, T::ring_add)
}

fn ring_sub_views<T: RingElement>(a: MatrixView<'_, T>, b: MatrixView<'_, T>) -> Matrix<T> {
    zip_with(a, b, T::ring_sub)
}

fn validate<T: Element>(a: &Matrix<T>, b: &Matrix<T>) -> Result<()> {
    for m in [a, b] {
        let (rows, cols) = m.shape();
        if rows != cols || !rows.is_power_of_two() {
            return Err(MatrixError::InvalidSize { rows, cols });
        }
    }
    if a.shape() != b.shape() {
        return Err(MatrixError::DimensionMismatch {
            op: "strassen_multiply",
            left: a.shape(),
            right: b.shape(),
        });
    }
    Ok(())
}
