//! Borrowed windows into a row-major buffer.
//!
//! Strassen's partition step never copies: each quadrant is just the parent
//! buffer plus an offset, a shape, and the parent's row stride.

use crate::matrix::dense::Matrix;
use crate::matrix::Element;

/// A rectangular window into a row-major buffer.
///
/// Element (r, c) of the view is `data[offset + r * stride + c]`.
#[derive(Debug, Clone, Copy)]
pub struct MatrixView<'a, T> {
    data: &'a [T],
    offset: usize,
    rows: usize,
    cols: usize,
    stride: usize,
}

impl<'a, T: Element> MatrixView<'a, T> {
    /// View over a full `rows × cols` buffer.
    pub(crate) fn new(data: &'a [T], rows: usize, cols: usize) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self {
            data,
            offset: 0,
            rows,
            cols,
            stride: cols,
        }
    }

    /// Returns the shape as (rows, cols).
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Gets element at (row, col) relative to the window.
    pub fn get(&self, row: usize, col: usize) -> T {
        debug_assert!(row < self.rows && col < self.cols);
        self.data[self.offset + row * self.stride + col]
    }

    /// One row of the view. Contiguous even when the view isn't.
    pub fn row(&self, row: usize) -> &'a [T] {
        debug_assert!(row < self.rows);
        let start = self.offset + row * self.stride;
        &self.data[start..start + self.cols]
    }

    /// Sub-window starting at (row, col) relative to this view.
    pub fn window(&self, row: usize, col: usize, rows: usize, cols: usize) -> Self {
        debug_assert!(row + rows <= self.rows && col + cols <= self.cols);
        Self {
            data: self.data,
            offset: self.offset + row * self.stride + col,
            rows,
            cols,
            stride: self.stride,
        }
    }

    /// Splits a square view at its midpoint into
    /// `[top_left, top_right, bottom_left, bottom_right]`.
    ///
    /// With `mid = n / 2`: `top_right[i][j] = self[i][j + mid]`,
    /// `bottom_left[i][j] = self[mid + i][j]`, and likewise for the rest.
    pub fn quadrants(&self) -> [Self; 4] {
        debug_assert_eq!(self.rows, self.cols);
        let mid = self.rows / 2;
        [
            self.window(0, 0, mid, mid),
            self.window(0, mid, mid, mid),
            self.window(mid, 0, mid, mid),
            self.window(mid, mid, mid, mid),
        ]
    }

    /// Copies the window out into an owned matrix.
    pub fn to_matrix(&self) -> Matrix<T> {
        let mut out = Matrix::zeros(self.rows, self.cols);
        for (r, dst) in out
            .as_mut_slice()
            .chunks_exact_mut(self.cols.max(1))
            .enumerate()
        {
            dst.copy_from_slice(self.row(r));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counting(n: usize) -> Matrix<i32> {
        Matrix::from_vec(n, n, (0..(n * n) as i32).collect()).unwrap()
    }

    #[test]
    fn test_quadrants_index_mapping() {
        let m = counting(4);
        let [a, b, c, d] = m.view().quadrants();
        for i in 0..2 {
            for j in 0..2 {
                assert_eq!(a.get(i, j), m[(i, j)]);
                assert_eq!(b.get(i, j), m[(i, j + 2)]);
                assert_eq!(c.get(i, j), m[(2 + i, j)]);
                assert_eq!(d.get(i, j), m[(2 + i, j + 2)]);
            }
        }
    }

    #[test]
    fn test_nested_quadrants_keep_parent_stride() {
        let m = counting(8);
        let [_, _, _, d] = m.view().quadrants();
        let [_, db, _, _] = d.quadrants();
        // d starts at (4, 4), its top-right at (4, 6).
        assert_eq!(db.row(0), &[38, 39]);
        assert_eq!(db.row(1), &[46, 47]);
        assert_eq!(db.to_matrix().to_rows(), vec![vec![38, 39], vec![46, 47]]);
    }
}
