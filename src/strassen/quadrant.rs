use crate::matrix::{Matrix, RingElement};

/// Reassembles the n×n product from the seven (n/2)×(n/2) partial products.
///
/// ```text
/// top_left     = m1 + m4 - m5 + m7
/// top_right    = m3 + m5
/// bottom_left  = m2 + m4
/// bottom_right = m1 - m2 + m3 + m6
/// ```
///
/// Each quadrant is written straight into its place in the output, which is
/// the inverse of the partition's index mapping. Sums use ring arithmetic.
pub(crate) fn combine<T: RingElement>(products: &[Matrix<T>; 7]) -> Matrix<T> {
    let [m1, m2, m3, m4, m5, m6, m7] = products;
    let mid = m1.n_rows();
    let n = 2 * mid;
    let mut c = Matrix::zeros(n, n);
    let out = c.as_mut_slice();

    let (p1, p2, p3, p4) = (m1.as_slice(), m2.as_slice(), m3.as_slice(), m4.as_slice());
    let (p5, p6, p7) = (m5.as_slice(), m6.as_slice(), m7.as_slice());

    for i in 0..mid {
        let top = i * n;
        let bottom = (mid + i) * n;
        for j in 0..mid {
            let q = i * mid + j;
            out[top + j] = p1[q].ring_add(p4[q]).ring_sub(p5[q]).ring_add(p7[q]);
            out[top + mid + j] = p3[q].ring_add(p5[q]);
            out[bottom + j] = p2[q].ring_add(p4[q]);
            out[bottom + mid + j] = p1[q].ring_sub(p2[q]).ring_add(p3[q]).ring_add(p6[q]);
        }
    }
    c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_places_quadrants() {
        // m2..m7 zero: only m1 lands, in top-left and bottom-right.
        let mut products: [Matrix<i32>; 7] = std::array::from_fn(|_| Matrix::zeros(1, 1));
        products[0] = Matrix::from_scalar(3);
        let c = combine(&products);
        assert_eq!(c.to_rows(), vec![vec![3, 0], vec![0, 3]]);

        // m5 alone: -m5 top-left, +m5 top-right.
        let mut products: [Matrix<i32>; 7] = std::array::from_fn(|_| Matrix::zeros(1, 1));
        products[4] = Matrix::from_scalar(2);
        let c = combine(&products);
        assert_eq!(c.to_rows(), vec![vec![-2, 2], vec![0, 0]]);
    }
}
