use proptest::prelude::*;
use strassen::{
    Matrix, Strassen, matrix_add, matrix_subtract, multiply_brute_force, strassen_multiply,
};

/// Two n×n integer matrices with n a power of two up to 16.
fn square_pair() -> impl Strategy<Value = (Matrix<i64>, Matrix<i64>)> {
    (0u32..=4).prop_flat_map(|exp| {
        let n = 1usize << exp;
        let entries = prop::collection::vec(-50i64..50, n * n);
        (entries.clone(), entries).prop_map(move |(a, b)| {
            (
                Matrix::from_vec(n, n, a).unwrap(),
                Matrix::from_vec(n, n, b).unwrap(),
            )
        })
    })
}

/// Two same-shape, possibly rectangular matrices.
fn same_shape_pair() -> impl Strategy<Value = (Matrix<i64>, Matrix<i64>)> {
    (1usize..6, 1usize..6).prop_flat_map(|(rows, cols)| {
        let entries = prop::collection::vec(-1000i64..1000, rows * cols);
        (entries.clone(), entries).prop_map(move |(a, b)| {
            (
                Matrix::from_vec(rows, cols, a).unwrap(),
                Matrix::from_vec(rows, cols, b).unwrap(),
            )
        })
    })
}

proptest! {
    #[test]
    fn prop_strassen_matches_brute_force((a, b) in square_pair()) {
        prop_assert_eq!(strassen_multiply(&a, &b).unwrap(), multiply_brute_force(&a, &b).unwrap());
    }

    #[test]
    fn prop_leaf_size_does_not_change_result((a, b) in square_pair(), leaf_size in 0usize..20) {
        let engine = Strassen::new().with_leaf_size(leaf_size);
        prop_assert_eq!(engine.multiply(&a, &b).unwrap(), strassen_multiply(&a, &b).unwrap());
    }

    #[test]
    fn prop_identity_is_neutral((a, _) in square_pair()) {
        let id = Matrix::identity(a.n_rows());
        prop_assert_eq!(&strassen_multiply(&a, &id).unwrap(), &a);
        prop_assert_eq!(&strassen_multiply(&id, &a).unwrap(), &a);
    }

    #[test]
    fn prop_subtract_then_add_restores((a, b) in same_shape_pair()) {
        let diff = matrix_subtract(&a, &b).unwrap();
        prop_assert_eq!(matrix_add(&diff, &b).unwrap(), a);
    }
}
