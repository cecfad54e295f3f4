//! Criterion benchmarks: brute force vs Strassen at a few leaf sizes.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use strassen::{Matrix, Strassen, multiply_brute_force};

fn input(n: usize, modulus: i64) -> Matrix<i64> {
    let data = (0..(n * n) as i64).map(|i| i % modulus - modulus / 2).collect();
    Matrix::from_vec(n, n, data).unwrap()
}

fn bench_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");
    group.sample_size(10);

    for size in [32, 64, 128, 256] {
        let a = input(size, 17);
        let b = input(size, 13);

        group.bench_with_input(BenchmarkId::new("brute_force", size), &size, |bench, _| {
            bench.iter(|| multiply_brute_force(black_box(&a), black_box(&b)).unwrap())
        });

        for leaf_size in [1, 16, 64] {
            let engine = Strassen::new().with_leaf_size(leaf_size);
            group.bench_with_input(
                BenchmarkId::new(format!("strassen_leaf_{}", leaf_size), size),
                &size,
                |bench, _| bench.iter(|| engine.multiply(black_box(&a), black_box(&b)).unwrap()),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_multiply);
criterion_main!(benches);
