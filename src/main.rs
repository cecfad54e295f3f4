//! Demo runner: checks Strassen against brute force, then times both.

use std::time::Instant;

use anyhow::{Result, bail};
use clap::Parser;
use log::{info, warn};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use strassen::{Matrix, Strassen, multiply_brute_force};

#[derive(Parser, Debug)]
#[command(about = "Compare Strassen and brute-force matrix multiplication", long_about = None)]
struct Args {
    /// Power-of-two matrix sizes for the timing comparison.
    #[arg(long, value_delimiter = ',', default_value = "64,128,256")]
    sizes: Vec<usize>,

    /// Subproblems at or below this size are multiplied by brute force.
    #[arg(long, default_value_t = 1)]
    leaf_size: usize,

    /// Timed runs per method and size.
    #[arg(long, default_value_t = 3)]
    iterations: usize,

    /// Seed for the generated matrices.
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    let engine = Strassen::new().with_leaf_size(args.leaf_size);

    println!("=== Strassen vs Brute Force ===\n");

    let mut all_agree = check_fixed_examples(&engine)?;

    let mut rng = SmallRng::seed_from_u64(args.seed);
    let mut all_results = Vec::new();

    for &size in &args.sizes {
        if !size.is_power_of_two() {
            warn!("skipping size {}: not a power of two", size);
            continue;
        }
        println!("Matrix: {}×{}", size, size);
        println!("{}", "-".repeat(50));

        let a = random_matrix(&mut rng, size)?;
        let b = random_matrix(&mut rng, size)?;

        let (brute_ms, brute) = bench(args.iterations, || multiply_brute_force(&a, &b))?;
        let (strassen_ms, fast) = bench(args.iterations, || engine.multiply(&a, &b))?;

        let agree = brute == fast;
        all_agree &= agree;
        if !agree {
            warn!("{}×{}: Strassen and brute force disagree", size, size);
        }

        println!("1. {:12} {:10.2} ms", "Brute force", brute_ms);
        println!(
            "2. {:12} {:10.2} ms  ({:.2}×)  agree={}",
            "Strassen",
            strassen_ms,
            brute_ms / strassen_ms,
            agree
        );
        println!();

        all_results.push((size, brute_ms, strassen_ms));
    }

    if !all_results.is_empty() {
        print_summary_table(&all_results, args.leaf_size);
    }

    if !all_agree {
        bail!("Strassen and brute force disagreed on at least one input");
    }
    info!("all results agree");
    Ok(())
}

/// Runs the two hand-checked 2×2 examples through both paths.
fn check_fixed_examples(engine: &Strassen) -> Result<bool> {
    let cases = [
        (
            vec![vec![1, 2], vec![3, 4]],
            vec![vec![5, 6], vec![7, 8]],
            vec![vec![19, 22], vec![43, 50]],
        ),
        (
            vec![vec![-1, 4], vec![2, 3]],
            vec![vec![9, -3], vec![6, 1]],
            vec![vec![15, 7], vec![36, -3]],
        ),
    ];

    let mut all_agree = true;
    for (i, (a, b, expected)) in cases.into_iter().enumerate() {
        let a = Matrix::<i64>::from_rows(a)?;
        let b = Matrix::from_rows(b)?;
        let expected = Matrix::from_rows(expected)?;

        let fast = engine.multiply(&a, &b)?;
        let brute = multiply_brute_force(&a, &b)?;
        let agree = fast == brute && brute == expected;
        all_agree &= agree;

        println!("Example {}: agree={}", i + 1, agree);
        print!("{}", fast);
        println!();
    }
    Ok(all_agree)
}

fn random_matrix(rng: &mut SmallRng, n: usize) -> Result<Matrix<i64>> {
    let data = (0..n * n).map(|_| rng.random_range(-9..=9)).collect();
    Ok(Matrix::from_vec(n, n, data)?)
}

/// Warmup once, then average `iterations` timed runs. Returns (ms, result).
fn bench<F>(iterations: usize, f: F) -> Result<(f64, Matrix<i64>)>
where
    F: Fn() -> strassen::Result<Matrix<i64>>,
{
    let mut result = f()?;

    let iterations = iterations.max(1);
    let mut total = 0.0;
    for _ in 0..iterations {
        let start = Instant::now();
        result = f()?;
        total += start.elapsed().as_secs_f64();
    }

    Ok((total / iterations as f64 * 1000.0, result))
}

fn print_summary_table(all_results: &[(usize, f64, f64)], leaf_size: usize) {
    println!("\n{}", "=".repeat(60));
    println!("SUMMARY (leaf size {})", leaf_size);
    println!("{}", "=".repeat(60));

    println!(
        "\n{:<12} {:>14} {:>14} {:>12}",
        "Size", "Brute (ms)", "Strassen (ms)", "Speedup"
    );
    println!("{}", "-".repeat(60));

    for &(size, brute_ms, strassen_ms) in all_results {
        println!(
            "{:<12} {:>14.2} {:>14.2} {:>11.2}×",
            format!("{}×{}", size, size),
            brute_ms,
            strassen_ms,
            brute_ms / strassen_ms
        );
    }

    println!("{}", "=".repeat(60));
    println!("\nSpeedup relative to brute force. Higher is better.\n");
}
