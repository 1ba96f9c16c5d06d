//! Benchmark runner comparing the sequential and row-parallel multipliers.
//!
//! Multiplies two randomly filled 1000×1000 integer matrices with each
//! implementation (one discarded warm-up, then three timed runs), verifies
//! the results agree cell for cell, and reports the average durations and
//! the speedup. A result mismatch is a logic defect and exits non-zero.

use std::process::ExitCode;
use std::time::Instant;

use parmul::{Matrix, matmul_parallel_rows, matmul_sequential};

const NUM_ROWS_A: usize = 1000;
const NUM_COLS_A: usize = 1000;
const NUM_COLS_B: usize = 1000;
const NUM_EVAL_RUNS: usize = 3;

fn main() -> ExitCode {
    let mut rng = rand::rng();
    let a = Matrix::random(NUM_ROWS_A, NUM_COLS_A, &mut rng);
    let b = Matrix::random(NUM_COLS_A, NUM_COLS_B, &mut rng);
    let mut sequential_result = Matrix::zeros(NUM_ROWS_A, NUM_COLS_B);
    let mut parallel_result = Matrix::zeros(NUM_ROWS_A, NUM_COLS_B);

    let workers = num_cpus::get();
    println!(
        "Matrix: {}×{} · {}×{}, {} worker threads\n",
        NUM_ROWS_A, NUM_COLS_A, NUM_COLS_A, NUM_COLS_B, workers
    );

    println!("Evaluating Sequential Implementation...");
    let sequential_ms = bench_ms(NUM_EVAL_RUNS, || {
        matmul_sequential(&a, &b, &mut sequential_result);
    });

    println!("Evaluating Parallel Implementation...");
    let parallel_ms = bench_ms(NUM_EVAL_RUNS, || {
        matmul_parallel_rows(&a, &b, &mut parallel_result, workers);
    });

    if let Some((i, j)) = sequential_result.first_mismatch(&parallel_result) {
        eprintln!(
            "ERROR: Result mismatch between sequential and parallel executions at ({}, {})!",
            i, j
        );
        return ExitCode::FAILURE;
    }

    println!("Average Sequential Execution Duration: {:.2} ms", sequential_ms);
    println!("Average Parallel Execution Duration: {:.2} ms", parallel_ms);
    println!(
        "Parallel execution is {:.2} times faster than sequential execution!",
        sequential_ms / parallel_ms
    );
    ExitCode::SUCCESS
}

/// Run `f` once as a discarded warm-up, then `runs` timed invocations.
/// Returns the mean wall-clock duration in milliseconds.
fn bench_ms<F: FnMut()>(runs: usize, mut f: F) -> f64 {
    f();

    let mut total = 0.0;
    for _ in 0..runs {
        let start = Instant::now();
        f();
        total += start.elapsed().as_secs_f64();
    }
    total * 1000.0 / runs as f64
}
