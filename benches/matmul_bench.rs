//! Criterion comparison of the sequential and row-parallel multipliers.
//!
//! ```bash
//! cargo bench --bench matmul_bench
//!
//! # Just one implementation
//! cargo bench --bench matmul_bench -- sequential
//! ```

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use parmul::{Matrix, matmul_parallel_rows, matmul_sequential};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn bench_matmul(c: &mut Criterion) {
    let workers = num_cpus::get();
    let mut group = c.benchmark_group("matmul");

    for size in [64, 128, 256, 512] {
        let mut rng = StdRng::seed_from_u64(42);
        let a = Matrix::random(size, size, &mut rng);
        let b = Matrix::random(size, size, &mut rng);
        let mut out = Matrix::zeros(size, size);

        // 2·m·n·k integer ops per multiply.
        group.throughput(Throughput::Elements((2 * size * size * size) as u64));

        group.bench_with_input(BenchmarkId::new("sequential", size), &size, |bench, _| {
            bench.iter(|| matmul_sequential(black_box(&a), black_box(&b), &mut out));
        });
        group.bench_with_input(BenchmarkId::new("parallel", size), &size, |bench, _| {
            bench.iter(|| matmul_parallel_rows(black_box(&a), black_box(&b), &mut out, workers));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_matmul);
criterion_main!(benches);
