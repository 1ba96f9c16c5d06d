//! Multi-threaded row-partitioned matrix multiplication.

use std::mem;
use std::ops::Range;
use std::thread;

use crate::matrix::dense::Matrix;
use crate::threaded::partition::row_chunks;

/// Compute output rows `rows` of the product A · B into `c_rows`.
///
/// `c_rows` holds exactly those rows of C, in order (`rows.len() * b.cols()`
/// elements). Each cell is accumulated in a local variable and written once,
/// instead of writing through the output on every inner step like the
/// sequential baseline does.
///
/// This is the whole per-worker job: a pure function over the shared inputs
/// and one row range, with no knowledge of how it gets scheduled.
pub fn multiply_row_chunk(a: &Matrix, b: &Matrix, c_rows: &mut [i32], rows: Range<usize>) {
    let (k, n) = (a.cols(), b.cols());
    debug_assert_eq!(c_rows.len(), rows.len() * n);

    let av = a.as_slice();
    let bv = b.as_slice();

    for (offset, i) in rows.enumerate() {
        for j in 0..n {
            let mut acc = 0;
            for p in 0..k {
                acc += av[i * k + p] * bv[p * n + j];
            }
            c_rows[offset * n + j] = acc;
        }
    }
}

/// Row-parallel matrix multiplication across `num_threads` workers.
///
/// Rows of C are split into contiguous chunks with
/// [`row_chunks`](crate::threaded::partition::row_chunks), one OS thread per
/// non-empty chunk. A and B are shared read-only; C's backing buffer is
/// split into disjoint per-chunk slices up front, so the partition itself is
/// the synchronization - no locks, no atomics. Returns only after every
/// worker has finished.
///
/// A single-chunk partition skips the threads and runs on the calling
/// thread. If the platform cannot start a worker thread the spawn panics,
/// and the panic surfaces at the scope's join point rather than leaving
/// rows of C uncomputed.
///
/// Shape agreement is a precondition, as for
/// [`matmul_sequential`](crate::matrix::sequential::matmul_sequential); use
/// [`multiply_parallel`](crate::multiply_parallel) for validated input.
pub fn matmul_parallel_rows(a: &Matrix, b: &Matrix, c: &mut Matrix, num_threads: usize) {
    debug_assert_eq!(a.cols(), b.rows());
    debug_assert_eq!((c.rows(), c.cols()), (a.rows(), b.cols()));

    let rows = a.rows();
    let n = b.cols();
    let chunks = row_chunks(rows, num_threads);

    if chunks.len() == 1 {
        multiply_row_chunk(a, b, c.as_mut_slice(), 0..rows);
        return;
    }

    let mut rest = c.as_mut_slice();
    thread::scope(|s| {
        for range in chunks {
            if range.is_empty() {
                continue;
            }
            let (head, tail) = mem::take(&mut rest).split_at_mut(range.len() * n);
            rest = tail;
            s.spawn(move || multiply_row_chunk(a, b, head, range));
        }
    });
}
