//! Sequential vs. row-parallel integer matrix multiplication.
//!
//! I wrote this to measure how far plain row partitioning gets you before
//! any of the fancy stuff (cache blocking, SIMD) enters the picture. Turns
//! out: pretty far - splitting the output rows across one thread per core
//! needs no locks at all, because each worker owns a disjoint slice of the
//! result.
//!
//! ## Usage
//!
//! ```
//! use parmul::{multiply, Matrix};
//!
//! let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]);
//! let b = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]]);
//! let mut c = Matrix::zeros(2, 2);
//!
//! multiply(&a, &b, &mut c)?;
//! assert_eq!(c[(0, 0)], 19);
//! # Ok::<(), parmul::MatmulError>(())
//! ```
//!
//! For anything bigger than a toy, use the multi-threaded version:
//!
//! ```
//! use parmul::{multiply_parallel, Matrix};
//!
//! let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]);
//! let b = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]]);
//! let mut c = Matrix::zeros(2, 2);
//!
//! multiply_parallel(&a, &b, &mut c, 4)?;
//! assert_eq!(c[(1, 1)], 50);
//! # Ok::<(), parmul::MatmulError>(())
//! ```
//!
//! ## What's inside
//!
//! - A naive i-j-k sequential baseline (the correctness oracle)
//! - A row-partitioned parallel version on scoped OS threads
//! - A benchmark binary that times both and verifies they agree
//!
//! Elements and accumulators are `i32`: with entries bounded by `v` and
//! inner dimension `k`, the largest cell is `k·v²`, which must stay within
//! `i32::MAX`. The benchmark's defaults (`v = 100`, `k = 1000`) come in
//! three orders of magnitude under that.

pub mod error;
pub mod matrix;
pub mod threaded;

pub use error::MatmulError;
pub use matrix::dense::Matrix;
pub use matrix::sequential::matmul_sequential;
pub use threaded::matmul_mt::{matmul_parallel_rows, multiply_row_chunk};
pub use threaded::partition::row_chunks;

fn check_shapes(a: &Matrix, b: &Matrix, c: &Matrix) -> Result<(), MatmulError> {
    if a.cols() != b.rows() {
        return Err(MatmulError::InnerDimension {
            a_rows: a.rows(),
            a_cols: a.cols(),
            b_rows: b.rows(),
            b_cols: b.cols(),
        });
    }
    if c.rows() != a.rows() || c.cols() != b.cols() {
        return Err(MatmulError::OutputShape {
            c_rows: c.rows(),
            c_cols: c.cols(),
            expected_rows: a.rows(),
            expected_cols: b.cols(),
        });
    }
    Ok(())
}

/// Matrix multiply: C = A · B, single-threaded.
///
/// Matrices are row-major: A is m×k, B is k×n, C is m×n. C is overwritten,
/// so calling this repeatedly with the same inputs gives the same result.
///
/// # Errors
///
/// Rejects inputs whose shapes cannot be multiplied - see [`MatmulError`].
pub fn multiply(a: &Matrix, b: &Matrix, c: &mut Matrix) -> Result<(), MatmulError> {
    check_shapes(a, b, c)?;
    matmul_sequential(a, b, c);
    Ok(())
}

/// Same as [`multiply`] but splits the rows of C across `num_threads`
/// worker threads.
///
/// Produces the identical result cell for cell. A thread count of zero is
/// coerced to one; counts beyond the row count just leave the surplus
/// workers with nothing to do.
///
/// # Errors
///
/// Rejects inputs whose shapes cannot be multiplied - see [`MatmulError`].
pub fn multiply_parallel(
    a: &Matrix,
    b: &Matrix,
    c: &mut Matrix,
    num_threads: usize,
) -> Result<(), MatmulError> {
    check_shapes(a, b, c)?;
    matmul_parallel_rows(a, b, c, num_threads);
    Ok(())
}
