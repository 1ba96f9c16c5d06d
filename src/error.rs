//! Error type for the validated multiplication entry points.

use thiserror::Error;

/// Shape errors reported by [`multiply`](crate::multiply) and
/// [`multiply_parallel`](crate::multiply_parallel).
///
/// The low-level kernels treat shape agreement as a precondition; only the
/// public entry points in the crate root produce these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatmulError {
    /// A's column count does not match B's row count.
    #[error("inner dimensions disagree: A is {a_rows}×{a_cols}, B is {b_rows}×{b_cols}")]
    InnerDimension {
        a_rows: usize,
        a_cols: usize,
        b_rows: usize,
        b_cols: usize,
    },

    /// The output matrix is not sized `rowsA × colsB`.
    #[error("output is {c_rows}×{c_cols}, expected {expected_rows}×{expected_cols}")]
    OutputShape {
        c_rows: usize,
        c_cols: usize,
        expected_rows: usize,
        expected_cols: usize,
    },
}
