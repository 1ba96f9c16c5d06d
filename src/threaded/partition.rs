//! Row-range partitioning for the parallel multiplier.

use std::ops::Range;

/// Split the row range `[0, rows)` into `workers` contiguous chunks.
///
/// Every worker gets `rows / workers` rows; the first `rows % workers`
/// workers take one extra, so chunk sizes never differ by more than one and
/// earlier workers absorb the remainder. The returned ranges are contiguous,
/// non-overlapping, and cover every row exactly once.
///
/// A worker count of zero is treated as one. When `rows < workers` the
/// trailing chunks come back empty - callers skip them at dispatch.
pub fn row_chunks(rows: usize, workers: usize) -> Vec<Range<usize>> {
    let workers = workers.max(1);
    let base = rows / workers;
    let extra = rows % workers;

    let mut chunks = Vec::with_capacity(workers);
    let mut start = 0;
    for w in 0..workers {
        let len = base + usize::from(w < extra);
        chunks.push(start..start + len);
        start += len;
    }
    chunks
}
