//! Multi-threaded row-partitioned multiplication.
//!
//! [`partition`] computes the per-worker row ranges as a pure function, so
//! the chunking arithmetic is testable without spawning anything;
//! [`matmul_mt`] executes the chunks on scoped OS threads.

pub mod matmul_mt;
pub mod partition;
