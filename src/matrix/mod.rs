//! Matrix storage and the sequential baseline.
//!
//! [`dense::Matrix`] is the shared data type; [`sequential::matmul_sequential`]
//! is the single-threaded reference the parallel implementation is verified
//! against.

pub mod dense;
pub mod sequential;
