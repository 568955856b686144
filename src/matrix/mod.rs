//! Basic matrix operations and naive implementations.
//!
//! These provide the correctness baseline and the per-row kernel used by
//! the unblocked multi-threaded path.

pub mod naive_ijk;
pub mod naive_ikj;
