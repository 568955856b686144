//! Cache-blocked GEMM implementations.
//!
//! These functions break the matrix multiplication into blocks that fit in
//! L1/L2 cache and run an unrolled scalar multiply-accumulate over each
//! block. They work on stripes of whole output rows so that the threaded
//! drivers can give every worker exclusive ownership of its rows.
//!
//! Available implementations:
//! - `gemm_blocked`: square blocks, 4-way unrolled contraction

pub mod gemm_blocked;
