//! Multi-threaded cache-blocked GEMM.

use crate::blocked::gemm_blocked::matmul_blocked_stripe;
use rayon::prelude::*;

/// Multi-threaded blocked matrix multiplication: C += A * B.
///
/// C is cut into stripes of `block_size` whole rows and the stripes are
/// spread over the current pool. Each stripe is owned by one task for
/// the whole call; the last stripe may be shorter. Stripes are grouped
/// so that at most `workers` tasks run at once.
pub fn matmul_blocked_mt(
    a: &[f32],
    b: &[f32],
    c: &mut [f32],
    n: usize,
    block_size: usize,
    workers: usize,
) {
    let stripes_per_worker = n.div_ceil(block_size).div_ceil(workers.max(1));

    c.par_chunks_mut(block_size * n)
        .with_min_len(stripes_per_worker)
        .enumerate()
        .for_each(|(s, stripe)| {
            matmul_blocked_stripe(a, b, stripe, s * block_size, n, block_size)
        });
}

/// Single-threaded counterpart of [`matmul_blocked_mt`].
pub fn matmul_blocked(a: &[f32], b: &[f32], c: &mut [f32], n: usize, block_size: usize) {
    c.chunks_mut(block_size * n)
        .enumerate()
        .for_each(|(s, stripe)| {
            matmul_blocked_stripe(a, b, stripe, s * block_size, n, block_size)
        });
}
