//! Multi-threaded unblocked GEMM, one output row per task.

use crate::matrix::naive_ikj::matmul_row_ikj;
use rayon::prelude::*;

/// Row-parallel matrix multiplication: C += A * B.
///
/// Every row of C is computed by exactly one task, so workers never
/// write the same element and the accumulation needs no atomics.
/// Rows are grouped so that at most `workers` tasks run at once.
pub fn matmul_rows_mt(a: &[f32], b: &[f32], c: &mut [f32], n: usize, workers: usize) {
    let rows_per_worker = n.div_ceil(workers.max(1));

    c.par_chunks_mut(n)
        .with_min_len(rows_per_worker)
        .enumerate()
        .for_each(|(i, c_row)| matmul_row_ikj(&a[i * n..(i + 1) * n], b, c_row, n));
}

/// Single-threaded counterpart of [`matmul_rows_mt`].
pub fn matmul_rows(a: &[f32], b: &[f32], c: &mut [f32], n: usize) {
    c.chunks_mut(n)
        .enumerate()
        .for_each(|(i, c_row)| matmul_row_ikj(&a[i * n..(i + 1) * n], b, c_row, n));
}
