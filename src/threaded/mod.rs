//! Multi-threaded GEMM drivers.
//!
//! These wrap the row and blocked kernels with parallel execution across
//! disjoint row stripes of C. Worker count adapts to matrix size - small
//! matrices use fewer workers to avoid overhead.
//!
//! Available implementations:
//! - `gemm_rows_mt`: one row per task, i-k-j order
//! - `gemm_blocked_mt`: stripes of `block_size` rows, cache-blocked
//! - `pool`: dedicated worker pools for calls that ask for a thread count

pub mod gemm_blocked_mt;
pub mod gemm_rows_mt;
pub mod pool;

use crate::config::MatmulConfig;
use gemm_blocked_mt::{matmul_blocked, matmul_blocked_mt};
use gemm_rows_mt::{matmul_rows, matmul_rows_mt};
use std::time::Instant;

/// Zero `c` and compute `A * B` into it on the current rayon pool.
///
/// Picks the naive or blocked path from `config`, and runs sequentially
/// when the problem is too small to be worth forking.
pub(crate) fn multiply_on_current_pool(
    a: &[f32],
    b: &[f32],
    c: &mut [f32],
    n: usize,
    config: &MatmulConfig,
) {
    if n == 0 {
        return;
    }

    let started = config.timing.then(Instant::now);
    c.fill(0.0);

    let workers = choose_thread_count(n, rayon::current_num_threads());
    let blocked = config.uses_blocking(n);
    let block_size = config.effective_block_size(n);
    tracing::debug!(n, workers, blocked, block_size, "matmul dispatch");

    match (blocked, workers) {
        (true, 1) => matmul_blocked(a, b, c, n, block_size),
        (true, _) => matmul_blocked_mt(a, b, c, n, block_size, workers),
        (false, 1) => matmul_rows(a, b, c, n),
        (false, _) => matmul_rows_mt(a, b, c, n, workers),
    }

    if let Some(started) = started {
        let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
        tracing::info!(n, workers, blocked, elapsed_ms, "matmul finished");
    }
}

/// Number of workers worth using for an `n × n` product.
///
/// - < 100M FLOPs: 1 worker
/// - < 300M FLOPs: 2 workers
/// - Otherwise: up to `max_threads`
///
/// Never more than one worker per 64 rows.
pub fn choose_thread_count(n: usize, max_threads: usize) -> usize {
    let flops = 2.0 * (n as f64).powi(3);

    const SINGLE_THREAD_THRESHOLD: f64 = 100_000_000.0;
    const TWO_THREAD_THRESHOLD: f64 = 300_000_000.0;

    let optimal_threads = if flops < SINGLE_THREAD_THRESHOLD {
        1
    } else if flops < TWO_THREAD_THRESHOLD {
        2
    } else {
        max_threads
    };

    let threads_by_rows = (n / 64).max(1);

    optimal_threads
        .min(threads_by_rows)
        .min(max_threads)
        .max(1)
}
