//! Parallel numeric kernels: cache-blocked matrix multiplication and
//! k-means clustering.
//!
//! Both kernels are plain functions over flat buffers that fork work out
//! to a rayon pool and join before returning. Writes are always split so
//! that no two workers touch the same memory: whole output rows for the
//! matmul, private accumulators and disjoint membership slots for k-means.
//!
//! ## Usage
//!
//! ```
//! use parkernels::multiply;
//!
//! let n = 128;
//! let a = vec![1.0f32; n * n];
//! let b = vec![1.0f32; n * n];
//! let mut c = vec![0.0f32; n * n];
//!
//! multiply(&a, &b, &mut c, n);
//! assert_eq!(c[0], 128.0);
//! ```
//!
//! Clustering writes one cluster index per point and returns the centers:
//!
//! ```
//! use parkernels::cluster;
//!
//! // Six 2-D points, two obvious groups
//! let points = [0.0, 0.0, 10.0, 10.0, 0.5, 0.0, 10.0, 9.5, 0.0, 0.5, 9.5, 10.0];
//! let mut membership = vec![0i32; 6];
//!
//! let centers = cluster(&points, 2, 2, 0.0, &mut membership).unwrap();
//!
//! assert_eq!(membership, vec![0, 1, 0, 1, 0, 1]);
//! assert_eq!(centers.len(), 2);
//! ```
//!
//! ## What's inside
//!
//! - Row-parallel i-k-j multiply for small matrices
//! - Cache-blocked, 4-way unrolled multiply for large ones
//! - Adaptive worker count (scales down for small matrices)
//! - K-means with per-worker partial sums, capped at 500 passes

pub mod blocked;
pub mod config;
pub mod error;
pub mod kmeans;
pub mod matrix;
pub mod threaded;

pub use config::{ClusterConfig, MatmulConfig, Strategy};
pub use error::{KernelError, Result};
pub use kmeans::{Centers, Clustering, MAX_PASSES, Termination, UNASSIGNED};
pub use matrix::naive_ijk::matmul_naive_ijk;

/// Square matrix multiply: C = A * B
///
/// Matrices are `n × n`, row-major. `c` is zeroed first, so it doesn't
/// need to be cleared by the caller. Runs on the current rayon pool with
/// the default [`MatmulConfig`]; `n = 0` does nothing.
///
/// # Panics
///
/// Panics if the slice sizes don't match `n`.
pub fn multiply(a: &[f32], b: &[f32], c: &mut [f32], n: usize) {
    check_matmul_lengths(a, b, c, n);
    threaded::multiply_on_current_pool(a, b, c, n, &MatmulConfig::default());
}

/// Same as [`multiply`] but with explicit settings.
///
/// With `num_threads: Some(t)` the work runs on a dedicated pool of `t`
/// workers, which is the only way this can fail.
///
/// # Panics
///
/// Panics if the slice sizes don't match `n`.
pub fn multiply_with(
    a: &[f32],
    b: &[f32],
    c: &mut [f32],
    n: usize,
    config: &MatmulConfig,
) -> Result<()> {
    check_matmul_lengths(a, b, c, n);
    threaded::pool::install(config.num_threads, || {
        threaded::multiply_on_current_pool(a, b, c, n, config)
    })
}

fn check_matmul_lengths(a: &[f32], b: &[f32], c: &[f32], n: usize) {
    assert_eq!(a.len(), n * n, "A: expected {}x{}={} elements", n, n, n * n);
    assert_eq!(b.len(), n * n, "B: expected {}x{}={} elements", n, n, n * n);
    assert_eq!(c.len(), n * n, "C: expected {}x{}={} elements", n, n, n * n);
}

/// Cluster `membership.len()` points of dimension `dim` into `k` groups.
///
/// `points` is flat, point `i` at `points[i * dim..(i + 1) * dim]`. The
/// first `k` points seed the centers. Iterates until the fraction of
/// points changing cluster in a pass is at or below `threshold`, or
/// [`MAX_PASSES`] passes have run. Each point's cluster index is written
/// to `membership`.
///
/// Points are split into one chunk per worker of the current pool, so
/// results are bitwise reproducible for a given pool size; on pools of
/// different sizes the centers may differ in the last bits.
///
/// The caller must ensure `1 <= k <= n`.
///
/// # Errors
///
/// [`KernelError::OutOfMemory`] if a scratch buffer can't be allocated.
///
/// # Panics
///
/// Panics if `dim` is zero or `points.len() != membership.len() * dim`.
pub fn cluster(
    points: &[f32],
    dim: usize,
    k: usize,
    threshold: f32,
    membership: &mut [i32],
) -> Result<Centers> {
    let config = ClusterConfig::with_threshold(threshold);
    kmeans::lloyd::run(points, dim, k, membership, &config).map(|run| run.centers)
}

/// Same as [`cluster`] but with explicit settings, returning the full
/// [`Clustering`] report (pass count, termination, cluster sizes).
pub fn cluster_with(
    points: &[f32],
    dim: usize,
    k: usize,
    membership: &mut [i32],
    config: &ClusterConfig,
) -> Result<Clustering> {
    threaded::pool::install(config.num_threads, || {
        kmeans::lloyd::run(points, dim, k, membership, config)
    })?
}
