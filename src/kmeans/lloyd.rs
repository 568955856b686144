//! The assignment / reduction / update loop.

use super::accumulator::PartialSums;
use super::centers::Centers;
use super::distance::nearest_center;
use crate::config::ClusterConfig;
use crate::error::{KernelError, Result, try_zeroed};
use rayon::prelude::*;
use std::time::Instant;

/// Membership value of a point that hasn't been assigned yet.
pub const UNASSIGNED: i32 = -1;

/// Hard cap on assignment passes per call.
pub const MAX_PASSES: usize = 500;

/// Why the iteration stopped. Both states carry complete results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The fraction of points changing cluster fell to the threshold or below.
    Converged,
    /// [`MAX_PASSES`] passes ran without converging.
    Exhausted,
}

/// Result of a clustering run.
#[derive(Debug, Clone)]
pub struct Clustering {
    /// Final cluster centers (`k` × `dim`).
    pub centers: Centers,
    /// Number of assignment passes executed, including the first.
    pub passes: usize,
    pub termination: Termination,
    /// Points that changed cluster in the last pass.
    pub changed: usize,
    /// Points assigned to each cluster in the last pass.
    pub cluster_sizes: Vec<usize>,
}

impl Clustering {
    /// Passes after the initial assignment from [`UNASSIGNED`].
    pub fn refinements(&self) -> usize {
        self.passes.saturating_sub(1)
    }
}

/// Cluster `points` into `k` groups on the current rayon pool.
///
/// Points are split into one contiguous chunk per worker, and each chunk
/// owns a [`PartialSums`] for the whole call. The chunking and the order
/// the partial sums are reduced in depend only on the point count and
/// the pool size, so repeated runs give identical results.
pub(crate) fn run(
    points: &[f32],
    dim: usize,
    k: usize,
    membership: &mut [i32],
    config: &ClusterConfig,
) -> Result<Clustering> {
    assert!(dim > 0, "points need at least one dimension");
    let n = membership.len();
    assert_eq!(
        points.len(),
        n * dim,
        "points: expected {}x{}={} values",
        n,
        dim,
        n * dim
    );
    debug_assert!(k >= 1 && k <= n, "k must be in 1..=n (k={k}, n={n})");

    let started = config.timing.then(Instant::now);

    let mut centers = Centers::from_points(points, dim, k)?;
    membership.fill(UNASSIGNED);

    let workers = rayon::current_num_threads().clamp(1, n.max(1));
    let chunk_len = n.div_ceil(workers).max(1);
    let mut partials = worker_accumulators(n.div_ceil(chunk_len), k, dim)?;
    let mut totals = PartialSums::zeroed(k, dim)?;
    let mut cluster_sizes = try_zeroed(k, "cluster sizes")?;

    let mut passes = 0usize;
    let (termination, changed) = loop {
        passes += 1;

        let changed: usize = points
            .par_chunks(chunk_len * dim)
            .zip(membership.par_chunks_mut(chunk_len))
            .zip(partials.par_iter_mut())
            .map(|((chunk, slots), partial)| assign_chunk(chunk, slots, &centers, partial))
            .sum();

        for partial in partials.iter_mut() {
            partial.drain_into(&mut totals);
        }
        totals.write_means(&mut centers);
        cluster_sizes.copy_from_slice(totals.counts());
        totals.reset();

        let fraction = changed as f32 / n as f32;
        tracing::debug!(pass = passes, changed, fraction, "k-means pass complete");

        if fraction <= config.threshold {
            break (Termination::Converged, changed);
        }
        if passes >= MAX_PASSES {
            break (Termination::Exhausted, changed);
        }
    };

    if let Some(started) = started {
        let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
        tracing::info!(n, k, workers, passes, ?termination, elapsed_ms, "k-means finished");
    }

    Ok(Clustering {
        centers,
        passes,
        termination,
        changed,
        cluster_sizes,
    })
}

fn worker_accumulators(count: usize, k: usize, dim: usize) -> Result<Vec<PartialSums>> {
    let mut partials = Vec::new();
    partials
        .try_reserve_exact(count)
        .map_err(|_| KernelError::OutOfMemory {
            what: "worker accumulators",
            elements: count,
        })?;
    for _ in 0..count {
        partials.push(PartialSums::zeroed(k, dim)?);
    }
    Ok(partials)
}

// Assign every point in the chunk to its nearest center and return how
// many membership slots changed.
fn assign_chunk(
    points: &[f32],
    membership: &mut [i32],
    centers: &Centers,
    partial: &mut PartialSums,
) -> usize {
    let mut changed = 0;
    for (point, slot) in points.chunks_exact(centers.dim()).zip(membership.iter_mut()) {
        let nearest = nearest_center(point, centers);
        let id = nearest as i32;
        if *slot != id {
            changed += 1;
            *slot = id;
        }
        partial.add(nearest, point);
    }
    changed
}
