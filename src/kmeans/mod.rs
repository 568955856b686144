//! Parallel k-means clustering.
//!
//! Points and centers are flat `f32` buffers with a fixed stride (`dim`).
//! Each pass assigns every point to its nearest center on the worker pool,
//! with every worker summing its points into a private [`PartialSums`],
//! then reduces the partial sums and moves the centers to the new means.

pub mod accumulator;
pub mod centers;
pub mod distance;
pub mod lloyd;

pub use accumulator::PartialSums;
pub use centers::Centers;
pub use lloyd::{Clustering, MAX_PASSES, Termination, UNASSIGNED};
