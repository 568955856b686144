//! Running per-cluster sums and counts.

use super::centers::Centers;
use crate::error::{Result, try_zeroed};

/// Per-cluster coordinate sums and point counts.
///
/// Used both as a worker's private accumulator during the assignment
/// pass and as the global total the workers are reduced into. Sums for
/// all clusters share one `k * dim` buffer.
#[derive(Debug, Clone)]
pub struct PartialSums {
    sums: Vec<f32>,
    counts: Vec<usize>,
    dim: usize,
}

impl PartialSums {
    pub fn zeroed(k: usize, dim: usize) -> Result<Self> {
        Ok(Self {
            sums: try_zeroed(k * dim, "cluster sums")?,
            counts: try_zeroed(k, "cluster counts")?,
            dim,
        })
    }

    /// Add one point to cluster `cid`.
    #[inline]
    pub fn add(&mut self, cid: usize, point: &[f32]) {
        let sum = &mut self.sums[cid * self.dim..(cid + 1) * self.dim];
        for (s, &x) in sum.iter_mut().zip(point) {
            *s += x;
        }
        self.counts[cid] += 1;
    }

    /// Add everything in `self` to `total`, then reset `self` to zero.
    pub fn drain_into(&mut self, total: &mut PartialSums) {
        for (t, s) in total.sums.iter_mut().zip(self.sums.iter_mut()) {
            *t += *s;
            *s = 0.0;
        }
        for (t, c) in total.counts.iter_mut().zip(self.counts.iter_mut()) {
            *t += *c;
            *c = 0;
        }
    }

    /// Move every cluster with more than one point to its mean.
    ///
    /// Clusters with zero or one point keep their current center.
    pub fn write_means(&self, centers: &mut Centers) {
        for (cid, &count) in self.counts.iter().enumerate() {
            if count > 1 {
                let sum = &self.sums[cid * self.dim..(cid + 1) * self.dim];
                for (c, &s) in centers.row_mut(cid).iter_mut().zip(sum) {
                    *c = s / count as f32;
                }
            }
        }
    }

    pub fn reset(&mut self) {
        self.sums.fill(0.0);
        self.counts.fill(0);
    }

    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    pub fn sum(&self, cid: usize) -> &[f32] {
        &self.sums[cid * self.dim..(cid + 1) * self.dim]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_resets_worker() {
        let mut worker = PartialSums::zeroed(2, 2).unwrap();
        worker.add(1, &[1.0, 2.0]);
        worker.add(1, &[3.0, 4.0]);
        worker.add(0, &[5.0, 5.0]);

        let mut total = PartialSums::zeroed(2, 2).unwrap();
        total.add(1, &[10.0, 10.0]);
        worker.drain_into(&mut total);

        assert_eq!(total.counts(), &[1, 3]);
        assert_eq!(total.sum(1), &[14.0, 16.0]);
        assert_eq!(worker.counts(), &[0, 0]);
        assert_eq!(worker.sum(0), &[0.0, 0.0]);
        assert_eq!(worker.sum(1), &[0.0, 0.0]);
    }

    #[test]
    fn test_singleton_and_empty_clusters_keep_center() {
        let mut centers = Centers::from_points(&[0.0, 1.0, 2.0], 1, 3).unwrap();
        let mut totals = PartialSums::zeroed(3, 1).unwrap();
        totals.add(0, &[4.0]);
        totals.add(0, &[6.0]);
        totals.add(1, &[9.0]);

        totals.write_means(&mut centers);

        assert_eq!(centers.as_slice(), &[5.0, 1.0, 2.0]);

        totals.reset();
        assert_eq!(totals.counts(), &[0, 0, 0]);
    }
}
