//! Owned storage for cluster centers.

use crate::error::{Result, try_zeroed};

/// K cluster centers of dimension D in one contiguous row-major buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Centers {
    data: Vec<f32>,
    dim: usize,
}

impl Centers {
    /// Seed `k` centers from the first `k` points of a flat point buffer.
    pub fn from_points(points: &[f32], dim: usize, k: usize) -> Result<Self> {
        assert!(dim > 0, "centers need at least one dimension");
        let mut data = try_zeroed(k * dim, "cluster centers")?;
        data.copy_from_slice(&points[..k * dim]);
        Ok(Self { data, dim })
    }

    /// Number of centers.
    pub fn len(&self) -> usize {
        self.data.len() / self.dim
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn row(&self, cid: usize) -> &[f32] {
        &self.data[cid * self.dim..(cid + 1) * self.dim]
    }

    pub fn row_mut(&mut self, cid: usize) -> &mut [f32] {
        &mut self.data[cid * self.dim..(cid + 1) * self.dim]
    }

    pub fn rows(&self) -> std::slice::ChunksExact<'_, f32> {
        self.data.chunks_exact(self.dim)
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Hand the flat `k * dim` buffer to the caller.
    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_from_first_points() {
        let points = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let centers = Centers::from_points(&points, 2, 3).unwrap();

        assert_eq!(centers.len(), 3);
        assert_eq!(centers.dim(), 2);
        assert_eq!(centers.row(1), &[3.0, 4.0]);
        assert_eq!(centers.rows().count(), 3);
        assert_eq!(centers.into_vec(), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }
}
