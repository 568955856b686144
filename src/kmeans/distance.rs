//! Distance helpers for the assignment pass.

use super::centers::Centers;

/// Squared Euclidean distance between two points of equal dimension.
///
/// No square root: only the ordering of distances matters.
#[inline]
pub fn squared_distance(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b)
        .map(|(&x, &y)| {
            let d = x - y;
            d * d
        })
        .sum()
}

/// Index of the center closest to `point`.
///
/// Ties go to the lowest index. `centers` must not be empty.
pub fn nearest_center(point: &[f32], centers: &Centers) -> usize {
    let mut best = 0usize;
    let mut best_distance = squared_distance(point, centers.row(0));
    for (cid, center) in centers.rows().enumerate().skip(1) {
        let distance = squared_distance(point, center);
        if distance < best_distance {
            best_distance = distance;
            best = cid;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_squared_distance() {
        assert_eq!(squared_distance(&[0.0, 0.0], &[3.0, 4.0]), 25.0);
        assert_eq!(squared_distance(&[1.5], &[1.5]), 0.0);
    }

    #[test]
    fn test_nearest_center() {
        let centers = Centers::from_points(&[0.0, 0.0, 10.0, 10.0, -5.0, 0.0], 2, 3).unwrap();
        assert_eq!(nearest_center(&[9.0, 8.0], &centers), 1);
        assert_eq!(nearest_center(&[-4.0, 1.0], &centers), 2);
        assert_eq!(nearest_center(&[0.5, 0.5], &centers), 0);
    }

    #[test]
    fn test_ties_keep_lowest_index() {
        let centers = Centers::from_points(&[-1.0, 1.0, 1.0], 1, 3).unwrap();
        // Equidistant from all three (the last two are identical)
        assert_eq!(nearest_center(&[0.0], &centers), 0);
        assert_eq!(nearest_center(&[1.0], &centers), 1);
    }
}
