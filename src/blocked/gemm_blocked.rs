//! Cache-blocked scalar GEMM over a stripe of whole output rows.

/// Cache-blocked multiplication for a horizontal stripe of C.
///
/// `stripe` holds complete rows of C starting at `row_start`, so the
/// caller can hand disjoint stripes to different workers. Within the
/// stripe the column and contraction dimensions are walked in
/// `block_size` chunks so that the touched parts of B and C stay in
/// cache while every row of the stripe is processed. Block ranges are
/// clamped, so `n` doesn't need to be a multiple of `block_size`.
///
/// Accumulates into `stripe` (C += A * B); the caller zeroes it first.
///
/// # Arguments
///
/// * `a` - Matrix A (n × n), row-major
/// * `b` - Matrix B (n × n), row-major
/// * `stripe` - Rows `row_start..row_start + stripe.len() / n` of C
/// * `row_start` - Index of the first row of C held in `stripe`
/// * `n` - Dimension of the matrices
/// * `block_size` - Edge length of a cache block (must be > 0)
pub fn matmul_blocked_stripe(
    a: &[f32],
    b: &[f32],
    stripe: &mut [f32],
    row_start: usize,
    n: usize,
    block_size: usize,
) {
    debug_assert!(block_size > 0);
    debug_assert_eq!(stripe.len() % n.max(1), 0);
    let rows = stripe.len() / n.max(1);

    for jj in (0..n).step_by(block_size) {
        let j_end = (jj + block_size).min(n);

        for kk in (0..n).step_by(block_size) {
            let k_end = (kk + block_size).min(n);

            for i in 0..rows {
                let a_row = &a[(row_start + i) * n..(row_start + i + 1) * n];
                let c_block = &mut stripe[i * n + jj..i * n + j_end];
                accumulate_block_row(a_row, b, c_block, kk, k_end, jj, n);
            }
        }
    }
}

// c_block[j] += sum over p in k_start..k_end of a_row[p] * B[p][j_start + j]
// Four contraction steps per pass over the block row, scalar tail after.
fn accumulate_block_row(
    a_row: &[f32],
    b: &[f32],
    c_block: &mut [f32],
    k_start: usize,
    k_end: usize,
    j_start: usize,
    n: usize,
) {
    let width = c_block.len();
    let b_row = |p: usize| row_segment(b, p * n + j_start, width);

    let mut p = k_start;
    while p + 4 <= k_end {
        let (a0, a1, a2, a3) = (a_row[p], a_row[p + 1], a_row[p + 2], a_row[p + 3]);
        let (b0, b1, b2, b3) = (b_row(p), b_row(p + 1), b_row(p + 2), b_row(p + 3));

        for ((((c, &x0), &x1), &x2), &x3) in c_block.iter_mut().zip(b0).zip(b1).zip(b2).zip(b3)
        {
            *c += a0 * x0 + a1 * x1 + a2 * x2 + a3 * x3;
        }
        p += 4;
    }

    for p in p..k_end {
        let a_ip = a_row[p];
        for (c, &x) in c_block.iter_mut().zip(b_row(p)) {
            *c += a_ip * x;
        }
    }
}

#[inline(always)]
fn row_segment(b: &[f32], start: usize, width: usize) -> &[f32] {
    &b[start..start + width]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::naive_ijk::matmul_naive_ijk;

    fn full_blocked(a: &[f32], b: &[f32], n: usize, block_size: usize) -> Vec<f32> {
        let mut c = vec![0.0; n * n];
        matmul_blocked_stripe(a, b, &mut c, 0, n, block_size);
        c
    }

    #[test]
    fn test_blocked_matches_naive_uneven_blocks() {
        // 37 is prime: every block size leaves a ragged edge
        let n = 37;
        let a: Vec<f32> = (0..n * n).map(|i| (i % 10) as f32).collect();
        let b: Vec<f32> = (0..n * n).map(|i| (i % 13) as f32).collect();

        let mut c_naive = vec![0.0; n * n];
        matmul_naive_ijk(&a, &b, &mut c_naive, n);

        for block_size in [1, 3, 4, 5, 8, 16, 36, 37] {
            assert_eq!(
                c_naive,
                full_blocked(&a, &b, n, block_size),
                "block_size {}",
                block_size
            );
        }
    }

    #[test]
    fn test_stripes_cover_disjoint_rows() {
        let n = 10;
        let a: Vec<f32> = (0..n * n).map(|i| (i % 10) as f32).collect();
        let b: Vec<f32> = (0..n * n).map(|i| (i % 3) as f32).collect();

        let mut c_naive = vec![0.0; n * n];
        matmul_naive_ijk(&a, &b, &mut c_naive, n);

        // Stripes of 4, 4 and 2 rows
        let mut c_striped = vec![0.0; n * n];
        for (s, stripe) in c_striped.chunks_mut(4 * n).enumerate() {
            matmul_blocked_stripe(&a, &b, stripe, s * 4, n, 4);
        }

        assert_eq!(c_naive, c_striped);
    }
}
