/// One output row of a square product in i-k-j loop order.
///
/// With the k loop outside the j loop, the innermost loop walks both the
/// row of B and the row of C sequentially (stride 1). The row-parallel
/// path hands each worker whole rows of C, so this is all a worker runs.
///
/// # Arguments
///
/// * `a_row` - Row i of A (`n` values)
/// * `b` - Matrix B (n × n), row-major
/// * `c_row` - Row i of C (`n` values), accumulated into
/// * `n` - Dimension of the matrices
pub fn matmul_row_ikj(a_row: &[f32], b: &[f32], c_row: &mut [f32], n: usize) {
    for (p, &a_ip) in a_row.iter().enumerate().take(n) {
        let b_row = &b[p * n..(p + 1) * n];
        for (c, &b_pj) in c_row.iter_mut().zip(b_row) {
            *c += a_ip * b_pj;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::naive_ijk::matmul_naive_ijk;

    #[test]
    fn test_rows_match_naive() {
        let n = 7;
        let a: Vec<f32> = (0..n * n).map(|i| (i % 10) as f32).collect();
        let b: Vec<f32> = (0..n * n).map(|i| (i % 7) as f32).collect();

        let mut c_naive = vec![0.0; n * n];
        matmul_naive_ijk(&a, &b, &mut c_naive, n);

        let mut c_rows = vec![0.0; n * n];
        for (i, c_row) in c_rows.chunks_mut(n).enumerate() {
            matmul_row_ikj(&a[i * n..(i + 1) * n], &b, c_row, n);
        }

        assert_eq!(c_naive, c_rows);
    }
}
