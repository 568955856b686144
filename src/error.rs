//! Error type shared by both kernels.

use thiserror::Error;

/// Failures a kernel call can report back to the caller.
///
/// Malformed dimensions are not in here: slice-length mismatches are
/// programmer errors and panic, the same way [`crate::multiply`] does.
#[derive(Debug, Error)]
pub enum KernelError {
    /// A scratch buffer could not be allocated.
    #[error("out of memory allocating {what} ({elements} elements)")]
    OutOfMemory { what: &'static str, elements: usize },
    /// A dedicated worker pool could not be started.
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Convenient alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, KernelError>;

/// Allocate `len` zeroed values, reporting allocation failure instead of aborting.
pub(crate) fn try_zeroed<T: Clone + Default>(len: usize, what: &'static str) -> Result<Vec<T>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| KernelError::OutOfMemory { what, elements: len })?;
    buf.resize(len, T::default());
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_zeroed() {
        let buf: Vec<f32> = try_zeroed(17, "test buffer").unwrap();
        assert_eq!(buf.len(), 17);
        assert!(buf.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_try_zeroed_reports_oom() {
        let err = try_zeroed::<u64>(usize::MAX / 4, "huge buffer").unwrap_err();
        assert!(matches!(
            err,
            KernelError::OutOfMemory { what: "huge buffer", .. }
        ));
        assert!(err.to_string().contains("huge buffer"));
    }
}
