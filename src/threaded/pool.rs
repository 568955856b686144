//! Fork-join worker pool selection.

use crate::error::Result;
use rayon::ThreadPoolBuilder;

/// Run `op` on a worker pool of `num_threads` workers.
///
/// `None` runs `op` directly, so any rayon work inside it lands on the
/// current pool (the global one unless the caller installed another).
/// `Some(t)` builds a dedicated pool for the duration of the call.
pub fn install<OP, R>(num_threads: Option<usize>, op: OP) -> Result<R>
where
    OP: FnOnce() -> R + Send,
    R: Send,
{
    match num_threads {
        None => Ok(op()),
        Some(threads) => {
            let pool = ThreadPoolBuilder::new()
                .num_threads(threads.max(1))
                .thread_name(|i| format!("kernel-worker-{i}"))
                .build()?;
            Ok(pool.install(op))
        }
    }
}
