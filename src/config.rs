//! Per-call configuration for the kernels.
//!
//! Everything that used to be process-wide (thread count, debug timing)
//! is passed in explicitly with each call.

/// Default edge length of a cache block, in elements.
pub const DEFAULT_BLOCK_SIZE: usize = 64;

/// Below this dimension the blocked path isn't worth its loop overhead.
pub const DEFAULT_BLOCKING_THRESHOLD: usize = 256;

/// Default fraction of points allowed to change cluster before we call it converged.
pub const DEFAULT_THRESHOLD: f32 = 0.001;

/// Which matrix-multiply code path to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Naive below `blocking_threshold`, blocked at or above it.
    #[default]
    Auto,
    /// Row-parallel i-k-j loops, no blocking.
    Naive,
    /// Cache-blocked stripes.
    Blocked,
}

/// Settings for [`crate::multiply_with`].
#[derive(Debug, Clone)]
pub struct MatmulConfig {
    /// Worker count. `None` runs on the current rayon pool.
    pub num_threads: Option<usize>,
    pub strategy: Strategy,
    /// Edge length of a cache block. Clamped to `[1, n]`.
    pub block_size: usize,
    pub blocking_threshold: usize,
    /// Emit elapsed time as a tracing event.
    pub timing: bool,
}

impl Default for MatmulConfig {
    fn default() -> Self {
        Self {
            num_threads: None,
            strategy: Strategy::Auto,
            block_size: DEFAULT_BLOCK_SIZE,
            blocking_threshold: DEFAULT_BLOCKING_THRESHOLD,
            timing: false,
        }
    }
}

impl MatmulConfig {
    /// Whether a multiply of dimension `n` takes the blocked path.
    pub fn uses_blocking(&self, n: usize) -> bool {
        match self.strategy {
            Strategy::Auto => n >= self.blocking_threshold,
            Strategy::Naive => false,
            Strategy::Blocked => true,
        }
    }

    /// Block size actually used for dimension `n`.
    pub fn effective_block_size(&self, n: usize) -> usize {
        self.block_size.clamp(1, n.max(1))
    }
}

/// Settings for [`crate::cluster_with`].
#[derive(Debug, Clone)]
pub struct ClusterConfig {
    /// Stop once the fraction of points changing cluster in a pass is at or below this.
    pub threshold: f32,
    /// Worker count. `None` runs on the current rayon pool.
    pub num_threads: Option<usize>,
    /// Emit elapsed time and pass count as a tracing event.
    pub timing: bool,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            num_threads: None,
            timing: false,
        }
    }
}

impl ClusterConfig {
    pub fn with_threshold(threshold: f32) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_strategy_switches_at_threshold() {
        let config = MatmulConfig::default();
        assert!(!config.uses_blocking(16));
        assert!(!config.uses_blocking(255));
        assert!(config.uses_blocking(256));
        assert!(config.uses_blocking(512));
    }

    #[test]
    fn test_forced_strategies() {
        let naive = MatmulConfig {
            strategy: Strategy::Naive,
            ..MatmulConfig::default()
        };
        let blocked = MatmulConfig {
            strategy: Strategy::Blocked,
            ..MatmulConfig::default()
        };
        assert!(!naive.uses_blocking(4096));
        assert!(blocked.uses_blocking(3));
    }

    #[test]
    fn test_block_size_clamped() {
        let config = MatmulConfig::default();
        assert_eq!(config.effective_block_size(16), 16);
        assert_eq!(config.effective_block_size(300), 64);

        let zero = MatmulConfig {
            block_size: 0,
            ..MatmulConfig::default()
        };
        assert_eq!(zero.effective_block_size(10), 1);
    }
}
