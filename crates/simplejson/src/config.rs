//! Reclaimer configuration
//!
//! Configuration specifies limits only; the reclaimer in [`crate::reclaim`]
//! applies them.

/// Number of released nodes the reclaimer buffers before freeing a batch.
pub const DEFAULT_THRESHOLD: usize = 16;

/// Per-thread reclaimer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReclaimConfig {
    /// A batch is freed once more than this many nodes are pending
    pub threshold: usize,

    /// When false, released nodes are freed immediately
    pub enabled: bool,
}

impl Default for ReclaimConfig {
    fn default() -> Self {
        ReclaimConfig {
            threshold: DEFAULT_THRESHOLD,
            enabled: true,
        }
    }
}

impl ReclaimConfig {
    /// Create a new configuration with the default threshold
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration that frees every node as soon as it is released
    pub fn disabled() -> Self {
        ReclaimConfig {
            enabled: false,
            ..Self::default()
        }
    }

    /// Set the batch threshold (builder pattern)
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }
}
