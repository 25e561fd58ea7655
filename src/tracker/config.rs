//! Configuration structures and defaults for progress trackers.
//!
//! # Examples
//!
//! ```rust
//! use linebar::tracker::TrackerConfig;
//! use std::time::Duration;
//!
//! let config = TrackerConfig::default();
//! assert_eq!(config.sample_capacity, 10);
//! assert_eq!(config.sample_interval, Duration::from_secs(1));
//! assert_eq!(config.label_width, None);
//! ```

use crate::render::RenderOptions;
use std::time::Duration;

/// Number of samples retained for rate estimation.
pub const DEFAULT_SAMPLE_CAPACITY: usize = 10;

/// Minimum spacing between two recorded samples.
pub const DEFAULT_SAMPLE_INTERVAL: Duration = Duration::from_secs(1);

/// Configuration structure for a tracker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Column width the label is padded or truncated to. `None` keeps the
    /// label's natural width.
    pub label_width: Option<usize>,
    /// Maximum number of samples kept in the sliding window.
    pub sample_capacity: usize,
    /// A new sample is only taken once this much time has passed since the
    /// previous one.
    pub sample_interval: Duration,
    /// Line rendering options.
    pub style: RenderOptions,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            label_width: None,
            sample_capacity: DEFAULT_SAMPLE_CAPACITY,
            sample_interval: DEFAULT_SAMPLE_INTERVAL,
            style: RenderOptions::default(),
        }
    }
}
