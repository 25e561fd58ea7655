//! Builder pattern implementation for creating ProgressTracker instances.
//!
//! # Examples
//!
//! ## Basic Builder Usage
//!
//! ```rust
//! use linebar::tracker::TrackerBuilder;
//!
//! let mut tracker = TrackerBuilder::new("pulling manifest", 4096)
//!     .initial(1024)
//!     .label_width(20)
//!     .build();
//! tracker.set(2048);
//! assert_eq!(tracker.percent(), 50.0);
//! ```
//!
//! ## Frozen Time
//!
//! ```rust
//! use linebar::clock::ManualClock;
//! use linebar::tracker::TrackerBuilder;
//! use std::time::Duration;
//!
//! let clock = ManualClock::new();
//! let mut tracker = TrackerBuilder::new("copy", 100)
//!     .clock(clock.clone())
//!     .build();
//!
//! clock.advance(Duration::from_secs(4));
//! tracker.set(40);
//! assert_eq!(tracker.rate(), 10.0);
//! ```

use super::{config::TrackerConfig, tracker::ProgressTracker};
use crate::clock::{Clock, SystemClock};
use crate::render::RenderOptions;

use std::time::Duration;

/// A builder used to create a [`ProgressTracker`].
#[derive(Debug, Clone)]
pub struct TrackerBuilder<C = SystemClock> {
    label: String,
    max: u64,
    initial: u64,
    config: TrackerConfig,
    clock: C,
}

impl TrackerBuilder {
    /// Creates a builder for a tracker counting up to `max`, with the default
    /// options and the wall clock.
    pub fn new(label: impl Into<String>, max: u64) -> Self {
        TrackerBuilder {
            label: label.into(),
            max,
            initial: 0,
            config: TrackerConfig::default(),
            clock: SystemClock,
        }
    }
}

impl<C: Clock> TrackerBuilder<C> {
    /// Set the value the tracker starts from, e.g. the size already present
    /// when resuming a transfer.
    pub fn initial(mut self, initial: u64) -> Self {
        self.initial = initial;
        self
    }

    /// Pad or truncate the label to `width` columns. A zero width keeps the
    /// label's natural width.
    pub fn label_width(mut self, width: usize) -> Self {
        self.config.label_width = Some(width);
        self
    }

    /// Set the number of samples kept for rate estimation.
    pub fn sample_capacity(mut self, capacity: usize) -> Self {
        self.config.sample_capacity = capacity;
        self
    }

    /// Set the minimum spacing between two samples.
    pub fn sample_interval(mut self, interval: Duration) -> Self {
        self.config.sample_interval = interval;
        self
    }

    /// Set the line rendering options.
    pub fn style(mut self, style: RenderOptions) -> Self {
        self.config.style = style;
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: TrackerConfig) -> Self {
        self.config = config;
        self
    }

    /// Read time from `clock` instead of the current one.
    pub fn clock<D: Clock>(self, clock: D) -> TrackerBuilder<D> {
        TrackerBuilder {
            label: self.label,
            max: self.max,
            initial: self.initial,
            config: self.config,
            clock,
        }
    }

    /// Create the [`ProgressTracker`] with the specified options.
    ///
    /// The tracker's start time is read from the clock here.
    pub fn build(self) -> ProgressTracker<C> {
        ProgressTracker::with_config(self.label, self.max, self.initial, self.config, self.clock)
    }
}
