//! Progress tracker module: state, sampling, configuration and builder.
//!
//! # Overview
//!
//! - `tracker` - The [`ProgressTracker`] and its derived estimators
//! - `sample` - The throttled sliding window of samples
//! - `builder` - [`TrackerBuilder`] for configuring trackers
//! - `config` - Configuration structure and defaults
//!
//! # Examples
//!
//! ```rust
//! use linebar::tracker::{ProgressTracker, TrackerState};
//!
//! let mut tracker = ProgressTracker::new("download", 1000, 0);
//! tracker.set(500);
//! assert_eq!(tracker.percent(), 50.0);
//! assert_eq!(tracker.state(), TrackerState::Running);
//!
//! tracker.set(5000);
//! assert_eq!(tracker.current(), 1000);
//! assert_eq!(tracker.state(), TrackerState::Completed);
//! ```

pub mod builder;
pub mod config;
pub mod sample;
#[allow(clippy::module_inception)]
pub mod tracker;

pub use builder::TrackerBuilder;
pub use config::{TrackerConfig, DEFAULT_SAMPLE_CAPACITY, DEFAULT_SAMPLE_INTERVAL};
pub use sample::{Sample, SampleWindow};
pub use tracker::{ProgressTracker, TrackerState};
