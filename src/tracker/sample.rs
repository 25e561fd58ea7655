//! Bounded, throttled history of progress samples.

use std::collections::VecDeque;
use std::time::{Duration, Instant};
use tracing::trace;

/// A timestamped progress observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    /// When the value was observed.
    pub at: Instant,
    /// The (clamped) value observed.
    pub value: u64,
}

/// Sliding window of at most `capacity` samples, taken at most once per
/// `interval`.
///
/// Samples are kept in insertion order and the oldest one is evicted once the
/// window is full.
#[derive(Debug, Clone)]
pub struct SampleWindow {
    samples: VecDeque<Sample>,
    capacity: usize,
    interval: Duration,
}

impl SampleWindow {
    /// Create an empty window. A zero `capacity` is raised to 1.
    pub fn new(capacity: usize, interval: Duration) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity + 1),
            capacity,
            interval,
        }
    }

    /// Record `value` at `at` if the window is empty or more than `interval`
    /// has passed since the newest sample.
    ///
    /// Returns `true` when the sample was appended.
    pub fn record(&mut self, at: Instant, value: u64) -> bool {
        if let Some(last) = self.samples.back() {
            if at.saturating_duration_since(last.at) <= self.interval {
                return false;
            }
        }

        trace!("Recording sample {} ({} retained)", value, self.samples.len());
        self.samples.push_back(Sample { at, value });

        if self.samples.len() > self.capacity {
            if let Some(evicted) = self.samples.pop_front() {
                trace!("Evicted sample {}", evicted.value);
            }
        }

        true
    }

    /// Oldest retained sample.
    pub fn first(&self) -> Option<&Sample> {
        self.samples.front()
    }

    /// Newest retained sample.
    pub fn last(&self) -> Option<&Sample> {
        self.samples.back()
    }

    /// Gets the number of retained samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns `true` when no sample was recorded yet.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Gets the maximum number of retained samples.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Gets the minimum spacing between two samples.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Iterate from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter()
    }
}
