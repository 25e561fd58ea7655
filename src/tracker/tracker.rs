//! Core progress tracker.
//!
//! A [`ProgressTracker`] owns the state of one progress bar: the label, the
//! current, initial and maximum values, when it started and stopped, and a
//! throttled window of samples used to estimate throughput.
//!
//! Trackers provide no internal synchronization. Share one between threads by
//! wrapping it in a `Mutex` at the call site.

use super::builder::TrackerBuilder;
use super::config::TrackerConfig;
use super::sample::{Sample, SampleWindow};
use crate::clock::{Clock, SystemClock};
use crate::render::{LineRenderer, RenderOptions};
use crate::utils::{round_to_secs, terminal_width, StderrWidth};

use std::fmt;
use std::time::{Duration, Instant};
use tracing::debug;

/// Lifecycle of a tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerState {
    /// The maximum has not been reached yet.
    Running,
    /// The maximum was reached. There is no way back.
    Completed,
}

/// Progress state of a single long running operation.
#[derive(Debug, Clone)]
pub struct ProgressTracker<C = SystemClock> {
    label: String,
    label_width: Option<usize>,

    max: u64,
    initial: u64,
    current: u64,

    started_at: Instant,
    stopped_at: Option<Instant>,

    samples: SampleWindow,
    style: RenderOptions,
    clock: C,
}

impl ProgressTracker {
    /// Create a tracker counting from `initial` up to `max`, using the wall
    /// clock and default options.
    ///
    /// No validation is performed on the values. A zero `max` simply keeps the
    /// percentage at 0.
    pub fn new(label: impl Into<String>, max: u64, initial: u64) -> Self {
        TrackerBuilder::new(label, max).initial(initial).build()
    }

    /// Start a [`TrackerBuilder`].
    pub fn builder(label: impl Into<String>, max: u64) -> TrackerBuilder {
        TrackerBuilder::new(label, max)
    }
}

impl<C: Clock> ProgressTracker<C> {
    pub(crate) fn with_config(
        label: String,
        max: u64,
        initial: u64,
        config: TrackerConfig,
        clock: C,
    ) -> Self {
        Self {
            label,
            label_width: config.label_width,
            max,
            initial,
            current: initial,
            started_at: clock.now(),
            stopped_at: None,
            samples: SampleWindow::new(config.sample_capacity, config.sample_interval),
            style: config.style,
            clock,
        }
    }

    /// Advance the tracker to `value`, clamped to the maximum.
    ///
    /// Reaching the maximum completes the tracker. A sample is recorded when
    /// the sample interval has passed since the previous one.
    pub fn set(&mut self, value: u64) {
        let value = value.min(self.max);
        let now = self.clock.now();

        self.current = value;
        if self.current == self.max && self.stopped_at.is_none() {
            debug!(
                "{:?} completed after {:?}",
                self.label,
                now.saturating_duration_since(self.started_at)
            );
            self.stopped_at = Some(now);
        }

        self.samples.record(now, value);
    }

    /// Completion percentage in `[0, 100]`. Always 0 when the maximum is 0.
    pub fn percent(&self) -> f64 {
        if self.max > 0 {
            (self.current as f64 / self.max as f64 * 100.0).min(100.0)
        } else {
            0.0
        }
    }

    /// Time since the tracker was created, or until it completed, rounded to
    /// whole seconds.
    pub fn elapsed(&self) -> Duration {
        let end = self.stopped_at.unwrap_or_else(|| self.clock.now());
        round_to_secs(end.saturating_duration_since(self.started_at))
    }

    /// Estimated throughput in units per second.
    ///
    /// Once completed this is the average over the whole run. While running
    /// it spans the retained samples: from the start of the run to the only
    /// sample, or from the oldest to the newest one.
    pub fn rate(&self) -> f64 {
        if self.stopped_at.is_some() {
            return per_second(
                self.current as f64 - self.initial as f64,
                self.elapsed(),
            );
        }

        match (self.samples.first(), self.samples.last()) {
            (Some(only), _) if self.samples.len() == 1 => per_second(
                only.value as f64 - self.initial as f64,
                only.at.saturating_duration_since(self.started_at),
            ),
            (Some(first), Some(last)) => per_second(
                last.value as f64 - first.value as f64,
                last.at.saturating_duration_since(first.at),
            ),
            _ => 0.0,
        }
    }

    /// Estimated time to completion at the current rate.
    ///
    /// Zero once completed or while the rate is not positive.
    pub fn remaining(&self) -> Duration {
        self.remaining_at(self.rate())
    }

    pub(crate) fn remaining_at(&self, rate: f64) -> Duration {
        if self.stopped_at.is_some() || rate <= 0.0 {
            return Duration::ZERO;
        }

        let secs = self.max.saturating_sub(self.current) as f64 / rate;
        Duration::from_secs(secs as u64)
    }

    /// Render the progress line for a terminal `width` columns wide.
    pub fn render(&self, width: usize) -> String {
        LineRenderer::new(&self.style).render(self, width)
    }

    /// Gets the lifecycle state.
    pub fn state(&self) -> TrackerState {
        if self.stopped_at.is_some() {
            TrackerState::Completed
        } else {
            TrackerState::Running
        }
    }

    /// Returns `true` once the maximum has been reached.
    pub fn is_completed(&self) -> bool {
        self.stopped_at.is_some()
    }

    /// Gets the label as given at construction.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Gets the column width the label is fitted to, if any.
    pub fn label_width(&self) -> Option<usize> {
        self.label_width
    }

    /// Gets the current value.
    pub fn current(&self) -> u64 {
        self.current
    }

    /// Gets the value the tracker started from.
    pub fn initial(&self) -> u64 {
        self.initial
    }

    /// Gets the target value.
    pub fn max(&self) -> u64 {
        self.max
    }

    /// Gets the instant the tracker was created.
    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    /// Gets the instant the maximum was first reached.
    pub fn stopped_at(&self) -> Option<Instant> {
        self.stopped_at
    }

    /// Retained samples, oldest first.
    pub fn samples(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter()
    }

    /// Gets the line rendering options.
    pub fn style(&self) -> &RenderOptions {
        &self.style
    }
}

/// Renders at the width of the terminal attached to stderr.
impl<C: Clock> fmt::Display for ProgressTracker<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(terminal_width(&StderrWidth)))
    }
}

fn per_second(delta: f64, span: Duration) -> f64 {
    let secs = span.as_secs_f64();
    if secs <= 0.0 {
        return 0.0;
    }

    let rate = delta / secs;
    if rate.is_finite() {
        rate
    } else {
        0.0
    }
}
