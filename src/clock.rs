//! Time sources for progress trackers.
//!
//! Every tracker reads "now" through a [`Clock`], so the wall clock can be
//! swapped for a [`ManualClock`] when time has to stand still.
//!
//! # Examples
//!
//! ```rust
//! use linebar::clock::{Clock, ManualClock};
//! use std::time::Duration;
//!
//! let clock = ManualClock::new();
//! let before = clock.now();
//! clock.advance(Duration::from_secs(3));
//! assert_eq!(clock.now() - before, Duration::from_secs(3));
//! ```

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// A source of monotonic timestamps.
pub trait Clock {
    /// Return the current instant.
    fn now(&self) -> Instant;
}

/// The wall clock, backed by [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same reading, so a test can keep one handle and hand
/// another to the tracker.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<Instant>>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualClock {
    /// Create a clock frozen at the current instant.
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Create a clock frozen at `instant`.
    pub fn starting_at(instant: Instant) -> Self {
        Self {
            now: Arc::new(Mutex::new(instant)),
        }
    }

    /// Move the clock forward by `by`.
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(|e| e.into_inner());
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }
}
