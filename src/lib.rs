//! Linebar renders a single-line, terminal-width-adaptive progress bar for a
//! long running operation and estimates its throughput and time to completion.
//!
//! # Quick Start
//!
//! ```rust
//! use linebar::ProgressTracker;
//!
//! let mut tracker = ProgressTracker::new("download", 1000, 0);
//! tracker.set(500);
//!
//! let line = tracker.render(80);
//! assert!(line.starts_with("download  50% ▕"));
//! ```
//!
//! # Module Organization
//!
//! The linebar crate is organized into several modules:
//!
//! - [`tracker`] - Progress state, the sample window, and the rate/ETA estimators
//! - [`render`] - Line layout, glyph options, and in-place terminal drawing
//! - [`clock`] - Injectable time sources
//! - [`error`] - Centralized error handling with the `Error` enum
//! - [`utils`] - Terminal width discovery and duration formatting

pub mod clock;
pub mod error;
pub mod render;
pub mod tracker;
pub mod utils;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{Error, Result};
pub use render::{BarGlyphs, ByteFormat, LineDisplay, LineRenderer, RenderOptions};
pub use tracker::{ProgressTracker, TrackerBuilder, TrackerConfig, TrackerState};
pub use utils::{terminal_width, FixedWidth, StderrWidth, WidthSource};
