//! Shared utility functions.
//!
//! This module contains the helpers the renderer leans on but which are not
//! tied to a tracker: terminal width discovery and duration formatting.
//!
//! # Overview
//!
//! - [`terminal`] - Terminal width sources and the 80 column fallback
//! - [`duration`] - Compact `1m5s` style duration formatting

pub mod duration;
pub mod terminal;

// Re-export commonly used utilities
pub use duration::{format_duration, round_to_secs};
pub use terminal::{terminal_width, FixedWidth, StderrWidth, WidthSource, DEFAULT_WIDTH};
