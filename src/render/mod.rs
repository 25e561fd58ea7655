//! Render module turning tracker state into a terminal line.
//!
//! # Overview
//!
//! - `line` - The width-adaptive [`LineRenderer`]
//! - `style` - Glyph and unit options
//! - `display` - [`LineDisplay`], redrawing a line in place on a terminal
//!
//! # Examples
//!
//! ```rust
//! use linebar::render::{LineRenderer, RenderOptions};
//! use linebar::tracker::ProgressTracker;
//!
//! let mut tracker = ProgressTracker::new("x", 100, 0);
//! tracker.set(100);
//!
//! let options = RenderOptions::default();
//! let line = LineRenderer::new(&options).render(&tracker, 40);
//! assert!(line.starts_with("x 100% ▕"));
//! assert!(line.ends_with("▏(100 B)"));
//! ```

pub(crate) mod display;
pub(crate) mod line;
pub(crate) mod style;

pub use display::LineDisplay;
pub use line::{LineRenderer, RESERVED_COLUMNS};
pub use style::{BarGlyphs, ByteFormat, RenderOptions};
