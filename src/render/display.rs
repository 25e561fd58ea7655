//! Writing rendered lines to a terminal.
//!
//! [`LineDisplay`] redraws a tracker in place: every draw clears the current
//! line and writes the new one without a newline, and [`LineDisplay::finish`]
//! draws a last time and moves to the next line.
//!
//! # Examples
//!
//! ```rust,no_run
//! use linebar::render::LineDisplay;
//! use linebar::tracker::ProgressTracker;
//!
//! # fn main() -> linebar::Result<()> {
//! let display = LineDisplay::new();
//! let mut tracker = ProgressTracker::new("layer", 2048, 0);
//!
//! for chunk in 1..=4 {
//!     tracker.set(chunk * 512);
//!     display.draw(&tracker)?;
//! }
//! display.finish(&tracker)?;
//! # Ok(())
//! # }
//! ```

use crate::clock::Clock;
use crate::tracker::ProgressTracker;
use crate::utils::{terminal_width, StderrWidth, WidthSource};
use crate::Result;

use console::Term;

/// Draws a single progress line on a terminal.
#[derive(Debug, Clone)]
pub struct LineDisplay<W = StderrWidth> {
    /// Where the line is written.
    term: Term,
    /// Where the width comes from.
    width: W,
    /// Skip all output.
    hidden: bool,
}

impl Default for LineDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl LineDisplay {
    /// Draw on stderr, sized to the stderr terminal.
    pub fn new() -> Self {
        Self::with_width(StderrWidth)
    }

    /// A display that never writes anything.
    pub fn hidden() -> Self {
        Self {
            hidden: true,
            ..Self::new()
        }
    }
}

impl<W: WidthSource> LineDisplay<W> {
    /// Draw on stderr, sized by `width`.
    pub fn with_width(width: W) -> Self {
        Self::with_term(Term::stderr(), width)
    }

    /// Draw on `term`, sized by `width`.
    pub fn with_term(term: Term, width: W) -> Self {
        Self {
            term,
            width,
            hidden: false,
        }
    }

    /// Returns `true` if this display never writes.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Current width used for layout, 80 columns when unknown.
    pub fn width(&self) -> usize {
        terminal_width(&self.width)
    }

    /// Replace the current line with the rendering of `tracker`.
    pub fn draw<C: Clock>(&self, tracker: &ProgressTracker<C>) -> Result<()> {
        if self.hidden {
            return Ok(());
        }

        let line = tracker.render(self.width());
        self.term.clear_line()?;
        self.term.write_str(&line)?;
        self.term.flush()?;
        Ok(())
    }

    /// Draw `tracker` one last time and end the line.
    pub fn finish<C: Clock>(&self, tracker: &ProgressTracker<C>) -> Result<()> {
        self.draw(tracker)?;
        if !self.hidden {
            self.term.write_line("")?;
        }
        Ok(())
    }
}
