//! Terminal width discovery.
//!
//! Rendering needs the number of columns available. The live value comes
//! from a [`WidthSource`]; when the query fails (no tty, redirected stderr)
//! [`terminal_width`] substitutes [`DEFAULT_WIDTH`].
//!
//! # Examples
//!
//! ```rust
//! use linebar::utils::{terminal_width, FixedWidth};
//!
//! assert_eq!(terminal_width(&FixedWidth(120)), 120);
//! assert_eq!(terminal_width(&FixedWidth(0)), 80);
//! ```

use console::Term;
use std::io;
use tracing::debug;

/// Width used when the terminal cannot be queried.
pub const DEFAULT_WIDTH: usize = 80;

/// Something that knows how wide the output terminal is.
pub trait WidthSource {
    /// Return the width in columns.
    fn width(&self) -> io::Result<usize>;
}

/// Width of the terminal attached to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrWidth;

impl WidthSource for StderrWidth {
    fn width(&self) -> io::Result<usize> {
        Term::stderr()
            .size_checked()
            .map(|(_rows, cols)| cols as usize)
            .ok_or_else(|| io::Error::new(io::ErrorKind::Unsupported, "stderr is not a terminal"))
    }
}

/// A width that never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedWidth(pub usize);

impl WidthSource for FixedWidth {
    fn width(&self) -> io::Result<usize> {
        Ok(self.0)
    }
}

/// Query `source`, falling back to [`DEFAULT_WIDTH`] on error or a zero width.
pub fn terminal_width<W: WidthSource + ?Sized>(source: &W) -> usize {
    match source.width() {
        Ok(0) => {
            debug!("Terminal reported zero columns, using {}", DEFAULT_WIDTH);
            DEFAULT_WIDTH
        }
        Ok(width) => width,
        Err(e) => {
            debug!("Unable to query terminal width ({}), using {}", e, DEFAULT_WIDTH);
            DEFAULT_WIDTH
        }
    }
}
