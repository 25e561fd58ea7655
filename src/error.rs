//! Error handling for the linebar library.
//!
//! Tracking progress and rendering a line never fail. Errors only come from
//! the configuration surface (parsing a glyph set) and from writing a
//! rendered line to a terminal.

use std::io;
use thiserror::Error;

/// Errors that can happen when using linebar.
#[derive(Error, Debug)]
pub enum Error {
    /// A glyph set could not be built from the provided characters.
    ///
    /// A glyph set needs exactly four characters (left boundary, fill,
    /// empty, right boundary), each one terminal column wide.
    #[error("Invalid glyphs: {0}")]
    InvalidGlyphs(String),

    /// I/O Error.
    ///
    /// This variant wraps errors raised while writing a rendered line to
    /// the terminal.
    #[error("I/O error")]
    IOError {
        #[from]
        source: io::Error,
    },
}

/// Result type alias for operations that can fail with a linebar error.
pub type Result<T> = std::result::Result<T, Error>;
