//! Glyph and unit formatting options for rendered lines.
//!
//! # Examples
//!
//! ## Default Styling
//!
//! ```rust
//! use linebar::render::RenderOptions;
//!
//! // Block glyphs, binary units (KiB, MiB, ...)
//! let options = RenderOptions::default();
//! ```
//!
//! ## Custom Styling
//!
//! ```rust
//! use linebar::render::{BarGlyphs, ByteFormat, RenderOptions};
//!
//! # fn main() -> linebar::Result<()> {
//! let options = RenderOptions::new(
//!     BarGlyphs::ASCII.parse::<BarGlyphs>()?,
//!     ByteFormat::Decimal,
//! );
//! # Ok(())
//! # }
//! ```

use crate::{Error, Result};
use console::measure_text_width;
use indicatif::{DecimalBytes, HumanBytes};
use std::str::FromStr;

/// Define the line rendering options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Glyphs used to draw the bar.
    pub(crate) glyphs: BarGlyphs,
    /// Unit scaling for values and rates.
    pub(crate) byte_format: ByteFormat,
}

impl RenderOptions {
    /// Create new [`RenderOptions`].
    pub fn new(glyphs: BarGlyphs, byte_format: ByteFormat) -> Self {
        Self {
            glyphs,
            byte_format,
        }
    }

    /// Set the bar glyphs.
    pub fn set_glyphs(&mut self, glyphs: BarGlyphs) {
        self.glyphs = glyphs;
    }

    /// Set the unit scaling.
    pub fn set_byte_format(&mut self, byte_format: ByteFormat) {
        self.byte_format = byte_format;
    }

    /// Get a reference to the bar glyphs.
    pub fn glyphs(&self) -> &BarGlyphs {
        &self.glyphs
    }

    /// Get the unit scaling.
    pub fn byte_format(&self) -> ByteFormat {
        self.byte_format
    }
}

/// The four glyphs a bar is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarGlyphs {
    /// Left boundary.
    pub left: char,
    /// Completed portion.
    pub fill: char,
    /// Remaining portion.
    pub empty: char,
    /// Right boundary.
    pub right: char,
}

impl Default for BarGlyphs {
    fn default() -> Self {
        Self {
            left: '▕',
            fill: '█',
            empty: ' ',
            right: '▏',
        }
    }
}

impl BarGlyphs {
    /// Thin boundaries around solid blocks: `"▕█ ▏"`.
    pub const BLOCKS: &'static str = "▕█ ▏";
    /// Plain ASCII: `"[# ]"`.
    pub const ASCII: &'static str = "[# ]";
    /// Heavy line over a light track: `"│━─│"`.
    pub const LINE: &'static str = "│━─│";
    /// Fade-in shading: `"▕▓░▏"`.
    pub const SHADE: &'static str = "▕▓░▏";

    /// Create new [`BarGlyphs`].
    pub fn new(left: char, fill: char, empty: char, right: char) -> Self {
        Self {
            left,
            fill,
            empty,
            right,
        }
    }
}

impl FromStr for BarGlyphs {
    type Err = Error;

    /// Parse a glyph set from its four characters, in the order left
    /// boundary, fill, empty, right boundary.
    fn from_str(s: &str) -> Result<Self> {
        let chars: Vec<char> = s.chars().collect();
        let &[left, fill, empty, right] = chars.as_slice() else {
            return Err(Error::InvalidGlyphs(format!(
                "expected 4 characters, got {} in {:?}",
                chars.len(),
                s
            )));
        };

        for c in &chars {
            let width = measure_text_width(c.encode_utf8(&mut [0; 4]));
            if width != 1 {
                return Err(Error::InvalidGlyphs(format!(
                    "{c:?} is {width} columns wide, glyphs must be exactly 1"
                )));
            }
        }

        Ok(Self::new(left, fill, empty, right))
    }
}

/// Unit scaling applied to values and rates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ByteFormat {
    /// Powers of 1024 (`KiB`, `MiB`, ...).
    #[default]
    Binary,
    /// Powers of 1000 (`kB`, `MB`, ...).
    Decimal,
}

impl ByteFormat {
    /// Format `n` as a human readable size.
    pub fn format(self, n: u64) -> String {
        match self {
            ByteFormat::Binary => HumanBytes(n).to_string(),
            ByteFormat::Decimal => DecimalBytes(n).to_string(),
        }
    }
}
