//! Width-adaptive line layout.
//!
//! A line is made of three parts:
//!
//! ```text
//! download  50% ▕██████████████████                  ▏(500 B/1000 B, 250 B/s) [2s:2s]
//! └─ prefix ──┘ └──────────────── bar ───────────────┘└─────────── suffix ───────────┘
//! ```
//!
//! The prefix and suffix are laid out first and the bar takes whatever is
//! left, minus one column so the line never wraps. When nothing is left the
//! bar collapses to its two boundary glyphs.

use super::style::RenderOptions;
use crate::clock::Clock;
use crate::tracker::ProgressTracker;
use crate::utils::format_duration;

use console::{measure_text_width, pad_str, Alignment};
use std::fmt::Write;

/// Columns reserved besides prefix and suffix: two boundary glyphs and the
/// final column.
pub const RESERVED_COLUMNS: usize = 3;

/// Lays a tracker out on a single line.
#[derive(Debug, Clone, Copy)]
pub struct LineRenderer<'a> {
    options: &'a RenderOptions,
}

impl<'a> LineRenderer<'a> {
    /// Create a renderer using `options`.
    pub fn new(options: &'a RenderOptions) -> Self {
        Self { options }
    }

    /// Render `tracker` for a terminal `width` columns wide.
    pub fn render<C: Clock>(&self, tracker: &ProgressTracker<C>, width: usize) -> String {
        let percent = tracker.percent();
        let prefix = self.prefix(tracker, percent);
        let suffix = self.suffix(tracker);

        let used = measure_text_width(&prefix) + measure_text_width(&suffix) + RESERVED_COLUMNS;
        let bar = self.bar(width.saturating_sub(used), percent);

        let mut line = String::with_capacity(prefix.len() + bar.len() + suffix.len());
        line.push_str(&prefix);
        line.push_str(&bar);
        line.push_str(&suffix);
        line
    }

    fn prefix<C: Clock>(&self, tracker: &ProgressTracker<C>, percent: f64) -> String {
        let mut pre = String::new();

        if !tracker.label().is_empty() {
            let label = tracker.label().trim();
            match tracker.label_width() {
                Some(width) if width > 0 => {
                    pre.push_str(&pad_str(label, width, Alignment::Left, Some("")))
                }
                _ => pre.push_str(label),
            }
            pre.push(' ');
        }

        let _ = write!(pre, "{:>3}% ", percent.floor() as u64);
        pre
    }

    fn suffix<C: Clock>(&self, tracker: &ProgressTracker<C>) -> String {
        let bytes = self.options.byte_format();
        let mut suf = String::from("(");

        if tracker.is_completed() {
            suf.push_str(&bytes.format(tracker.max()));
            suf.push(')');
            return suf;
        }

        let rate = tracker.rate();
        let _ = write!(
            suf,
            "{}/{}, {}/s) [{}:{}]",
            bytes.format(tracker.current()),
            bytes.format(tracker.max()),
            bytes.format(rate as u64),
            format_duration(tracker.elapsed()),
            format_duration(tracker.remaining_at(rate)),
        );
        suf
    }

    fn bar(&self, available: usize, percent: f64) -> String {
        let glyphs = self.options.glyphs();
        let filled = ((available as f64 * percent / 100.0) as usize).min(available);

        let mut mid = String::with_capacity((available + 2) * glyphs.fill.len_utf8());
        mid.push(glyphs.left);
        mid.extend(std::iter::repeat_n(glyphs.fill, filled));
        mid.extend(std::iter::repeat_n(glyphs.empty, available - filled));
        mid.push(glyphs.right);
        mid
    }
}
