use console::measure_text_width;
use linebar::clock::ManualClock;
use linebar::tracker::{ProgressTracker, TrackerBuilder};
use std::time::Duration;

// Common test constants
pub const TEST_LABEL: &str = "download";
pub const TEST_MAX: u64 = 1000;

/// Creates a tracker driven by a frozen clock, and a handle to that clock
pub fn create_frozen_tracker(
    label: &str,
    max: u64,
    initial: u64,
) -> (ProgressTracker<ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let tracker = TrackerBuilder::new(label, max)
        .initial(initial)
        .clock(clock.clone())
        .build();
    (tracker, clock)
}

/// Creates the default frozen test tracker
pub fn create_test_tracker() -> (ProgressTracker<ManualClock>, ManualClock) {
    create_frozen_tracker(TEST_LABEL, TEST_MAX, 0)
}

/// Advances the clock then sets the tracker to `value`
pub fn set_after(
    tracker: &mut ProgressTracker<ManualClock>,
    clock: &ManualClock,
    after: Duration,
    value: u64,
) {
    clock.advance(after);
    tracker.set(value);
}

/// Columns taken by `line` on a terminal
pub fn visible_width(line: &str) -> usize {
    measure_text_width(line)
}

/// The glyphs between the left and right boundary of the bar
pub fn bar_interior(line: &str, left: char, right: char) -> String {
    let start = line.find(left).expect("Line should contain a left boundary");
    let rest = &line[start + left.len_utf8()..];
    let end = rest.find(right).expect("Line should contain a right boundary");
    rest[..end].to_string()
}

/// Counts occurrences of `glyph` in `s`
pub fn count_glyph(s: &str, glyph: char) -> usize {
    s.chars().filter(|c| *c == glyph).count()
}

/// Asserts two rates are equal up to float noise
pub fn assert_rate_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "Rate mismatch: expected {}, got {}",
        expected,
        actual
    );
}

/// Installs a test subscriber so `RUST_LOG=linebar=trace` shows tracker logs
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
