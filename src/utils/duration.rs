//! Compact duration formatting for the `[elapsed:remaining]` readout.

use std::time::Duration;

/// Format `d` as hours, minutes and seconds, dropping leading zero units.
///
/// Sub-second precision is discarded.
///
/// ```rust
/// use linebar::utils::format_duration;
/// use std::time::Duration;
///
/// assert_eq!(format_duration(Duration::ZERO), "0s");
/// assert_eq!(format_duration(Duration::from_secs(65)), "1m5s");
/// assert_eq!(format_duration(Duration::from_secs(7203)), "2h0m3s");
/// ```
pub fn format_duration(d: Duration) -> String {
    let total = d.as_secs();
    let hours = total / 3_600;
    let minutes = (total % 3_600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{hours}h{minutes}m{seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m{seconds}s")
    } else {
        format!("{seconds}s")
    }
}

/// Round `d` to the nearest whole second, half up.
pub fn round_to_secs(d: Duration) -> Duration {
    let secs = d.as_secs() + u64::from(d.subsec_nanos() >= 500_000_000);
    Duration::from_secs(secs)
}
