//! End-to-end scenarios driving a tracker the way a transfer loop would.

use std::time::Duration;

mod common;
use common::helpers::*;

const TICK: Duration = Duration::from_millis(100);

#[test]
fn test_rate_follows_throughput_changes() {
    init_tracing();
    let (mut tracker, clock) = create_frozen_tracker("layer", 20_000, 0);
    let mut bytes = 0;

    // 10s at 1000 B/s
    for _ in 0..100 {
        bytes += 100;
        set_after(&mut tracker, &clock, TICK, bytes);
    }
    assert_rate_close(tracker.rate(), 1000.0);

    // 15s at 500 B/s, long enough for the window to forget the fast phase
    for _ in 0..150 {
        bytes += 50;
        set_after(&mut tracker, &clock, TICK, bytes);
    }
    assert_eq!(tracker.current(), 17_500);
    assert_rate_close(tracker.rate(), 500.0);

    let remaining = tracker.remaining();
    assert!(
        remaining >= Duration::from_secs(4) && remaining <= Duration::from_secs(5),
        "remaining {:?}",
        remaining
    );
    assert_eq!(tracker.elapsed(), Duration::from_secs(25));

    let line = tracker.render(100);
    assert!(line.starts_with("layer  87% ▕"));
    assert!(line.contains("(17.09 KiB/19.53 KiB, "));
    assert!(line.contains(" [25s:"));

    // finish 5s later
    set_after(&mut tracker, &clock, Duration::from_secs(5), 20_000);
    assert!(tracker.is_completed());
    assert_rate_close(tracker.rate(), 20_000.0 / 30.0);

    let done = tracker.render(100);
    assert!(done.starts_with("layer 100% ▕"));
    assert!(done.ends_with("▏(19.53 KiB)"));
    assert_eq!(visible_width(&done), 99);
}

#[test]
fn test_resumed_transfer_rate_excludes_initial_bytes() {
    let (mut tracker, clock) = create_frozen_tracker("resume", 10_000, 4_000);

    for step in 1..=30 {
        set_after(&mut tracker, &clock, TICK, 4_000 + step * 100);
    }
    // samples at 0.1s, 1.2s and 2.3s
    assert_eq!(tracker.samples().count(), 3);
    assert_rate_close(tracker.rate(), 1000.0);

    set_after(&mut tracker, &clock, Duration::from_secs(3), 10_000);
    assert_eq!(tracker.elapsed(), Duration::from_secs(6));
    assert_rate_close(tracker.rate(), 1000.0);
}
