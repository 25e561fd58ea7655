//! Example driving a progress line from a simulated transfer

use color_eyre::Result;
use linebar::{LineDisplay, ProgressTracker};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const TOTAL: u64 = 48 * 1024 * 1024;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let display = LineDisplay::new();
    let mut tracker = ProgressTracker::builder("pulling layer", TOTAL)
        .label_width(16)
        .build();

    // Redraw ten times per second, with the speed changing every few seconds
    let mut ticker = tokio::time::interval(Duration::from_millis(100));
    let mut received = 0;
    let mut tick: u64 = 0;
    while !tracker.is_completed() {
        ticker.tick().await;
        tick += 1;

        let chunk = match (tick / 30) % 3 {
            0 => 512 * 1024,
            1 => 128 * 1024,
            _ => 1024 * 1024,
        };
        received += chunk;
        tracker.set(received);
        display.draw(&tracker)?;
    }
    display.finish(&tracker)?;

    println!("Transferred {} bytes in {:?}", tracker.max(), tracker.elapsed());

    Ok(())
}
