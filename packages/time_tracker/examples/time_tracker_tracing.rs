//! Sends call records to `tracing` and lets a `tracing-subscriber` formatter print them.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use time_tracker::{CallInfo, Result, Tracker, TracingSink};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let tracker = Tracker::builder(Arc::new(TracingSink::new()))
        .name("tracing_example")
        .build();

    tracker.track(CallInfo::new("load").kwarg("path", "config.toml"), || {
        thread::sleep(Duration::from_millis(5));
        tracker.track(CallInfo::new("parse"), || {
            thread::sleep(Duration::from_millis(10));
        })
    })??;

    Ok(())
}
