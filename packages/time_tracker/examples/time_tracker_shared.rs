//! Two independently constructed trackers timing functions that call each other.
//!
//! With isolated stacks the outer function cannot see the inner one and reports its
//! whole duration as partial time. With the process-wide stack the inner time is
//! subtracted.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use time_tracker::{CallInfo, CollectingSink, Result, Tracker};

fn outer(outer_tracker: &Tracker, inner_tracker: &Tracker) -> Result<()> {
    outer_tracker.track(CallInfo::new("outer"), || {
        thread::sleep(Duration::from_millis(50));
        inner_tracker.track(CallInfo::new("inner"), || {
            thread::sleep(Duration::from_millis(100));
        })
    })?
}

fn run(isolated: bool) -> Result<()> {
    let sink = Arc::new(CollectingSink::new());
    let outer_tracker = Tracker::builder(Arc::clone(&sink))
        .name("outer")
        .isolated(isolated)
        .build();
    let inner_tracker = Tracker::builder(Arc::clone(&sink))
        .name("inner")
        .isolated(isolated)
        .build();

    outer(&outer_tracker, &inner_tracker)?;

    println!("isolated = {isolated}");
    for record in sink.records() {
        println!("  {record}");
    }

    Ok(())
}

fn main() -> Result<()> {
    run(true)?;
    run(false)
}
