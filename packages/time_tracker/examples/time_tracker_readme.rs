//! Times a few small call graphs and prints one line per completed call.
//!
//! Shows sequential children, mutual recursion, plain recursion and a callee that fails.
#![expect(
    clippy::arithmetic_side_effects,
    reason = "this is example code that doesn't need production-level safety"
)]

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use time_tracker::{CallInfo, ConsoleSink, Result, Tracker};

fn sleep_secs(secs: f64) {
    thread::sleep(Duration::from_secs_f64(secs));
}

fn boo(tracker: &Tracker, x: u32, y: u32) -> Result<u32> {
    tracker.track(CallInfo::new("boo").arg(x).arg(y), || -> Result<u32> {
        sleep_secs(0.2);
        Ok(dodo(tracker, x, 0.3)? + dodo(tracker, y, 0.4)?)
    })?
}

fn dodo(tracker: &Tracker, x: u32, i: f64) -> Result<u32> {
    tracker.track(CallInfo::new("dodo").arg(x).arg(i), || {
        sleep_secs(i);
        x
    })
}

fn f(tracker: &Tracker, x: i32, i: u32) -> Result<i32> {
    tracker.track(CallInfo::new("f").arg(x).arg(i), || -> Result<i32> {
        sleep_secs(0.1);
        if i == 0 {
            Ok(x)
        } else {
            Ok(3 * g(tracker, x, i)? + 1)
        }
    })?
}

fn g(tracker: &Tracker, x: i32, i: u32) -> Result<i32> {
    tracker.track(CallInfo::new("g").arg(x).arg(i), || -> Result<i32> {
        sleep_secs(0.3);
        let res = f(tracker, x - 1, i - 1)? / 2;
        sleep_secs(0.4);
        Ok(res)
    })?
}

fn fibo(tracker: &Tracker, n: u64) -> Result<u64> {
    tracker.track(CallInfo::new("fibo").arg(n), || -> Result<u64> {
        if n < 2 {
            Ok(1)
        } else {
            Ok(fibo(tracker, n - 1)? + fibo(tracker, n - 2)?)
        }
    })?
}

fn error_fun(tracker: &Tracker) -> Result<()> {
    tracker.track(CallInfo::new("error_fun"), || {
        sleep_secs(0.2);
        panic!("Booo");
    })
}

fn error_fun_caller(tracker: &Tracker) -> Result<()> {
    tracker.track(CallInfo::new("error_fun_caller"), || {
        sleep_secs(0.1);
        error_fun(tracker)
    })?
}

fn main() -> Result<()> {
    let tracker = Tracker::new(Arc::new(ConsoleSink::stdout()));

    boo(&tracker, 1, 2)?;
    f(&tracker, 1, 2)?;
    fibo(&tracker, 5)?;

    // The panic still produces a record for both calls before it reaches us.
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| error_fun_caller(&tracker)));
    assert!(outcome.is_err());

    Ok(())
}
