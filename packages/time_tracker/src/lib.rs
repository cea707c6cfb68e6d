#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Call-stack-aware wall-clock timing of nested calls.
//!
//! Every timed call produces two measurements:
//!
//! * **total time** - the wall-clock duration of the call, including everything it did;
//! * **partial time** - the total time minus the total time of the tracked calls made
//!   directly inside it, i.e. the time the call spent on its own work.
//!
//! Each completed call is reported as a [`CallRecord`] to a pluggable [`RecordSink`].
//!
//! The core functionality includes:
//! - [`Tracker`] - Times calls and reports them to a sink
//! - [`AccountingStack`] - The nesting-aware bookkeeping that separates partial from total time
//! - [`SharedStack`] - A handle that lets several trackers attribute nested time to each other
//! - [`CallSpan`] - Times a scope, completing the call on every exit path
//! - [`ConsoleSink`], [`TracingSink`], [`CollectingSink`] - Ready-made sinks
//!
//! # Simple usage
//!
//! ```
//! use std::sync::Arc;
//! use std::thread;
//! use std::time::Duration;
//!
//! use time_tracker::{CallInfo, ConsoleSink, Tracker};
//!
//! let tracker = Tracker::new(Arc::new(ConsoleSink::stdout()));
//!
//! let dodo = |x: u32, millis: u64| {
//!     tracker.track(CallInfo::new("dodo").arg(x).arg(millis), || {
//!         thread::sleep(Duration::from_millis(millis));
//!         x
//!     })
//! };
//!
//! let total = tracker
//!     .track(CallInfo::new("boo"), || -> time_tracker::Result<u32> {
//!         thread::sleep(Duration::from_millis(2));
//!         Ok(dodo(1, 3)? + dodo(2, 4)?)
//!     })
//!     .unwrap()
//!     .unwrap();
//!
//! assert_eq!(total, 3);
//! // Prints, in completion order:
//! // [TimeTracking] dodo [1, 3] {} - total: 0.003071 s - partial: 0.003071 s
//! // [TimeTracking] dodo [2, 4] {} - total: 0.004066 s - partial: 0.004066 s
//! // [TimeTracking] boo [] {} - total: 0.009212 s - partial: 0.002075 s
//! ```
//!
//! # Isolated and shared stacks
//!
//! By default each tracker has an accounting stack of its own and cannot see the calls
//! timed by other trackers. Trackers that time functions calling each other should share
//! a stack, either one passed explicitly via [`TrackerBuilder::shared_stack()`] or the
//! process-wide one selected with [`TrackerBuilder::isolated()`]:
//!
//! ```
//! use std::sync::Arc;
//!
//! use time_tracker::{SharedStack, Tracker, TracingSink};
//!
//! let sink = Arc::new(TracingSink::new());
//! let parser = Tracker::builder(Arc::clone(&sink)).isolated(false).build();
//! let lexer = Tracker::builder(sink).isolated(false).build();
//!
//! assert!(parser.stack().ptr_eq(lexer.stack()));
//! assert!(parser.stack().ptr_eq(&SharedStack::process_wide()));
//! ```
//!
//! # Threading
//!
//! An accounting stack assumes strictly nested calls from one logical thread of control.
//! Trackers are `Send + Sync`, but if calls from several threads interleave on the same
//! stack their times are attributed to the wrong frames. Give each thread its own
//! isolated tracker (or its own [`SharedStack`]) instead.
//!
//! # Errors
//!
//! Errors and panics of the timed code pass through unchanged; the call is still recorded.
//! A sink failure is returned to the caller as [`Error::Sink`] rather than ignored.

mod accounting_stack;
mod call_info;
mod call_record;
mod call_span;
mod collecting_sink;
mod console_sink;
mod error;
#[cfg(test)]
mod log_capture;
#[cfg(test)]
mod mock_sink;
mod pal;
mod record_sink;
mod shared_stack;
mod timing;
mod tracing_sink;
mod tracker;
mod tracker_builder;

pub use accounting_stack::AccountingStack;
pub use call_info::{ArgValue, CallInfo};
pub use call_record::CallRecord;
pub use call_span::CallSpan;
pub use collecting_sink::CollectingSink;
pub use console_sink::ConsoleSink;
pub use error::{Error, Result, SinkError};
pub use record_sink::RecordSink;
pub use shared_stack::SharedStack;
pub use timing::Timing;
pub use tracing_sink::TracingSink;
pub use tracker::Tracker;
pub use tracker_builder::TrackerBuilder;

pub(crate) const ERR_POISONED_LOCK: &str =
    "encountered poisoned lock - program validity cannot be guaranteed";
