//! Scoped timing of a single call.

use tracing::warn;

use crate::{CallInfo, Result, Tracker};

/// A timed call that ends when the span is finished or dropped.
///
/// Created by [`Tracker::measure()`]. Because the call is completed in `Drop`, it is
/// completed on every exit path of the enclosing scope, including early returns, `?`
/// and panic unwinding.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use time_tracker::{CallInfo, CollectingSink, Tracker};
///
/// let sink = Arc::new(CollectingSink::new());
/// let tracker = Tracker::new(Arc::clone(&sink));
///
/// fn parse(tracker: &Tracker, input: &str) -> Result<u32, std::num::ParseIntError> {
///     let _span = tracker.measure(CallInfo::new("parse").arg(input.to_string()));
///     input.parse()
/// }
///
/// assert!(parse(&tracker, "12").is_ok());
/// assert!(parse(&tracker, "twelve").is_err());
///
/// // Both calls were recorded, whichever way they returned.
/// assert_eq!(sink.len(), 2);
/// ```
#[derive(Debug)]
#[must_use = "Measurements are taken between creation and drop"]
pub struct CallSpan<'a> {
    tracker: &'a Tracker,

    // None once completed, or from the start if the tracker is disabled.
    call: Option<CallInfo>,
}

impl<'a> CallSpan<'a> {
    pub(crate) fn new(tracker: &'a Tracker, call: CallInfo) -> Self {
        if !tracker.is_enabled() {
            return Self {
                tracker,
                call: None,
            };
        }

        tracker.enter();

        Self {
            tracker,
            call: Some(call),
        }
    }

    /// Completes the call now and reports the outcome of delivering its record.
    ///
    /// # Errors
    ///
    /// Returns the error of [`Tracker::exit()`].
    pub fn finish(mut self) -> Result<()> {
        match self.call.take() {
            Some(call) => self.tracker.exit(call),
            None => Ok(()),
        }
    }
}

impl Drop for CallSpan<'_> {
    fn drop(&mut self) {
        let Some(call) = self.call.take() else {
            return;
        };

        if let Err(error) = self.tracker.exit(call) {
            warn!(
                tracker = self.tracker.name().unwrap_or_default(),
                %error,
                "call span dropped without delivering its record"
            );
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;
    use crate::log_capture::capture_logs;
    use crate::mock_sink::MockSink;
    use crate::pal::{ClockFacade, FakeClock};
    use crate::{CollectingSink, Error};

    fn create_test_tracker() -> (Tracker, Arc<CollectingSink>, FakeClock) {
        let clock = FakeClock::new();
        let sink = Arc::new(CollectingSink::new());
        let tracker = Tracker::builder(Arc::clone(&sink))
            .clock(ClockFacade::fake(clock.clone()))
            .build();
        (tracker, sink, clock)
    }

    #[test]
    fn drop_completes_call() {
        let (tracker, sink, clock) = create_test_tracker();

        {
            let _span = tracker.measure(CallInfo::new("scoped"));
            assert_eq!(tracker.stack().depth(), 1);
            clock.advance(Duration::from_millis(8));
        }

        assert_eq!(tracker.stack().depth(), 0);
        assert_eq!(sink.records()[0].total_time(), Duration::from_millis(8));
    }

    #[test]
    fn finish_completes_call_once() {
        let (tracker, sink, _clock) = create_test_tracker();

        let span = tracker.measure(CallInfo::new("explicit"));
        span.finish().unwrap();

        assert_eq!(sink.len(), 1);
        assert_eq!(tracker.stack().depth(), 0);
    }

    #[test]
    fn nested_spans_close_in_lifo_order() {
        let (tracker, sink, clock) = create_test_tracker();

        {
            let _outer = tracker.measure(CallInfo::new("outer"));
            clock.advance(Duration::from_millis(1));
            let _inner = tracker.measure(CallInfo::new("inner"));
            clock.advance(Duration::from_millis(2));
        }

        let records = sink.records();
        assert_eq!(records[0].name(), "inner");
        assert_eq!(records[1].name(), "outer");
        assert_eq!(records[1].partial_time(), Duration::from_millis(1));
    }

    #[test]
    fn disabled_span_does_nothing() {
        let sink = Arc::new(CollectingSink::new());
        let tracker = Tracker::builder(Arc::clone(&sink)).enabled(false).build();

        let span = tracker.measure(CallInfo::new("off"));
        assert_eq!(tracker.stack().depth(), 0);
        span.finish().unwrap();

        assert!(sink.is_empty());
    }

    #[test]
    fn finish_returns_sink_error() {
        let mut sink = MockSink::new();
        sink.expect_log().returning(|_| Err("offline".into()));
        let tracker = Tracker::new(Arc::new(sink));

        let error = tracker.measure(CallInfo::new("f")).finish().unwrap_err();

        assert!(matches!(error, Error::Sink { .. }));
    }

    #[test]
    fn drop_with_failing_sink_keeps_stack_balanced() {
        let mut sink = MockSink::new();
        sink.expect_log().times(1).returning(|_| Err("offline".into()));
        let tracker = Tracker::new(Arc::new(sink));

        drop(tracker.measure(CallInfo::new("f")));

        assert_eq!(tracker.stack().depth(), 0);
    }

    #[test]
    fn drop_with_failing_sink_warns() {
        let mut sink = MockSink::new();
        sink.expect_log().times(1).returning(|_| Err("offline".into()));
        let tracker = Tracker::builder(Arc::new(sink)).name("worker").build();

        let ((), logs) = capture_logs(|| drop(tracker.measure(CallInfo::new("f"))));

        assert!(logs.contains("WARN"), "{logs}");
        assert!(logs.contains("call span dropped without delivering its record"), "{logs}");
        assert!(logs.contains(r#"tracker="worker""#), "{logs}");
        assert!(logs.contains("error="), "{logs}");
    }

    #[test]
    fn drop_with_working_sink_does_not_warn() {
        let (tracker, sink, _clock) = create_test_tracker();

        let ((), logs) = capture_logs(|| drop(tracker.measure(CallInfo::new("f"))));

        assert_eq!(sink.len(), 1);
        assert!(!logs.contains("WARN"), "{logs}");
    }
}
