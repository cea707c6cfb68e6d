use std::fmt::Debug;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::{
    ArgValue, CallInfo, CallRecord, CallSpan, Error, RecordSink, Result, SharedStack, TrackerBuilder,
};

/// Times calls and reports the total and partial time of each to a [`RecordSink`].
///
/// Every timed call goes through the same contract: [`enter()`](Self::enter) before the
/// work starts and [`exit()`](Self::exit) exactly once after it ends, however it ends.
/// The adapters [`track()`](Self::track), [`wrap()`](Self::wrap) and
/// [`measure()`](Self::measure) uphold that contract for you, including when the timed
/// code panics, and should be preferred over calling `enter()`/`exit()` directly.
///
/// By default every tracker owns an isolated accounting stack. Use
/// [`Tracker::builder()`] to disable timing or to share a stack between trackers.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use time_tracker::{CallInfo, CollectingSink, Tracker};
///
/// fn fibo(tracker: &Tracker, n: u64) -> time_tracker::Result<u64> {
///     tracker.track(CallInfo::new("fibo").arg(n), || -> time_tracker::Result<u64> {
///         if n < 2 {
///             Ok(1)
///         } else {
///             Ok(fibo(tracker, n - 1)? + fibo(tracker, n - 2)?)
///         }
///     })?
/// }
///
/// let sink = Arc::new(CollectingSink::new());
/// let tracker = Tracker::new(Arc::clone(&sink));
///
/// assert_eq!(fibo(&tracker, 2).unwrap(), 2);
/// assert_eq!(sink.len(), 3);
///
/// let records = sink.records();
/// let outer = &records[2];
/// assert_eq!(
///     outer.partial_time(),
///     outer.total_time() - records[0].total_time() - records[1].total_time()
/// );
/// ```
#[derive(Debug)]
pub struct Tracker {
    name: Option<String>,
    enabled: bool,
    stack: SharedStack,
    sink: Arc<dyn RecordSink>,
}

impl Tracker {
    /// Creates an enabled tracker with an isolated accounting stack.
    #[must_use]
    pub fn new<S>(sink: Arc<S>) -> Self
    where
        S: RecordSink + 'static,
    {
        Self::builder(sink).build()
    }

    /// Starts building a tracker that reports to the given sink.
    pub fn builder<S>(sink: Arc<S>) -> TrackerBuilder
    where
        S: RecordSink + 'static,
    {
        TrackerBuilder::new(sink)
    }

    /// `stack_origin` names where the builder got the stack from and is only logged.
    pub(crate) fn new_inner(
        name: Option<String>,
        enabled: bool,
        stack: SharedStack,
        stack_origin: &'static str,
        sink: Arc<dyn RecordSink>,
    ) -> Self {
        debug!(
            name = name.as_deref().unwrap_or_default(),
            enabled,
            stack = stack_origin,
            "time tracker created"
        );

        Self {
            name,
            enabled,
            stack,
            sink,
        }
    }

    /// The diagnostic label of the tracker, if one was set.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Whether the tracker times calls.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The accounting stack this tracker records call frames on.
    #[must_use]
    pub fn stack(&self) -> &SharedStack {
        &self.stack
    }

    /// Marks the start of a timed call. Does nothing if the tracker is disabled.
    ///
    /// Must be followed by exactly one [`exit()`](Self::exit) once the call ends, with
    /// frames closed in LIFO order.
    pub fn enter(&self) {
        if self.enabled {
            self.stack.enter();
        }
    }

    /// Marks the end of the most recently entered call and sends its record to the sink.
    /// Does nothing if the tracker is disabled.
    ///
    /// # Errors
    ///
    /// * [`Error::UnbalancedExit`] if no call is active on the stack of this tracker.
    /// * [`Error::Sink`] if the sink failed to log the record. The call has still been
    ///   closed on the stack.
    pub fn exit(&self, call: CallInfo) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let timing = self.stack.exit()?;
        let record = CallRecord::new(call, timing);

        trace!(
            tracker = self.name.as_deref().unwrap_or_default(),
            call = record.name(),
            total = ?timing.total(),
            partial = ?timing.partial(),
            "call completed"
        );

        self.sink.log(&record).map_err(|source| Error::Sink {
            name: record.name().to_owned(),
            source,
        })
    }

    /// Starts a timed call that ends when the returned span is finished or dropped.
    ///
    /// Dropping the span during panic unwinding still completes the call, so the record
    /// reflects the time up to the panic. Use [`CallSpan::finish()`] to receive sink
    /// errors; a span that is merely dropped can only log them.
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
    /// {
    ///     let _span = tracker.measure(CallInfo::new("load_config"));
    ///     // Work done here is timed.
    /// }
    ///
    /// assert_eq!(sink.records()[0].name(), "load_config");
    /// ```
    pub fn measure(&self, call: CallInfo) -> CallSpan<'_> {
        CallSpan::new(self, call)
    }

    /// Runs `body` as a timed call and returns its result.
    ///
    /// Whatever `body` returns, including a `Result` carrying its own error, is passed
    /// through unchanged inside `Ok`. If `body` panics, the call is still completed and
    /// recorded before the panic continues to unwind. A disabled tracker runs `body`
    /// directly.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Sink`] if the sink failed to log the record. The value returned
    /// by `body` is lost in that case.
    pub fn track<R>(&self, call: CallInfo, body: impl FnOnce() -> R) -> Result<R> {
        if !self.enabled {
            return Ok(body());
        }

        let span = self.measure(call);
        let result = body();
        span.finish()?;

        Ok(result)
    }

    /// Returns a new function that times every invocation of `function`.
    ///
    /// The argument of each invocation is moved into the record as its positional
    /// argument and `function` borrows it from there, so `A` needs no `Clone`. Functions
    /// of several arguments can take a tuple. If the tracker is disabled, the returned
    /// function calls `function` directly.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    ///
    /// use time_tracker::{CollectingSink, Tracker};
    ///
    /// let sink = Arc::new(CollectingSink::new());
    /// let tracker = Tracker::new(Arc::clone(&sink));
    ///
    /// let area = tracker.wrap("area", |&(w, h): &(u32, u32)| w * h);
    ///
    /// assert_eq!(area((3, 4)).unwrap(), 12);
    /// assert_eq!(format!("{:?}", sink.records()[0].args()), "[(3, 4)]");
    /// ```
    pub fn wrap<A, R, F>(&self, name: impl Into<String>, function: F) -> impl Fn(A) -> Result<R>
    where
        A: Debug + Send + Sync + 'static,
        F: Fn(&A) -> R,
    {
        let name = name.into();

        move |arg: A| {
            if !self.enabled {
                return Ok(function(&arg));
            }

            let arg = Arc::new(arg);
            let recorded: ArgValue = Arc::<A>::clone(&arg);
            self.track(CallInfo::new(name.clone()).arg_value(recorded), || function(&arg))
        }
    }
}
