use std::sync::Arc;

use crate::pal::ClockFacade;
use crate::{RecordSink, SharedStack, Tracker};

/// Creates instances of [`Tracker`].
///
/// Required parameters:
/// * `sink` (given to [`Tracker::builder()`])
///
/// Optional parameters:
/// * `name` - label used in diagnostic logging. Defaults to none.
/// * `enabled` - whether calls are timed at all. Defaults to `true`.
/// * `isolated` - whether the tracker gets an accounting stack of its own (`true`, the
///   default) or binds to the process-wide stack returned by
///   [`SharedStack::process_wide()`] (`false`).
/// * `shared_stack` - an explicit stack to use. Takes precedence over `isolated`.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use time_tracker::{SharedStack, Tracker, TracingSink};
///
/// let tracker = Tracker::builder(Arc::new(TracingSink::new()))
///     .name("storage")
///     .isolated(false)
///     .build();
///
/// assert!(tracker.stack().ptr_eq(&SharedStack::process_wide()));
/// ```
#[derive(Debug)]
#[must_use]
pub struct TrackerBuilder {
    sink: Arc<dyn RecordSink>,
    name: Option<String>,
    enabled: bool,
    isolated: bool,
    stack: Option<SharedStack>,
    clock: ClockFacade,
}

impl TrackerBuilder {
    pub(crate) fn new(sink: Arc<dyn RecordSink>) -> Self {
        Self {
            sink,
            name: None,
            enabled: true,
            isolated: true,
            stack: None,
            clock: ClockFacade::real(),
        }
    }

    /// Sets a label that identifies the tracker in diagnostic logging.
    pub fn name(self, name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..self
        }
    }

    /// Sets whether the tracker times calls.
    ///
    /// A disabled tracker performs no clock reads, no stack operations and emits no
    /// records; its adapters call the wrapped code directly.
    pub fn enabled(self, enabled: bool) -> Self {
        Self { enabled, ..self }
    }

    /// Sets whether the tracker gets an accounting stack of its own.
    ///
    /// Isolated trackers cannot see each other's calls: a call timed by one is not
    /// subtracted from the partial time of an enclosing call timed by another. Trackers
    /// built with `isolated(false)` all share the process-wide stack and attribute
    /// nested time to each other.
    pub fn isolated(self, isolated: bool) -> Self {
        Self { isolated, ..self }
    }

    /// Uses the given stack, shared with every other tracker that receives a handle to it.
    ///
    /// This takes precedence over [`isolated()`](Self::isolated).
    pub fn shared_stack(self, stack: SharedStack) -> Self {
        Self {
            stack: Some(stack),
            ..self
        }
    }

    #[cfg(test)]
    pub(crate) fn clock(self, clock: ClockFacade) -> Self {
        Self { clock, ..self }
    }

    /// Creates the tracker.
    #[must_use]
    pub fn build(self) -> Tracker {
        let (stack, origin) = match (self.stack, self.isolated) {
            (Some(stack), _) => (stack, "injected"),
            (None, true) => (SharedStack::with_clock(self.clock), "isolated"),
            (None, false) => (SharedStack::process_wide(), "process_wide"),
        };

        Tracker::new_inner(self.name, self.enabled, stack, origin, self.sink)
    }
}
