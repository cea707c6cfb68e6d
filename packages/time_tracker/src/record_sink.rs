use std::fmt::Debug;

use crate::{CallRecord, SinkError};

/// Receives the record of every completed call of an enabled tracker.
///
/// This is the logging collaborator of a [`Tracker`][crate::Tracker]: it decides how
/// records are persisted or displayed. Ready-made implementations are
/// [`ConsoleSink`][crate::ConsoleSink], [`TracingSink`][crate::TracingSink] and
/// [`CollectingSink`][crate::CollectingSink].
///
/// Failures are not swallowed. An error returned from [`log()`](Self::log) is handed back
/// to the caller of the tracker as [`Error::Sink`][crate::Error::Sink], so a broken sink
/// is visible instead of silently losing measurements.
///
/// # Examples
///
/// ```
/// use std::sync::atomic::{AtomicU64, Ordering};
///
/// use time_tracker::{CallRecord, RecordSink, SinkError};
///
/// #[derive(Debug, Default)]
/// struct SlowCallCounter {
///     slow_calls: AtomicU64,
/// }
///
/// impl RecordSink for SlowCallCounter {
///     fn log(&self, record: &CallRecord) -> Result<(), SinkError> {
///         if record.partial_time().as_millis() > 100 {
///             self.slow_calls.fetch_add(1, Ordering::Relaxed);
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait RecordSink: Debug + Send + Sync {
    /// Persists or displays the record of one completed call.
    ///
    /// # Errors
    ///
    /// Returns whatever error prevented the record from being handled.
    fn log(&self, record: &CallRecord) -> Result<(), SinkError>;
}
