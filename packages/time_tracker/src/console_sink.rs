use std::fmt::Debug;
use std::io::{self, Stdout, Write};
use std::sync::Mutex;

use crate::{CallRecord, ERR_POISONED_LOCK, RecordSink, SinkError};

/// Writes one line per record in the reference console format.
///
/// ```text
/// [TimeTracking] dodo [1, 0.3] {} - total: 0.300412 s - partial: 0.300412 s
/// ```
///
/// Writes go to stdout by default; any other [`Write`] target can be supplied via
/// [`with_writer()`](Self::with_writer). Write failures are returned to the tracker.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use time_tracker::{CallInfo, ConsoleSink, Tracker};
///
/// let tracker = Tracker::new(Arc::new(ConsoleSink::stdout()));
///
/// let sum = tracker
///     .track(CallInfo::new("sum").arg(10), || (0..10).sum::<u32>())
///     .unwrap();
/// assert_eq!(sum, 45);
/// ```
#[derive(Debug)]
pub struct ConsoleSink<W = Stdout> {
    writer: Mutex<W>,
}

impl ConsoleSink<Stdout> {
    /// Creates a sink that writes to stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl<W> ConsoleSink<W>
where
    W: Write + Send,
{
    /// Creates a sink that writes to the given target.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Consumes the sink and returns the write target.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer.into_inner().expect(ERR_POISONED_LOCK)
    }
}

impl<W> RecordSink for ConsoleSink<W>
where
    W: Write + Send + Debug,
{
    fn log(&self, record: &CallRecord) -> Result<(), SinkError> {
        let mut writer = self.writer.lock().expect(ERR_POISONED_LOCK);
        writeln!(writer, "{record}")?;
        writer.flush()?;
        Ok(())
    }
}
