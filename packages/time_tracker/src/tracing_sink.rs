use tracing::info;

use crate::{CallRecord, RecordSink, SinkError};

/// Emits every record as a structured `tracing` event.
///
/// Events are logged at `INFO` level with target `time_tracker` and carry the fields
/// `name`, `args`, `kwargs`, `total_s` and `partial_s`. What happens to them afterwards
/// is up to the subscriber installed by the application. This sink never fails.
#[derive(Debug, Default)]
pub struct TracingSink;

impl TracingSink {
    /// Creates the sink.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl RecordSink for TracingSink {
    fn log(&self, record: &CallRecord) -> Result<(), SinkError> {
        info!(
            target: "time_tracker",
            name = record.name(),
            args = ?record.args(),
            kwargs = ?record.kwargs(),
            total_s = record.timing().total_secs(),
            partial_s = record.timing().partial_secs(),
            "call completed"
        );

        Ok(())
    }
}
