use std::sync::Mutex;

use crate::{CallRecord, ERR_POISONED_LOCK, RecordSink, SinkError};

/// Keeps every record in memory, in the order the calls completed.
///
/// Nested calls complete before the calls that contain them, so records appear in
/// post-order: children first, then their parent.
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
/// tracker
///     .track(CallInfo::new("outer"), || {
///         tracker.track(CallInfo::new("inner"), || ()).unwrap();
///     })
///     .unwrap();
///
/// let names: Vec<String> = sink.records().iter().map(|r| r.name().to_string()).collect();
/// assert_eq!(names, ["inner", "outer"]);
/// ```
#[derive(Debug, Default)]
pub struct CollectingSink {
    records: Mutex<Vec<CallRecord>>,
}

impl CollectingSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A snapshot of the records received so far.
    #[must_use]
    pub fn records(&self) -> Vec<CallRecord> {
        self.records.lock().expect(ERR_POISONED_LOCK).clone()
    }

    /// Number of records received so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.lock().expect(ERR_POISONED_LOCK).len()
    }

    /// Whether no record has been received.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.lock().expect(ERR_POISONED_LOCK).is_empty()
    }

    /// Discards all records received so far.
    pub fn clear(&self) {
        self.records.lock().expect(ERR_POISONED_LOCK).clear();
    }
}

impl RecordSink for CollectingSink {
    fn log(&self, record: &CallRecord) -> Result<(), SinkError> {
        self.records
            .lock()
            .expect(ERR_POISONED_LOCK)
            .push(record.clone());
        Ok(())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::{CallInfo, Timing};

    fn record(name: &str) -> CallRecord {
        CallRecord::new(
            CallInfo::new(name),
            Timing::new(Duration::from_millis(1), Duration::from_millis(1)),
        )
    }

    #[test]
    fn keeps_records_in_arrival_order() {
        let sink = CollectingSink::new();
        assert!(sink.is_empty());

        sink.log(&record("first")).unwrap();
        sink.log(&record("second")).unwrap();

        assert_eq!(sink.len(), 2);
        let names: Vec<String> = sink.records().iter().map(|r| r.name().to_string()).collect();
        assert_eq!(names, ["first", "second"]);
    }

    #[test]
    fn clear_discards_records() {
        let sink = CollectingSink::new();
        sink.log(&record("first")).unwrap();

        sink.clear();

        assert!(sink.is_empty());
        assert!(sink.records().is_empty());
    }

    static_assertions::assert_impl_all!(CollectingSink: Send, Sync);
}
