#![cfg_attr(coverage_nightly, coverage(off))]

use mockall::mock;

use crate::{CallRecord, RecordSink, SinkError};

mock! {
    #[derive(Debug)]
    pub Sink {
    }

    impl RecordSink for Sink {
        fn log(&self, record: &CallRecord) -> Result<(), SinkError>;
    }
}
