use thiserror::Error;

/// Error type returned by a [`RecordSink`][crate::RecordSink] that failed to log a record.
pub type SinkError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur when completing a timed call.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A call frame was exited on an accounting stack that had no active frame.
    ///
    /// This means some adapter called `exit()` without a matching `enter()`. The stack
    /// is left unchanged when this is reported.
    #[error("exit() called on an accounting stack with no active call frame")]
    UnbalancedExit,

    /// The record sink failed to persist or display the record of a completed call.
    ///
    /// The measurement itself was completed and the accounting stack is consistent.
    #[error("record sink failed to log the record of '{name}'")]
    Sink {
        /// Name of the call whose record could not be logged.
        name: String,

        /// The error reported by the sink.
        #[source]
        source: SinkError,
    },
}

/// A specialized `Result` type for time tracking operations, returning the crate's
/// [`Error`] type as the error value.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::error::Error as _;
    use std::fmt::Debug;
    use std::io;

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(Error: Send, Sync, Debug);

    #[test]
    fn sink_error_exposes_source() {
        let error = Error::Sink {
            name: "fibo".to_string(),
            source: Box::new(io::Error::other("disk full")),
        };

        assert_eq!(error.to_string(), "record sink failed to log the record of 'fibo'");
        assert_eq!(
            error.source().map(ToString::to_string).as_deref(),
            Some("disk full")
        );
    }
}
