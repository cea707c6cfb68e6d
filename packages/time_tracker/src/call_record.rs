use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use crate::{ArgValue, CallInfo, Timing};

/// The structured record emitted to a [`RecordSink`][crate::RecordSink] for every
/// completed call of an enabled tracker.
///
/// The `Display` implementation renders the reference console line:
///
/// ```text
/// [TimeTracking] fibo [2] {} - total: 0.000012 s - partial: 0.000004 s
/// ```
#[derive(Clone, Debug)]
pub struct CallRecord {
    call: CallInfo,
    timing: Timing,
}

impl CallRecord {
    pub(crate) fn new(call: CallInfo, timing: Timing) -> Self {
        Self { call, timing }
    }

    /// Name of the call.
    #[must_use]
    pub fn name(&self) -> &str {
        self.call.name()
    }

    /// Positional arguments of the call.
    #[must_use]
    pub fn args(&self) -> &[ArgValue] {
        self.call.args()
    }

    /// Keyword arguments of the call.
    #[must_use]
    pub fn kwargs(&self) -> &BTreeMap<String, ArgValue> {
        self.call.kwargs()
    }

    /// Wall-clock time of the call including nested tracked calls.
    #[must_use]
    pub fn total_time(&self) -> Duration {
        self.timing.total()
    }

    /// Wall-clock time of the call excluding nested tracked calls.
    #[must_use]
    pub fn partial_time(&self) -> Duration {
        self.timing.partial()
    }

    /// Both measurements.
    #[must_use]
    pub fn timing(&self) -> Timing {
        self.timing
    }
}

impl fmt::Display for CallRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[TimeTracking] {} {:?} {:?} - total: {:3.6} s - partial: {:3.6} s",
            self.name(),
            self.args(),
            self.kwargs(),
            self.timing.total_secs(),
            self.timing.partial_secs()
        )
    }
}
