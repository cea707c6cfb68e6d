use std::time::Duration;

/// The two measurements taken for one completed call.
///
/// * `total` is the wall-clock time between entering and exiting the call, including
///   everything the call did.
/// * `partial` is `total` minus the total time of the tracked calls made directly
///   inside it. This is the time the call spent on its own work (its self time).
///
/// `partial` never exceeds `total`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Timing {
    total: Duration,
    partial: Duration,
}

impl Timing {
    pub(crate) fn new(total: Duration, partial: Duration) -> Self {
        debug_assert!(partial <= total, "partial time cannot exceed total time");

        Self { total, partial }
    }

    /// Wall-clock time of the call including all nested calls.
    #[must_use]
    pub fn total(&self) -> Duration {
        self.total
    }

    /// Wall-clock time of the call excluding nested tracked calls.
    #[must_use]
    pub fn partial(&self) -> Duration {
        self.partial
    }

    /// Total time in fractional seconds.
    #[must_use]
    pub fn total_secs(&self) -> f64 {
        self.total.as_secs_f64()
    }

    /// Partial time in fractional seconds.
    #[must_use]
    pub fn partial_secs(&self) -> f64 {
        self.partial.as_secs_f64()
    }

    /// Time attributed to nested tracked calls, i.e. `total - partial`.
    #[must_use]
    pub fn nested(&self) -> Duration {
        self.total.saturating_sub(self.partial)
    }
}
