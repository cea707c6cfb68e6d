//! Fake clock implementation for testing.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::pal::abstractions::Clock;

/// Fake clock whose time only advances when a test says so.
///
/// Clones share the same underlying time, so a test can keep one clone and advance
/// the time observed by an accounting stack that owns another clone.
#[derive(Clone, Debug)]
pub(crate) struct FakeClock {
    now: Arc<Mutex<Instant>>,
}

impl FakeClock {
    /// Creates a fake clock frozen at the current real time.
    pub(crate) fn new() -> Self {
        Self {
            now: Arc::new(Mutex::new(Instant::now())),
        }
    }

    /// Moves the time of this clock and all its clones forward.
    pub(crate) fn advance(&self, by: Duration) {
        let mut now = self
            .now
            .lock()
            .expect("FakeClock state lock should not be poisoned");

        *now = now
            .checked_add(by)
            .expect("fake clock advanced beyond the representable range of Instant");
    }
}

impl Clock for FakeClock {
    fn now(&self) -> Instant {
        *self
            .now
            .lock()
            .expect("FakeClock state lock should not be poisoned")
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn time_is_frozen_until_advanced() {
        let clock = FakeClock::new();

        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn advance_moves_time_forward() {
        let clock = FakeClock::new();
        let before = clock.now();

        clock.advance(Duration::from_millis(150));

        assert_eq!(clock.now().duration_since(before), Duration::from_millis(150));
    }

    #[test]
    fn shared_state_between_clones() {
        let clock1 = FakeClock::new();
        let clock2 = clock1.clone();
        let before = clock2.now();

        clock1.advance(Duration::from_millis(100));

        assert_eq!(clock2.now().duration_since(before), Duration::from_millis(100));
    }
}
