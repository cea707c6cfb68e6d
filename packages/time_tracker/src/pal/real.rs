use std::time::Instant;

use crate::pal::Clock;

/// Reads the operating system monotonic clock via [`Instant::now()`].
#[derive(Debug)]
pub(crate) struct RealClock;

pub(crate) static REAL_CLOCK: RealClock = RealClock;

impl Clock for RealClock {
    #[cfg_attr(test, mutants::skip)] // Real time cannot be asserted exactly.
    fn now(&self) -> Instant {
        Instant::now()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn real_clock_is_monotonic() {
        let first = REAL_CLOCK.now();
        let second = REAL_CLOCK.now();

        assert!(second >= first);
    }
}
