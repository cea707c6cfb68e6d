use std::time::Instant;

#[cfg(test)]
use crate::pal::FakeClock;
use crate::pal::real::REAL_CLOCK;
use crate::pal::{Clock, RealClock};

#[derive(Clone, Debug)]
pub(crate) enum ClockFacade {
    Real(&'static RealClock),

    #[cfg(test)]
    Fake(FakeClock),
}

impl ClockFacade {
    pub(crate) fn real() -> Self {
        Self::Real(&REAL_CLOCK)
    }

    #[cfg(test)]
    pub(crate) fn fake(clock: FakeClock) -> Self {
        Self::Fake(clock)
    }
}

impl Clock for ClockFacade {
    fn now(&self) -> Instant {
        match self {
            Self::Real(c) => c.now(),
            #[cfg(test)]
            Self::Fake(c) => c.now(),
        }
    }
}
