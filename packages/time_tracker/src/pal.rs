//! Platform abstraction layer for timestamps.
//!
//! Accounting stacks read the current time through this layer so that tests can
//! substitute a fake clock that only moves when told to, making every measured
//! duration exact.

mod abstractions;
mod facade;
#[cfg(test)]
mod fake;
mod real;

pub(crate) use abstractions::Clock;
pub(crate) use facade::ClockFacade;
#[cfg(test)]
pub(crate) use fake::FakeClock;
pub(crate) use real::RealClock;
