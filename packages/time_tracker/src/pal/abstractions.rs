//! Platform abstraction trait definitions.

use std::fmt::Debug;
use std::time::Instant;

/// Provides the current timestamp.
///
/// Implementations must be monotonic: a later call never returns an earlier instant.
/// Self time is computed by subtraction, so a clock that jumps backwards would
/// produce meaningless partial times.
pub(crate) trait Clock: Debug + Send + Sync + 'static {
    /// Gets the current timestamp.
    fn now(&self) -> Instant;
}
