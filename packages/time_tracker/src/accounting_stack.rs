//! Nesting-aware bookkeeping of total and self time.

use std::fmt;
use std::time::{Duration, Instant};

use crate::pal::{Clock, ClockFacade};
use crate::{Error, Result, Timing};

/// Tracks the elapsed wall-clock time of every active call frame and attributes the
/// time of each completed frame to its parent.
///
/// Two parallel stacks are kept:
///
/// * the entering timestamp of every active frame, in call order;
/// * a "time spent in children" accumulator per active frame, plus one ground
///   accumulator at the bottom that collects the time of top-level frames.
///
/// When a frame exits, its total time is added to the accumulator of its parent, which
/// is how the parent later subtracts nested time from its own total to obtain its
/// partial (self) time. This composes under any nesting, including recursion, because
/// the stack never needs to know which function owns a frame.
///
/// Frames must be exited in LIFO order. The stack is a single-threaded structure: if
/// calls from different threads interleave on the same stack, times are attributed to
/// the wrong frames.
///
/// # Examples
///
/// ```
/// use time_tracker::AccountingStack;
///
/// let mut stack = AccountingStack::new();
///
/// stack.enter(); // outer
/// stack.enter(); // inner
/// let inner = stack.exit().unwrap();
/// let outer = stack.exit().unwrap();
///
/// assert_eq!(inner.partial(), inner.total());
/// assert_eq!(outer.partial(), outer.total() - inner.total());
/// assert!(stack.is_idle());
/// ```
pub struct AccountingStack {
    clock: ClockFacade,

    entering_times: Vec<Instant>,

    // Always one longer than `entering_times`. Index 0 is the ground accumulator.
    child_times: Vec<Duration>,
}

impl AccountingStack {
    /// Creates an idle accounting stack that reads the operating system monotonic clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(ClockFacade::real())
    }

    pub(crate) fn with_clock(clock: ClockFacade) -> Self {
        Self {
            clock,
            entering_times: Vec::new(),
            child_times: vec![Duration::ZERO],
        }
    }

    /// Opens a new call frame starting now.
    pub fn enter(&mut self) {
        self.entering_times.push(self.clock.now());
        self.child_times.push(Duration::ZERO);
    }

    /// Closes the most recently entered call frame and returns its measurements.
    ///
    /// The total time of the closed frame is credited to its parent frame (or to the
    /// ground accumulator if it was a top-level frame).
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnbalancedExit`] if there is no active frame. The stack is not
    /// modified in that case.
    pub fn exit(&mut self) -> Result<Timing> {
        let entered_at = self.entering_times.pop().ok_or(Error::UnbalancedExit)?;

        let inner_total = self
            .child_times
            .pop()
            .expect("child accumulators are always one more than active frames");

        let total = self.clock.now().saturating_duration_since(entered_at);
        let partial = total.saturating_sub(inner_total);

        let parent = self
            .child_times
            .last_mut()
            .expect("ground accumulator is never popped");

        *parent = parent
            .checked_add(total)
            .expect("nested time accumulation overflows Duration - this indicates an unrealistic scenario");

        Ok(Timing::new(total, partial))
    }

    /// Number of frames that have been entered but not yet exited.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.entering_times.len()
    }

    /// Whether no call frame is active.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.entering_times.is_empty()
    }
}

impl Default for AccountingStack {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AccountingStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountingStack")
            .field("clock", &self.clock)
            .field("entering_times", &self.entering_times)
            .field("child_times", &self.child_times)
            .finish()
    }
}

/// Renders the internal state. Entering times are shown relative to the oldest active
/// frame because `Instant` has no meaningful absolute value.
impl fmt::Display for AccountingStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let offsets: Vec<Duration> = self
            .entering_times
            .first()
            .map(|&oldest| {
                self.entering_times
                    .iter()
                    .map(|t| t.saturating_duration_since(oldest))
                    .collect()
            })
            .unwrap_or_default();

        write!(
            f,
            "entering_times: {offsets:?}, child_times: {:?}",
            self.child_times
        )
    }
}
