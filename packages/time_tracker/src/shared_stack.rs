use std::sync::{Arc, LazyLock, Mutex};

use crate::pal::ClockFacade;
use crate::{AccountingStack, ERR_POISONED_LOCK, Result, Timing};

static PROCESS_WIDE: LazyLock<SharedStack> = LazyLock::new(SharedStack::new);

/// A cloneable handle to one [`AccountingStack`] that several trackers can use together.
///
/// Trackers that use the same stack see each other's calls: when a function timed by one
/// tracker calls a function timed by another, the inner time is subtracted from the
/// outer function's partial time exactly as if one tracker timed both.
///
/// The lock inside the handle is held only for the duration of a single push or pop.
/// It makes the handle safe to move between threads but does not make interleaved
/// calls from different threads meaningful; frames must still nest.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use time_tracker::{CollectingSink, SharedStack, Tracker};
///
/// let sink = Arc::new(CollectingSink::new());
/// let stack = SharedStack::new();
///
/// let parsing = Tracker::builder(Arc::clone(&sink)).shared_stack(stack.clone()).build();
/// let io = Tracker::builder(Arc::clone(&sink)).shared_stack(stack.clone()).build();
///
/// assert!(parsing.stack().ptr_eq(io.stack()));
/// ```
#[derive(Clone, Debug)]
pub struct SharedStack {
    inner: Arc<Mutex<AccountingStack>>,
}

impl SharedStack {
    /// Creates a handle to a new, idle accounting stack.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(ClockFacade::real())
    }

    pub(crate) fn with_clock(clock: ClockFacade) -> Self {
        Self {
            inner: Arc::new(Mutex::new(AccountingStack::with_clock(clock))),
        }
    }

    /// Returns a handle to the single process-wide stack.
    ///
    /// The stack is created on first use and lives until the process exits. Every call
    /// returns a handle to the same instance. Trackers built with `isolated(false)` bind
    /// to this stack.
    #[must_use]
    pub fn process_wide() -> Self {
        PROCESS_WIDE.clone()
    }

    /// Opens a new call frame on the underlying stack.
    pub fn enter(&self) {
        self.inner.lock().expect(ERR_POISONED_LOCK).enter();
    }

    /// Closes the most recent call frame on the underlying stack.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnbalancedExit`][crate::Error::UnbalancedExit] if no frame is active.
    pub fn exit(&self) -> Result<Timing> {
        self.inner.lock().expect(ERR_POISONED_LOCK).exit()
    }

    /// Number of active frames on the underlying stack.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.inner.lock().expect(ERR_POISONED_LOCK).depth()
    }

    /// Whether both handles refer to the same accounting stack.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Default for SharedStack {
    fn default() -> Self {
        Self::new()
    }
}
