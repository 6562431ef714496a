// ============================================================================
// Ternary Status Cell
// Explicit, shareable storage for one status code
// ============================================================================

use super::config::StatusCellConfig;
use super::ternary::TernaryStatus;
use crossbeam::utils::CachePadded;
use std::fmt;
use std::sync::atomic::{AtomicI32, Ordering};

/// One integer slot readable and writable by every holder.
///
/// The cell is a context object: callers that need a status to outlive a
/// call pass the cell (or an `Arc` of it) explicitly instead of reaching for
/// hidden global state. Accesses use `Relaxed` ordering, so concurrent
/// writers race with last-writer-wins semantics and no ordering relative to
/// other memory, but never tear.
///
/// # Example
/// ```
/// use ternary_status::status::TernaryStatusCell;
///
/// let cell = TernaryStatusCell::new();
/// assert_eq!(cell.get(), 0);
/// cell.set(-1);
/// cell.set(0);
/// assert_eq!(cell.get(), 0);
/// ```
pub struct TernaryStatusCell {
    // Padded so cells packed next to each other don't share a cache line
    value: CachePadded<AtomicI32>,
    trace_writes: bool,
}

impl TernaryStatusCell {
    /// Create a cell holding zero
    pub const fn new() -> Self {
        Self::with_value(0)
    }

    /// Create a cell holding `value`
    pub const fn with_value(value: i32) -> Self {
        Self {
            value: CachePadded::new(AtomicI32::new(value)),
            trace_writes: false,
        }
    }

    /// Create a cell from a configuration
    pub fn from_config(config: &StatusCellConfig) -> Self {
        Self {
            value: CachePadded::new(AtomicI32::new(config.initial.code())),
            trace_writes: config.trace_writes,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Most recently stored value, or the initial value if never set.
    #[inline]
    pub fn get(&self) -> i32 {
        self.value.load(Ordering::Relaxed)
    }

    /// Overwrite the stored value unconditionally.
    #[inline]
    pub fn set(&self, value: i32) {
        self.value.store(value, Ordering::Relaxed);
        if self.trace_writes {
            tracing::trace!(value, "ternary status set");
        }
    }

    /// Store `value` and return what was there before.
    #[inline]
    pub fn replace(&self, value: i32) -> i32 {
        let previous = self.value.swap(value, Ordering::Relaxed);
        if self.trace_writes {
            tracing::trace!(value, previous, "ternary status replaced");
        }
        previous
    }

    /// Store zero.
    #[inline]
    pub fn reset(&self) {
        self.set(0);
    }

    #[inline]
    pub fn get_status(&self) -> TernaryStatus {
        TernaryStatus::new(self.get())
    }

    #[inline]
    pub fn set_status(&self, status: TernaryStatus) {
        self.set(status.code());
    }
}

impl Default for TernaryStatusCell {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TernaryStatusCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TernaryStatusCell")
            .field("value", &self.get())
            .field("trace_writes", &self.trace_writes)
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
