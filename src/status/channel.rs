// ============================================================================
// Implicit Status Channel
// Per-thread ternary return value with get/set entry points
// ============================================================================
//
// Drop-in channel for code that reports a rounding status out of band
// instead of in its return type. Storage is thread-local: each thread starts
// at zero and never observes another thread's writes.

use std::cell::Cell;

thread_local! {
    static RETVAL: Cell<i32> = const { Cell::new(0) };
}

/// Returns the calling thread's ternary return value.
#[inline]
pub fn get_retval() -> i32 {
    RETVAL.get()
}

/// Sets the calling thread's ternary return value.
#[inline]
pub fn set_retval(retval: i32) {
    RETVAL.set(retval);
    tracing::trace!(retval, "ternary retval set");
}

/// Returns the current value and resets the channel to zero.
#[inline]
pub fn take_retval() -> i32 {
    let previous = RETVAL.replace(0);
    tracing::trace!(previous, "ternary retval taken");
    previous
}

/// Run `f` with the channel temporarily holding `retval`.
///
/// The previous value is restored when `f` returns or unwinds, so writes made
/// inside `f` do not leak to the caller.
pub fn with_retval<F, R>(retval: i32, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _restore = RestoreGuard(RETVAL.replace(retval));
    tracing::trace!(retval, "ternary retval scoped");
    f()
}

struct RestoreGuard(i32);

impl Drop for RestoreGuard {
    fn drop(&mut self) {
        RETVAL.set(self.0);
        tracing::trace!(retval = self.0, "ternary retval restored");
    }
}
