// ============================================================================
// Rounded Result
// A value bundled with the ternary status of the rounding that produced it
// ============================================================================

use super::cell::TernaryStatusCell;
use super::channel::set_retval;
use super::ternary::TernaryStatus;

/// Result of a rounded computation together with its ternary status.
///
/// Returning this directly keeps the status next to the value it describes.
/// [`publish`](Rounded::publish) and [`record_into`](Rounded::record_into)
/// bridge to callers that still read the status from a channel or cell.
///
/// # Example
/// ```
/// use ternary_status::status::{get_retval, Rounded, TernaryStatus};
///
/// // 7 / 2 truncated to 3, below the exact 3.5
/// let quotient = Rounded::new(3, TernaryStatus::ROUNDED_DOWN);
/// assert_eq!(quotient.publish(), 3);
/// assert_eq!(get_retval(), -1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub struct Rounded<T> {
    value: T,
    status: TernaryStatus,
}

impl<T> Rounded<T> {
    #[inline]
    pub fn new(value: T, status: TernaryStatus) -> Self {
        Self { value, status }
    }

    /// A value that needed no rounding
    #[inline]
    pub fn exact(value: T) -> Self {
        Self::new(value, TernaryStatus::EXACT)
    }

    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    #[inline]
    pub fn status(&self) -> TernaryStatus {
        self.status
    }

    #[inline]
    pub fn into_parts(self) -> (T, TernaryStatus) {
        (self.value, self.status)
    }

    /// Transform the value, keeping the status.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Rounded<U>
    where
        F: FnOnce(T) -> U,
    {
        Rounded::new(f(self.value), self.status)
    }

    /// Write the status to the calling thread's channel and return the value.
    #[inline]
    pub fn publish(self) -> T {
        set_retval(self.status.code());
        self.value
    }

    /// Write the status to `cell` and return the value.
    #[inline]
    pub fn record_into(self, cell: &TernaryStatusCell) -> T {
        cell.set_status(self.status);
        self.value
    }
}
