// ============================================================================
// Ternary Status
// Typed view of the rounding-direction code
// ============================================================================

use super::errors::{StatusError, StatusResult};
use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ternary return value of a rounded computation.
///
/// By convention the sign of the code is the sign of `rounded - exact`:
/// zero means the result is exact, positive means it was rounded up and
/// negative means it was rounded down. Any `i32` is a legal status and is
/// stored verbatim; the classification helpers only look at the sign.
///
/// # Example
/// ```
/// use ternary_status::status::TernaryStatus;
/// use std::cmp::Ordering;
///
/// let status = TernaryStatus::from_ordering(Ordering::Greater);
/// assert!(status.is_rounded_up());
/// assert_eq!(status.to_string(), "up");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct TernaryStatus(i32);

impl TernaryStatus {
    /// Result equals the exact value
    pub const EXACT: Self = Self(0);

    /// Result is greater than the exact value
    pub const ROUNDED_UP: Self = Self(1);

    /// Result is less than the exact value
    pub const ROUNDED_DOWN: Self = Self(-1);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Wrap a raw status code.
    #[inline]
    pub const fn new(code: i32) -> Self {
        Self(code)
    }

    /// Build the canonical code from `rounded.cmp(&exact)`.
    #[inline]
    pub const fn from_ordering(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Self::ROUNDED_DOWN,
            Ordering::Equal => Self::EXACT,
            Ordering::Greater => Self::ROUNDED_UP,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The raw code, exactly as stored.
    #[inline]
    pub const fn code(self) -> i32 {
        self.0
    }

    /// Rounding direction: the sign of the code relative to zero.
    #[inline]
    pub fn direction(self) -> Ordering {
        self.0.cmp(&0)
    }

    #[inline]
    pub const fn is_exact(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_rounded_up(self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub const fn is_rounded_down(self) -> bool {
        self.0 < 0
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<i32> for TernaryStatus {
    #[inline]
    fn from(code: i32) -> Self {
        Self(code)
    }
}

impl From<TernaryStatus> for i32 {
    #[inline]
    fn from(status: TernaryStatus) -> Self {
        status.0
    }
}

impl From<Ordering> for TernaryStatus {
    #[inline]
    fn from(ordering: Ordering) -> Self {
        Self::from_ordering(ordering)
    }
}

impl TryFrom<i64> for TernaryStatus {
    type Error = StatusError;

    fn try_from(code: i64) -> StatusResult<Self> {
        i32::try_from(code)
            .map(Self)
            .map_err(|_| StatusError::OutOfRange)
    }
}

// ============================================================================
// Display and Parsing
// ============================================================================

impl fmt::Display for TernaryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            0 => write!(f, "exact"),
            1 => write!(f, "up"),
            -1 => write!(f, "down"),
            other => write!(f, "{}", other),
        }
    }
}

impl std::str::FromStr for TernaryStatus {
    type Err = StatusError;

    /// Parse a named code or a raw integer.
    ///
    /// # Examples
    /// - "exact" -> 0
    /// - "UP" -> 1
    /// - " down " -> -1
    /// - "-7" -> -7
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(StatusError::InvalidInput);
        }

        if s.eq_ignore_ascii_case("exact") {
            return Ok(Self::EXACT);
        }
        if s.eq_ignore_ascii_case("up") {
            return Ok(Self::ROUNDED_UP);
        }
        if s.eq_ignore_ascii_case("down") {
            return Ok(Self::ROUNDED_DOWN);
        }

        // Integers wider than i32 are range errors, not syntax errors
        let wide: i64 = s.parse().map_err(|_| StatusError::InvalidInput)?;
        Self::try_from(wide)
    }
}

// ============================================================================
// Tests
// ============================================================================
