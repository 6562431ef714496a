// ============================================================================
// Status Errors
// Error types for parsing and converting ternary status codes
// ============================================================================

use std::fmt;

/// Errors that can occur when building a status from external input.
///
/// The cell accessors themselves never fail; only conversions into
/// [`TernaryStatus`](super::TernaryStatus) and configuration loading do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusError {
    /// Input string is neither a named code nor an integer
    InvalidInput,
    /// Integer does not fit the 32-bit status width
    OutOfRange,
    /// Configuration document could not be decoded
    #[cfg(feature = "serde")]
    InvalidConfig,
}

impl fmt::Display for StatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusError::InvalidInput => write!(
                f,
                "invalid input: expected `exact`, `up`, `down` or an integer"
            ),
            StatusError::OutOfRange => {
                write!(f, "out of range: status must fit in a 32-bit integer")
            },
            #[cfg(feature = "serde")]
            StatusError::InvalidConfig => write!(f, "invalid configuration document"),
        }
    }
}

impl std::error::Error for StatusError {}

/// Result type alias for status conversions
pub type StatusResult<T> = Result<T, StatusError>;
