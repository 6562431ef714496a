// ============================================================================
// Status Cell Configuration
// Initial value and tracing behavior for explicit status cells
// ============================================================================

use super::ternary::TernaryStatus;

#[cfg(feature = "serde")]
use super::errors::{StatusError, StatusResult};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for creating a [`TernaryStatusCell`](super::TernaryStatusCell).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatusCellConfig {
    /// Value the cell holds before the first write
    pub initial: TernaryStatus,

    /// Emit a `trace` event on every write
    pub trace_writes: bool,
}

impl StatusCellConfig {
    /// Create a configuration starting at zero with tracing off
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: Set the initial value
    pub fn with_initial(mut self, initial: impl Into<TernaryStatus>) -> Self {
        self.initial = initial.into();
        self
    }

    /// Builder method: Enable or disable write tracing
    pub fn with_trace_writes(mut self, enabled: bool) -> Self {
        self.trace_writes = enabled;
        self
    }

    /// Decode a configuration from JSON.
    ///
    /// Missing fields fall back to their defaults.
    ///
    /// # Errors
    /// Returns `InvalidConfig` if the document is not valid JSON for this type.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> StatusResult<Self> {
        let config: Self = serde_json::from_str(json).map_err(|err| {
            tracing::debug!(error = %err, "rejected status cell configuration");
            StatusError::InvalidConfig
        })?;
        Ok(config)
    }
}
