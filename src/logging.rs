// ============================================================================
// Logging
// Optional tracing subscriber setup for binaries and tests
// ============================================================================

use tracing::Level;

/// Install a formatting subscriber printing events at `level` and above.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_logging(level: Level) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .is_ok()
}
