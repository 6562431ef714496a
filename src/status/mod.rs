// ============================================================================
// Status Module
// Ternary rounding status: typed code, explicit cell, implicit channel
// ============================================================================
//
// This module provides:
// - TernaryStatus: typed view of the rounding-direction code
// - TernaryStatusCell: explicit, shareable storage for one code
// - get_retval/set_retval: per-thread channel for out-of-band reporting
// - Rounded<T>: value and status returned together
// - StatusError: error types for parsing and configuration
//
// Design principles:
// - Accessors are total: they never validate, fail or panic
// - Any i32 is a legal status and is stored verbatim
// - No unscoped process-wide state

mod cell;
mod channel;
mod config;
mod errors;
mod rounded;
mod ternary;

#[cfg(test)]
mod test_support;

pub use cell::TernaryStatusCell;
pub use channel::{get_retval, set_retval, take_retval, with_retval};
pub use config::StatusCellConfig;
pub use errors::{StatusError, StatusResult};
pub use rounded::Rounded;
pub use ternary::TernaryStatus;
