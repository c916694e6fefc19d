//! Stable exit codes for motodash CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Command failed due to invalid config, unreadable files, or other errors.
pub const INVALID: i32 = 1;
/// `motodash show` found no usable saved state.
pub const NO_VEHICLE: i32 = 2;
