//! Stable exit codes for the shell-based commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// An ensure check failed (not a string, not a directory, subprocess failed).
pub const ENSURE_FAILED: i32 = 1;
/// An underlying filesystem, process or config error propagated out.
pub const UNEXPECTED: i32 = 2;
