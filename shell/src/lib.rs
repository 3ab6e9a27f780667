//! Shell and filesystem helpers for small automation commands.
//!
//! - **[`core`]**: pure logic (date formatting, path arithmetic).
//! - **[`io`]**: side effects (existence checks, subprocesses, git lookups,
//!   ensure operations, console banners).
//!
//! Ensure operations return [`error::EnsureError`] instead of exiting, so the
//! binary decides how to terminate (see [`exit_codes`]).

pub mod core;
pub mod error;
pub mod exit_codes;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
