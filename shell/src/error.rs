//! Errors returned by ensure operations.

use std::ffi::OsString;
use std::path::PathBuf;

use thiserror::Error;

/// Failure of an [`Ensure`](crate::io::ensure::Ensure) operation.
///
/// The first three variants are contract violations: the precondition the
/// caller asked for does not hold. `Unexpected` wraps whatever the underlying
/// filesystem or process call reported.
#[derive(Debug, Error)]
pub enum EnsureError {
    #[error("ensure failed: {} is not a string", .0.to_string_lossy())]
    NotString(OsString),

    #[error("ensure failed: {} is not a directory", .0.display())]
    NotDirectory(PathBuf),

    #[error("ensure failed: {0} failed")]
    CommandFailed(String),

    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl EnsureError {
    /// True for contract violations, false for propagated I/O failures.
    pub fn is_violation(&self) -> bool {
        !matches!(self, EnsureError::Unexpected(_))
    }
}

pub type Result<T> = std::result::Result<T, EnsureError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_ensure_prefix_and_subject() {
        let err = EnsureError::NotDirectory(PathBuf::from("notes/today.md"));
        assert_eq!(
            err.to_string(),
            "ensure failed: notes/today.md is not a directory"
        );
        let err = EnsureError::CommandFailed("code blog/x.md".to_string());
        assert_eq!(err.to_string(), "ensure failed: code blog/x.md failed");
    }

    #[test]
    fn unexpected_is_not_a_violation() {
        let err = EnsureError::from(anyhow::anyhow!("permission denied"));
        assert!(!err.is_violation());
        assert_eq!(err.to_string(), "permission denied");
        assert!(EnsureError::NotString(OsString::from("x")).is_violation());
    }
}
