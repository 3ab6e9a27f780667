//! Existence checks.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::warn;

/// True if `path` exists (files, directories, followed symlinks).
///
/// Only `NotFound` answers `false`. Any other stat failure is reported as
/// existing so callers that create-if-missing never clobber a path they could
/// not inspect.
pub fn exists(path: &Path) -> bool {
    match fs::metadata(path) {
        Ok(_) => true,
        Err(err) if err.kind() == ErrorKind::NotFound => false,
        Err(err) => {
            warn!(path = %path.display(), err = %err, "stat failed, assuming path exists");
            true
        }
    }
}
