//! Path arithmetic used by directory listing and git-relative lookups.

use std::path::{Path, PathBuf};

/// Final dot-delimited suffix of a file name.
///
/// Names without a dot have the empty suffix, so `""` in an allow-list keeps
/// extensionless entries. A leading dot counts (`.bashrc` -> `bashrc`).
pub fn suffix(name: &str) -> &str {
    name.rsplit_once('.').map_or("", |(_, suffix)| suffix)
}

/// True if `name`'s suffix is one of `extensions`.
pub fn has_extension(name: &str, extensions: &[&str]) -> bool {
    let suffix = suffix(name);
    extensions.contains(&suffix)
}

/// Strip `root` from `dir`.
///
/// Returns `None` when `dir` does not live under `root`. `dir == root`
/// yields an empty path.
pub fn strip_root(dir: &Path, root: &Path) -> Option<PathBuf> {
    dir.strip_prefix(root).ok().map(Path::to_path_buf)
}
