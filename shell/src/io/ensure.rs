//! Ensure operations: make a condition hold or report why it cannot.
//!
//! Every method returns [`EnsureError`] instead of terminating the process;
//! the binary maps violations to [`crate::exit_codes::ENSURE_FAILED`].

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{debug, instrument};

use crate::core::path::has_extension;
use crate::error::{EnsureError, Result};
use crate::io::check::exists;
use crate::io::process::{CommandRunner, SystemRunner};

/// Ensure operations backed by a [`CommandRunner`].
#[derive(Debug, Clone, Default)]
pub struct Ensure<R = SystemRunner> {
    runner: R,
}

impl Ensure<SystemRunner> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: CommandRunner> Ensure<R> {
    pub fn with_runner(runner: R) -> Self {
        Self { runner }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Return `value` as UTF-8, or fail if it is not valid text.
    pub fn string(&self, value: &OsStr) -> Result<String> {
        value
            .to_str()
            .map(str::to_string)
            .ok_or_else(|| EnsureError::NotString(value.to_os_string()))
    }

    /// Return `path` if it is a directory.
    pub fn is_directory(&self, path: &Path) -> Result<PathBuf> {
        let meta = fs::metadata(path).with_context(|| format!("stat {}", path.display()))?;
        if !meta.is_dir() {
            return Err(EnsureError::NotDirectory(path.to_path_buf()));
        }
        Ok(path.to_path_buf())
    }

    /// List the immediate children of `dir` as `dir/<name>`.
    ///
    /// With `extensions`, only names whose final dot-suffix is listed are kept.
    /// Order is whatever the platform's directory enumeration yields.
    pub fn ls(&self, dir: &Path, extensions: Option<&[&str]>) -> Result<Vec<PathBuf>> {
        let entries = fs::read_dir(dir).with_context(|| format!("read {}", dir.display()))?;
        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.with_context(|| format!("read entry in {}", dir.display()))?;
            let name = entry.file_name();
            if let Some(extensions) = extensions
                && !has_extension(&name.to_string_lossy(), extensions)
            {
                continue;
            }
            paths.push(dir.join(name));
        }
        Ok(paths)
    }

    /// Run `command` and fail unless it exits successfully.
    #[instrument(skip_all, fields(command = %command))]
    pub fn spawn(&self, command: &str, args: &[String]) -> Result<()> {
        if !self.runner.run(command, args)? {
            let mut invocation = command.to_string();
            for arg in args {
                invocation.push(' ');
                invocation.push_str(arg);
            }
            return Err(EnsureError::CommandFailed(invocation));
        }
        Ok(())
    }

    /// Create `path` with the produced content unless it already exists.
    ///
    /// Existing files are never touched and `content` is not called. Returns
    /// `true` when the file was written.
    pub fn file_contents<F>(&self, path: &Path, content: F) -> Result<bool>
    where
        F: FnOnce() -> anyhow::Result<String>,
    {
        if exists(path) {
            debug!(path = %path.display(), "file present, leaving it alone");
            return Ok(false);
        }

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("create directory {}", parent.display()))?;
        }

        let text = content()?;
        fs::write(path, text).with_context(|| format!("write {}", path.display()))?;
        debug!(path = %path.display(), "file written");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScriptedRunner;
    use std::cell::Cell;

    fn names(paths: &[PathBuf]) -> Vec<String> {
        let mut names: Vec<String> = paths
            .iter()
            .map(|p| p.file_name().expect("name").to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn string_accepts_utf8() {
        let ensure = Ensure::new();
        assert_eq!(
            ensure.string(OsStr::new("blog/today.md")).expect("utf8"),
            "blog/today.md"
        );
    }

    #[cfg(unix)]
    #[test]
    fn string_rejects_invalid_utf8() {
        use std::os::unix::ffi::OsStrExt;
        let ensure = Ensure::new();
        let err = ensure.string(OsStr::from_bytes(b"bad\xff")).unwrap_err();
        assert!(matches!(err, EnsureError::NotString(_)));
        assert!(err.to_string().starts_with("ensure failed: bad"));
    }

    #[test]
    fn is_directory_returns_path_for_directories() {
        let temp = tempfile::tempdir().expect("tempdir");
        let ensure = Ensure::new();
        assert_eq!(
            ensure.is_directory(temp.path()).expect("dir"),
            temp.path().to_path_buf()
        );
    }

    #[test]
    fn is_directory_rejects_regular_file_with_path_in_message() {
        let temp = tempfile::tempdir().expect("tempdir");
        let file = temp.path().join("entry.md");
        fs::write(&file, "x").expect("write");
        let err = Ensure::new().is_directory(&file).unwrap_err();
        assert!(err.is_violation());
        assert!(err.to_string().contains(&file.display().to_string()));
    }

    #[test]
    fn is_directory_propagates_stat_errors() {
        let temp = tempfile::tempdir().expect("tempdir");
        let err = Ensure::new()
            .is_directory(&temp.path().join("missing"))
            .unwrap_err();
        assert!(!err.is_violation());
    }

    #[test]
    fn ls_filters_by_extension() {
        let temp = tempfile::tempdir().expect("tempdir");
        for name in ["x.md", "y.txt", "z"] {
            fs::write(temp.path().join(name), "").expect("write");
        }
        let ensure = Ensure::new();

        let md = ensure.ls(temp.path(), Some(&["md"])).expect("ls");
        assert_eq!(md, vec![temp.path().join("x.md")]);

        let all = ensure.ls(temp.path(), None).expect("ls");
        assert_eq!(names(&all), vec!["x.md", "y.txt", "z"]);

        let with_bare = ensure.ls(temp.path(), Some(&["md", ""])).expect("ls");
        assert_eq!(names(&with_bare), vec!["x.md", "z"]);
    }

    #[test]
    fn spawn_passes_through_success() {
        let ensure = Ensure::with_runner(ScriptedRunner::new(vec![true]));
        ensure
            .spawn("code", &["blog/a.md".to_string()])
            .expect("spawn");
        assert_eq!(
            ensure.runner().calls(),
            vec![("code".to_string(), vec!["blog/a.md".to_string()])]
        );
    }

    #[test]
    fn spawn_failure_names_the_invocation() {
        let ensure = Ensure::with_runner(ScriptedRunner::new(vec![false]));
        let err = ensure
            .spawn("code", &["--wait".to_string(), "blog/a.md".to_string()])
            .unwrap_err();
        assert!(err.is_violation());
        assert_eq!(err.to_string(), "ensure failed: code --wait blog/a.md failed");
    }

    #[test]
    fn file_contents_creates_missing_parents() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("a").join("b").join("c").join("f.txt");
        let written = Ensure::new()
            .file_contents(&path, || Ok("hello\n".to_string()))
            .expect("write");
        assert!(written);
        assert_eq!(fs::read_to_string(&path).expect("read"), "hello\n");
    }

    #[test]
    fn file_contents_is_idempotent_and_lazy() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("entry.md");
        let ensure = Ensure::new();
        ensure
            .file_contents(&path, || Ok("first\n".to_string()))
            .expect("first");

        let called = Cell::new(false);
        let written = ensure
            .file_contents(&path, || {
                called.set(true);
                Ok("second\n".to_string())
            })
            .expect("second");
        assert!(!written);
        assert!(!called.get());
        assert_eq!(fs::read_to_string(&path).expect("read"), "first\n");
    }

    #[cfg(unix)]
    #[test]
    fn file_contents_leaves_unstatable_target_alone() {
        // Stat of `plain/entry.md` fails with NotADirectory, not NotFound.
        let temp = tempfile::tempdir().expect("tempdir");
        let parent = temp.path().join("plain");
        fs::write(&parent, "x").expect("write");
        let path = parent.join("entry.md");

        let called = Cell::new(false);
        let written = Ensure::new()
            .file_contents(&path, || {
                called.set(true);
                Ok("never\n".to_string())
            })
            .expect("no-op");
        assert!(!written);
        assert!(!called.get());
        assert_eq!(fs::read_to_string(&parent).expect("read"), "x");
    }

    #[test]
    fn file_contents_propagates_producer_errors() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("entry.md");
        let err = Ensure::new()
            .file_contents(&path, || Err(anyhow::anyhow!("template unavailable")))
            .unwrap_err();
        assert!(!err.is_violation());
        assert!(!path.exists());
    }
}
