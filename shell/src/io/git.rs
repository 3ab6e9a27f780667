//! Git working-tree lookups.
//!
//! The top-level directory is resolved once per [`GitLocator`] and cached;
//! relative lookups reuse it.

use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::OnceLock;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use tracing::{debug, instrument};

use crate::core::path::strip_root;
use crate::io::process::run_captured;

const GIT_TIMEOUT: Duration = Duration::from_secs(30);

/// Resolves the git top-level directory for a working directory.
#[derive(Debug)]
pub struct GitLocator {
    workdir: PathBuf,
    root: OnceLock<PathBuf>,
}

impl GitLocator {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
            root: OnceLock::new(),
        }
    }

    /// Locator for the process's current directory.
    pub fn current() -> Result<Self> {
        let cwd = std::env::current_dir().context("read current dir")?;
        Ok(Self::new(cwd))
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Top-level directory of the enclosing work tree (cached after first call).
    #[instrument(skip_all)]
    pub fn root_directory(&self) -> Result<&Path> {
        if let Some(root) = self.root.get() {
            return Ok(root);
        }
        let resolved = self.show_toplevel()?;
        debug!(root = %resolved.display(), "resolved git root");
        Ok(self.root.get_or_init(|| resolved))
    }

    /// Working directory relative to the git root.
    ///
    /// Returns the working directory unchanged when it is not under the root,
    /// and an empty path when it is the root itself.
    pub fn relative_directory(&self) -> Result<PathBuf> {
        let root = self.root_directory()?;
        if let Some(rel) = strip_root(&self.workdir, root) {
            return Ok(rel);
        }
        // git reports the resolved path; retry with symlinks resolved.
        if let Ok(canonical) = self.workdir.canonicalize()
            && let Some(rel) = strip_root(&canonical, root)
        {
            return Ok(rel);
        }
        debug!(
            workdir = %self.workdir.display(),
            root = %root.display(),
            "workdir is outside git root"
        );
        Ok(self.workdir.clone())
    }

    fn show_toplevel(&self) -> Result<PathBuf> {
        let args = ["rev-parse", "--show-toplevel"];
        let mut cmd = Command::new("git");
        cmd.args(args).current_dir(&self.workdir);
        let output = run_captured(cmd, GIT_TIMEOUT)?;
        if output.timed_out {
            return Err(anyhow!("git {} timed out", args.join(" ")));
        }
        if !output.status.success() {
            return Err(anyhow!(
                "git {} failed: {}",
                args.join(" "),
                output.stderr_lossy().trim()
            ));
        }
        let root = output.stdout_lossy().trim_end().to_string();
        if root.is_empty() {
            return Err(anyhow!("git {} printed nothing", args.join(" ")));
        }
        Ok(PathBuf::from(root))
    }
}
