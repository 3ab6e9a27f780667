//! Test-only helpers: scripted command runners and throwaway git repos.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result, anyhow};
use tempfile::TempDir;

use crate::io::process::CommandRunner;

/// Runner that records invocations and answers from a queue.
///
/// Running past the end of the queue is an error.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    results: RefCell<VecDeque<bool>>,
    calls: RefCell<Vec<(String, Vec<String>)>>,
}

impl ScriptedRunner {
    pub fn new(results: Vec<bool>) -> Self {
        Self {
            results: RefCell::new(results.into()),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Every `(command, args)` pair run so far, in order.
    pub fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, command: &str, args: &[String]) -> Result<bool> {
        self.calls
            .borrow_mut()
            .push((command.to_string(), args.to_vec()));
        self.results
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| anyhow!("scripted runner exhausted at {command}"))
    }
}

/// Fresh temporary directory initialized as a git repository.
pub fn git_repo() -> Result<TempDir> {
    let temp = tempfile::tempdir().context("create tempdir")?;
    git_init(temp.path())?;
    Ok(temp)
}

/// `git init` a directory.
pub fn git_init(dir: &Path) -> Result<()> {
    let status = Command::new("git")
        .args(["init", "--quiet"])
        .current_dir(dir)
        .status()
        .context("spawn git init")?;
    if !status.success() {
        return Err(anyhow!("git init failed in {}", dir.display()));
    }
    Ok(())
}
