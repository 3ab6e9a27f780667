//! Dated blog entries: `<blog_dir>/<date>/<date>.md`.

use std::path::{Path, PathBuf};

use shell::error::Result;
use shell::io::check::exists;
use shell::io::ensure::Ensure;
use shell::io::process::CommandRunner;
use tracing::{debug, info};

use crate::config::BlogConfig;

/// An entry file resolved for a date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub date: String,
    pub path: PathBuf,
    /// False when the file was already there and left untouched.
    pub created: bool,
}

/// Path of the entry for `date` under `blog_dir`.
pub fn entry_path(blog_dir: &Path, date: &str) -> PathBuf {
    blog_dir.join(date).join(format!("{date}.md"))
}

/// Initial markdown for a new entry.
pub fn entry_template(date: &str) -> String {
    let template = format!("\n# {date}\n\n\n");
    let mut body = template.trim().to_string();
    body.push('\n');
    body
}

/// Creates and opens entries according to a [`BlogConfig`].
pub struct EntryCreator<'a, R: CommandRunner> {
    ensure: &'a Ensure<R>,
    config: &'a BlogConfig,
}

impl<'a, R: CommandRunner> EntryCreator<'a, R> {
    pub fn new(ensure: &'a Ensure<R>, config: &'a BlogConfig) -> Self {
        Self { ensure, config }
    }

    /// Create the entry for the formatted `date` unless it already exists.
    pub fn create(&self, date: &str) -> Result<Entry> {
        let blog_dir = &self.config.blog_dir;
        if exists(blog_dir) {
            self.ensure.is_directory(blog_dir)?;
        }

        let path = entry_path(blog_dir, date);
        let created = self
            .ensure
            .file_contents(&path, || Ok(entry_template(date)))?;
        if created {
            info!(path = %path.display(), "created entry");
        } else {
            debug!(path = %path.display(), "entry already exists");
        }
        Ok(Entry {
            date: date.to_string(),
            path,
            created,
        })
    }

    /// Open `entry` in the configured editor; fails if the editor fails.
    pub fn open(&self, entry: &Entry) -> Result<()> {
        let (program, leading) = self
            .config
            .editor
            .split_first()
            .ok_or_else(|| anyhow::anyhow!("editor must be a non-empty array"))?;
        let mut args = leading.to_vec();
        args.push(self.ensure.string(entry.path.as_os_str())?);
        self.ensure.spawn(program, &args)
    }

    /// Every `.md` file one level below each date directory, sorted.
    pub fn list(&self) -> Result<Vec<PathBuf>> {
        let blog_dir = &self.config.blog_dir;
        if !exists(blog_dir) {
            return Ok(Vec::new());
        }
        let blog_dir = self.ensure.is_directory(blog_dir)?;
        let mut entries = Vec::new();
        for dir in self.ensure.ls(&blog_dir, None)? {
            if !dir.is_dir() {
                continue;
            }
            entries.extend(self.ensure.ls(&dir, Some(&["md"]))?);
        }
        entries.sort();
        Ok(entries)
    }
}
