//! Blog configuration stored in `blog.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use shell::core::date::Separator;
use shell::io::git::GitLocator;
use tracing::debug;

pub const CONFIG_FILE: &str = "blog.toml";

/// Blog configuration (TOML).
///
/// Missing fields fall back to the defaults, so an absent file behaves like
/// an empty one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BlogConfig {
    /// Directory holding the date-partitioned entries.
    pub blog_dir: PathBuf,

    /// Editor program followed by leading arguments; the entry path is appended.
    pub editor: Vec<String>,

    /// Separator used in the date directory and file name.
    pub separator: Separator,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            blog_dir: PathBuf::from("blog"),
            editor: vec!["code".to_string()],
            separator: Separator::Dash,
        }
    }
}

impl BlogConfig {
    pub fn validate(&self) -> Result<()> {
        if self.blog_dir.as_os_str().is_empty() {
            return Err(anyhow!("blog_dir must not be empty"));
        }
        if self.editor.is_empty() || self.editor[0].trim().is_empty() {
            return Err(anyhow!("editor must be a non-empty array"));
        }
        if self.separator == Separator::Slash {
            return Err(anyhow!("separator \"/\" would split the entry file name"));
        }
        Ok(())
    }

    /// Replace the editor program, keeping any configured leading arguments.
    pub fn set_editor_program(&mut self, program: &str) {
        match self.editor.first_mut() {
            Some(first) => *first = program.to_string(),
            None => self.editor.push(program.to_string()),
        }
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `BlogConfig::default()`. A relative
/// `blog_dir` read from a file is resolved against the file's directory.
pub fn load_config(path: &Path) -> Result<BlogConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        let cfg = BlogConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let mut cfg: BlogConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    if cfg.blog_dir.is_relative()
        && let Some(parent) = path.parent()
    {
        cfg.blog_dir = parent.join(&cfg.blog_dir);
    }
    cfg.validate()
        .with_context(|| format!("invalid {}", path.display()))?;
    Ok(cfg)
}

/// `blog.toml` at the git root, or in the working directory outside a checkout.
pub fn default_config_path(git: &GitLocator) -> PathBuf {
    match git.root_directory() {
        Ok(root) => root.join(CONFIG_FILE),
        Err(err) => {
            debug!(err = %err, "no git root, looking for config in workdir");
            git.workdir().join(CONFIG_FILE)
        }
    }
}
