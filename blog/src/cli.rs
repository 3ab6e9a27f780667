//! Command implementations.

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::NaiveDate;
use shell::core::date::{Separator, format_naive, today};
use shell::core::path::strip_root;
use shell::io::ensure::Ensure;
use shell::io::git::GitLocator;
use shell::io::print::banner;
use tracing::debug;

use crate::config::{default_config_path, load_config};
use crate::entry::EntryCreator;

/// Options for `create-blog-entry`.
#[derive(Debug, Clone, Default)]
pub struct CreateOptions {
    /// Entry date; today (UTC) when unset.
    pub date: Option<NaiveDate>,
    /// Editor program overriding the configured one.
    pub editor: Option<String>,
    pub open: bool,
    pub config: Option<PathBuf>,
    /// Print existing entries instead of creating one.
    pub list: bool,
}

/// Create today's entry (or `options.date`'s) and open it.
pub fn create_entry(options: &CreateOptions) -> Result<()> {
    let git = GitLocator::current()?;
    let config_path = match &options.config {
        Some(path) => path.clone(),
        None => default_config_path(&git),
    };
    let mut config = load_config(&config_path)?;
    if let Some(editor) = &options.editor {
        config.set_editor_program(editor);
        config.validate()?;
    }

    let ensure = Ensure::new();
    let creator = EntryCreator::new(&ensure, &config);

    if options.list {
        for path in creator.list()? {
            println!("{}", path.display());
        }
        return Ok(());
    }

    let date = entry_date(options.date, config.separator);
    let entry = creator.create(&date)?;
    debug!(date = %entry.date, created = entry.created, "entry resolved");
    let shown = repo_relative(&git, &entry.path);
    if entry.created {
        banner(&format!("created {}", shown.display()));
    } else {
        banner(&format!("{} already exists", shown.display()));
    }

    if options.open {
        creator.open(&entry)?;
    }
    Ok(())
}

/// `--date` when given, otherwise today's UTC date.
fn entry_date(date: Option<NaiveDate>, separator: Separator) -> String {
    match date {
        Some(date) => format_naive(separator, date),
        None => today(separator),
    }
}

/// `path` as seen from the git root when the working directory is inside one.
fn repo_relative(git: &GitLocator, path: &Path) -> PathBuf {
    if path.is_absolute() {
        return match git.root_directory() {
            Ok(root) => strip_root(path, root).unwrap_or_else(|| path.to_path_buf()),
            Err(_) => path.to_path_buf(),
        };
    }
    match git.relative_directory() {
        Ok(rel) if rel.is_relative() => rel.join(path),
        Ok(_) => path.to_path_buf(),
        Err(err) => {
            debug!(err = %err, "not in a git checkout");
            path.to_path_buf()
        }
    }
}
