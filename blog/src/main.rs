//! Scaffold today's blog entry and open it in an editor.
//!
//! Creates `blog/<date>/<date>.md` if missing (never overwriting) and launches
//! the configured editor on it. Re-running on the same day reopens the file.

mod cli;
mod config;
mod entry;

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use shell::error::EnsureError;
use shell::exit_codes;

use crate::cli::CreateOptions;

#[derive(Parser)]
#[command(
    name = "create-blog-entry",
    version,
    about = "Create today's blog entry and open it in an editor"
)]
struct Cli {
    /// Entry date (YYYY-MM-DD) instead of today in UTC.
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Editor program to launch instead of the configured one.
    #[arg(long)]
    editor: Option<String>,

    /// Create the entry without launching the editor.
    #[arg(long)]
    no_open: bool,

    /// Config file (defaults to `blog.toml` at the git root).
    #[arg(long)]
    config: Option<PathBuf>,

    /// List existing entries and exit.
    #[arg(long, conflicts_with_all = ["date", "editor", "no_open"])]
    list: bool,
}

impl Cli {
    fn options(&self) -> CreateOptions {
        CreateOptions {
            date: self.date,
            editor: self.editor.clone(),
            open: !self.no_open,
            config: self.config.clone(),
            list: self.list,
        }
    }
}

fn main() {
    shell::logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_code(&err));
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    cli::create_entry(&cli.options())
}

fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<EnsureError>() {
        Some(ensure) if ensure.is_violation() => exit_codes::ENSURE_FAILED,
        _ => exit_codes::UNEXPECTED,
    }
}
