//! CLI argument definitions.

use crate::setup::DEFAULT_REMOTE_URL;
use clap::Parser;
use std::path::PathBuf;

/// Top-level CLI parser for `git-setup`.
#[derive(Debug, Parser)]
#[command(
    name = "git-setup",
    version,
    about = "Point a repository's origin remote at a url and rename its branch to main"
)]
pub struct Cli {
    /// Repository directory to operate on
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Url the origin remote should point at
    #[arg(long, default_value = DEFAULT_REMOTE_URL)]
    pub url: String,

    /// Append each executed command to this history file
    #[arg(long, value_name = "FILE")]
    pub history: Option<PathBuf>,
}
