use crate::git::GitCommand;
use chrono::Utc;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Append-only record of the git commands this tool has run.
///
/// One line per command: `[<utc timestamp>] [exit:<code>] git <args>`.
/// Callers treat write failures as non-fatal; a broken history file must
/// never stop the setup sequence.
pub struct HistoryLog {
    path: PathBuf,
}

impl HistoryLog {
    /// Open a history log at the given path, creating parent directories
    /// as needed.
    pub fn new<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        Ok(Self { path })
    }

    /// Append one entry for an executed command.
    pub fn record(&self, command: &GitCommand, exit_code: i32) -> std::io::Result<()> {
        let entry = format!(
            "[{}] [exit:{}] {}\n",
            Utc::now().to_rfc3339(),
            exit_code,
            command
        );

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        file.write_all(entry.as_bytes())?;
        file.flush()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
