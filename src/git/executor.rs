use crate::error::{GitError, GitResult};
use crate::git::command::GitCommand;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Result of executing a git command
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
    pub success: bool,
}

/// Executes git commands within a repository
///
/// The repository directory is held here and passed to every subprocess via
/// `current_dir`; the process-wide working directory is never touched.
#[derive(Debug)]
pub struct GitExecutor {
    repo_path: PathBuf,
}

impl GitExecutor {
    /// Create a new GitExecutor for the given repository path
    pub fn new<P: AsRef<Path>>(repo_path: P) -> Self {
        Self {
            repo_path: repo_path.as_ref().to_path_buf(),
        }
    }

    /// Execute a git command and return its captured output.
    ///
    /// A non-zero exit status is not an error at this layer: it comes back
    /// as a `CommandOutput` with `success == false` and the caller decides
    /// what to do with it. Only a command that cannot be spawned at all, or
    /// an empty token sequence, produces a `GitError`.
    pub fn execute(&self, command: &GitCommand) -> GitResult<CommandOutput> {
        if command.is_empty() {
            return Err(GitError::CommandFailed("Empty command".to_string()));
        }

        let output = Command::new("git")
            .args(command.args())
            .current_dir(&self.repo_path)
            .output()
            .map_err(|e| GitError::CommandFailed(format!("Failed to execute git: {}", e)))?;

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            exit_code: output.status.code().unwrap_or(-1),
            success: output.status.success(),
        })
    }

    /// Get the repository path
    pub fn repo_path(&self) -> &Path {
        &self.repo_path
    }
}
