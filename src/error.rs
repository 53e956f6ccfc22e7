use std::io;
use thiserror::Error;

/// Errors that can occur while driving the external git binary
#[derive(Debug, Error)]
pub enum GitError {
    #[error("Could not find a usable git binary: {0}")]
    GitNotFound(String),

    #[error("Failed to run git command: {0}")]
    CommandFailed(String),

    #[error("Failed to parse git output: {0}")]
    ParseError(String),
}

/// Top-level application error that wraps all module-specific errors
///
/// This provides a unified error type for application-level code while
/// preserving the specific error context from each module. All module errors
/// automatically convert to AppError via the `From` trait.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for git operations
pub type GitResult<T> = std::result::Result<T, GitError>;

/// Result type for application-level operations
pub type AppResult<T> = std::result::Result<T, AppError>;
