pub mod audit;
pub mod cli;
pub mod error;
pub mod git;
pub mod setup;

// Re-export commonly used types for convenience
pub use audit::HistoryLog;
pub use error::{AppError, AppResult, GitError, GitResult};
pub use git::{CommandOutput, GitCommand, GitExecutor, GitVersion};
pub use setup::{DEFAULT_REMOTE_URL, REMOTE_NAME, Sequencer, StepReport, TARGET_BRANCH, setup_plan};
