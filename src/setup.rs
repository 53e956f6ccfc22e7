use crate::audit::HistoryLog;
use crate::error::AppResult;
use crate::git::{CommandOutput, GitCommand, GitExecutor};
use std::io::Write;
use std::path::Path;

/// The remote this tool manages
pub const REMOTE_NAME: &str = "origin";

/// The name the current branch is renamed to
pub const TARGET_BRANCH: &str = "main";

/// Default url for the origin remote
pub const DEFAULT_REMOTE_URL: &str = "https://github.com/pavish-phew/Chatify.git";

/// One executed step: the command and everything it produced
#[derive(Debug, Clone)]
pub struct StepReport {
    pub command: GitCommand,
    pub output: CommandOutput,
}

impl StepReport {
    pub fn succeeded(&self) -> bool {
        self.output.success
    }
}

/// Build the fixed remote-setup plan.
///
/// Removing a stale origin first means the add never collides with an
/// existing remote; the two verification commands run last so their output
/// reflects the final state. The remove is expected to fail on a repository
/// that has no origin yet.
pub fn setup_plan(url: &str) -> Vec<GitCommand> {
    vec![
        GitCommand::new(["remote", "remove", REMOTE_NAME]),
        GitCommand::new(["remote", "add", REMOTE_NAME, url]),
        GitCommand::new(["branch", "-M", TARGET_BRANCH]),
        GitCommand::new(["remote", "-v"]),
        GitCommand::new(["status"]),
    ]
}

/// Runs a command plan against one repository, reporting every step.
///
/// For each command two lines go to the output writer: one announcing the
/// command, one carrying `Success:` with its stdout or `Error:` with its
/// stderr. A failed command never stops the sequence; the caller gets the
/// full list of reports and decides what a failure means.
pub struct Sequencer<W: Write> {
    executor: GitExecutor,
    out: W,
    history: Option<HistoryLog>,
}

impl<W: Write> Sequencer<W> {
    pub fn new<P: AsRef<Path>>(repo_path: P, out: W) -> Self {
        Self {
            executor: GitExecutor::new(repo_path),
            out,
            history: None,
        }
    }

    /// Record every executed command in the given history log
    pub fn with_history(mut self, history: HistoryLog) -> Self {
        self.history = Some(history);
        self
    }

    /// Run every command in order and return one report per command.
    ///
    /// Only a spawn-level failure (git missing, unwritable output) aborts
    /// the run; a command that merely exits non-zero is reported and the
    /// sequence continues.
    pub fn run(&mut self, plan: Vec<GitCommand>) -> AppResult<Vec<StepReport>> {
        plan.into_iter().map(|cmd| self.run_step(cmd)).collect()
    }

    fn run_step(&mut self, command: GitCommand) -> AppResult<StepReport> {
        writeln!(self.out, "Running: {}", command)?;

        let output = self.executor.execute(&command)?;
        if output.success {
            writeln!(self.out, "Success: {}", output.stdout)?;
        } else {
            writeln!(self.out, "Error: {}", output.stderr)?;
        }

        if let Some(history) = &self.history {
            // History is best-effort
            let _ = history.record(&command, output.exit_code);
        }

        Ok(StepReport { command, output })
    }
}
