use clap::Parser;
use git_setup::cli::Cli;
use git_setup::{GitVersion, HistoryLog, Sequencer, setup_plan};
use std::io;

fn main() {
    let cli = Cli::parse();

    // Validate git is usable before touching the repository
    match GitVersion::detect() {
        Ok(version) => {
            eprintln!("Git version: {}", version);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    let mut sequencer = Sequencer::new(&cli.path, io::stdout());
    if let Some(path) = &cli.history {
        match HistoryLog::new(path) {
            Ok(history) => sequencer = sequencer.with_history(history),
            Err(e) => eprintln!("Warning: history log disabled: {}", e),
        }
    }

    // Per-step git failures are already reported by the sequencer and do
    // not affect the exit code; only a spawn-level error is fatal.
    if let Err(e) = sequencer.run(setup_plan(&cli.url)) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
