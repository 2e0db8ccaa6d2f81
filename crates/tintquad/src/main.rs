//! Entry point wiring the CLI surface, logging, and the renderer run path.
//!
//! Functions:
//!
//! - `main` parses CLI input, initialises tracing, and maps run errors to
//!   the process exit code.

mod cli;
mod run;

use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = cli::parse();
    run::initialise_tracing();

    match run::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err:?}");
            // -1 as a process exit status.
            ExitCode::from(255)
        }
    }
}
