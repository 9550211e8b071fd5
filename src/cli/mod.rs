//! Command-line interface layer.
//!
//! - `args`: clap argument definitions
//! - `exit_status`: process exit statuses
//! - `report`: progress and diagnostic output
//! - `run`: batch execution for parsed arguments

use clap::error::ErrorKind;

pub mod args;
pub mod exit_status;
pub mod report;
mod run;

pub use args::Arguments;
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> anyhow::Result<ExitStatus> {
    run::run(args)
}

/// Report an argument parsing failure and pick the exit status.
///
/// `--help` and `--version` succeed; a missing root directory prints the
/// usage line; any other parse error is printed by clap.
pub fn handle_parse_error(err: clap::Error) -> ExitStatus {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            ExitStatus::Success
        }
        ErrorKind::MissingRequiredArgument
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            report::print_usage();
            ExitStatus::Failure
        }
        _ => {
            let _ = err.print();
            ExitStatus::Failure
        }
    }
}
