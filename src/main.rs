use std::process::ExitCode;

use clap::Parser;
use i18nsync::cli::{Arguments, ExitStatus, handle_parse_error, report};

fn main() -> ExitCode {
    let args = match Arguments::try_parse() {
        Ok(args) => args,
        Err(err) => return handle_parse_error(err).into(),
    };

    match i18nsync::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            report::print_fatal(&format!("{:#}", err));
            ExitStatus::Failure.into()
        }
    }
}
