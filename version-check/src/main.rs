// These Clippy lints are disabled because this is a CLI binary, not a library:
// - print_stderr: the binary reports its own plumbing failures on stderr.
#![allow(clippy::print_stderr)]

mod cli;
mod logging;

use std::process::ExitCode;

use clap::Parser;

use crate::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli::run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(version_check::CheckStatus::Unavailable.exit_code())
        }
    }
}
