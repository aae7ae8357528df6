//! cluster-env: flatten a cluster job configuration into shell assignments.
//!
//! This is the main entry point for the `cluster-env` CLI. It parses
//! arguments, loads and flattens the config, and maps errors to exit codes.
//! Output is rendered in full before anything is printed, so a failure
//! never leaves a partial script on stdout.

mod cli;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod flatten;
mod logging;

use cli::Cli;
use clap::error::ErrorKind;
use config::ConfigDocument;
use error::Result;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match Cli::parse_args() {
        Ok(cli) => cli,
        Err(err) => {
            // --help/--version go to stdout; usage errors to stderr.
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    ExitCode::from(exit_codes::SUCCESS as u8)
                }
                _ => ExitCode::from(exit_codes::FAILURE as u8),
            };
        }
    };

    logging::init(cli.verbose);

    match run(&cli) {
        Ok(script) => {
            println!("{}", script);
            ExitCode::from(exit_codes::SUCCESS as u8)
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

fn run(cli: &Cli) -> Result<String> {
    let document = ConfigDocument::load(&cli.config)?;
    Ok(flatten::flatten_to_script(&document))
}
