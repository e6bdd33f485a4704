use std::process::ExitCode;

use adoctips::cli::{Arguments, ExitStatus, run_cli};
use clap::Parser;

fn main() -> ExitCode {
    let args = Arguments::parse();

    match run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
