//! Main entry point for the xfiles CLI.
//!
//! Maintains a persistent list of selected paths:
//! - `xfiles`: print the list (or replace it from piped input)
//! - `xfiles PATH...`: replace the list
//! - `xfiles + PATH...`: add paths
//! - `xfiles - PATH...`: remove paths
//! - `xfiles --`: empty the list
//! - `xfiles ++`: print the backing file location
//!
//! A bare `+` or `-` takes its paths from piped input, one per line.

mod error;
mod utils;

use std::env;
use std::io::{self, Write};

use error::CliError;
use xfiles::Command;

fn run() -> Result<(), CliError> {
    let args = utils::operands_from_args(env::args_os().skip(1))?;
    let interpreter = utils::build_interpreter()?;
    let command = Command::classify(&args, utils::read_piped_stdin)?;
    let outcome = interpreter.execute(command)?;

    let mut stdout = io::stdout().lock();
    write!(stdout, "{outcome}")?;
    stdout.flush()?;
    Ok(())
}

fn main() {
    xfiles::init_logger();

    match run() {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
