//! runoff-lab CLI
//!
//! With no arguments, launches the interactive shell.

use std::process::ExitCode;

use runoff_lab::cli::{run_cli, Args};

fn main() -> ExitCode {
    run_cli(Args::parse())
}
