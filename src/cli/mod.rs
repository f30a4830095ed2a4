//! CLI module for runoff-lab.
//!
//! All CLI logic lives here so `main.rs` stays a one-liner and every
//! command path is testable.

mod args;
mod commands;
mod output;

pub use args::{Args, Command};
pub use commands::{resolve_config, run_cli, run_simulation, validate_config};
pub use output::{
    format_summary, format_table, format_version, print_help, print_simulation_result,
    print_version,
};
