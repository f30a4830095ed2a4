//! CLI command handlers.

use std::path::Path;
use std::process::ExitCode;

use crate::config::RunoffConfig;
use crate::error::RunoffResult;
use crate::logging::{self, LogTarget};
use crate::model::simulate;

use super::output::{print_help, print_simulation_result, print_version};
use super::{Args, Command};

/// Main CLI entry point.
///
/// Dispatches to the appropriate command handler based on parsed arguments.
#[must_use]
pub fn run_cli(args: Args) -> ExitCode {
    let target = match args.command {
        Command::Tui { .. } => LogTarget::for_shell(),
        _ => LogTarget::Stderr,
    };
    if let Err(e) = logging::init(&target) {
        eprintln!("Warning: logging disabled: {e}");
    }

    match args.command {
        Command::Tui { config_path } => launch_shell(config_path.as_deref()),
        Command::Run { config_path, json } => run_simulation(config_path.as_deref(), json),
        Command::Validate { config_path } => validate_config(&config_path),
        Command::Help => {
            print_help();
            ExitCode::SUCCESS
        }
        Command::Version => {
            print_version();
            ExitCode::SUCCESS
        }
    }
}

/// Resolve the starting configuration: a file if given, else the embedded one.
///
/// # Errors
///
/// Returns error if the file cannot be loaded or is invalid.
pub fn resolve_config(path: Option<&Path>) -> RunoffResult<RunoffConfig> {
    path.map_or_else(|| Ok(RunoffConfig::embedded()), RunoffConfig::load)
}

/// Run one simulation and print the result.
#[must_use]
pub fn run_simulation(path: Option<&Path>, json: bool) -> ExitCode {
    let config = match resolve_config(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(1);
        }
    };

    let result = simulate(&config.parameters);
    match print_simulation_result(&result, json) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

/// Validate a configuration file.
#[must_use]
pub fn validate_config(path: &Path) -> ExitCode {
    println!("Validating: {}\n", path.display());

    match RunoffConfig::load(path) {
        Ok(config) => {
            println!("✓ Configuration valid");
            println!("  name:           {}", config.name);
            println!("  schema_version: {}", config.schema_version);
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("✗ Configuration invalid");
            println!("  {e}");
            ExitCode::from(1)
        }
    }
}

/// Launch the interactive shell.
#[must_use]
pub fn launch_shell(path: Option<&Path>) -> ExitCode {
    let config = match resolve_config(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(1);
        }
    };

    run_shell(config)
}

#[cfg(feature = "tui")]
fn run_shell(config: RunoffConfig) -> ExitCode {
    match crate::tui::run(crate::tui::RunoffApp::from_config(config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

#[cfg(not(feature = "tui"))]
fn run_shell(_config: RunoffConfig) -> ExitCode {
    eprintln!("TUI feature not enabled. Rebuild with --features tui or use 'run'");
    ExitCode::from(1)
}
