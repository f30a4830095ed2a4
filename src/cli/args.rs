//! CLI argument parsing.
//!
//! Hand-rolled so parsing is testable from any iterator of strings.

use std::path::PathBuf;

/// CLI arguments container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    /// The command to execute.
    pub command: Command,
}

/// Available CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Launch the interactive shell (the default with no arguments).
    Tui {
        /// Optional configuration to start from.
        config_path: Option<PathBuf>,
    },
    /// Run one simulation and print the result.
    Run {
        /// Optional configuration file.
        config_path: Option<PathBuf>,
        /// Emit the full result as JSON.
        json: bool,
    },
    /// Validate a configuration file.
    Validate {
        /// Path to the configuration file.
        config_path: PathBuf,
    },
    /// Show help
    Help,
    /// Show version
    Version,
}

impl Args {
    /// Parse command-line arguments from an iterator.
    ///
    /// The first item is the program name.
    #[must_use]
    pub fn parse_from<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
        Self::parse_from_vec(&args)
    }

    /// Parse command-line arguments from the environment.
    #[must_use]
    pub fn parse() -> Self {
        Self::parse_from(std::env::args())
    }

    fn parse_from_vec(args: &[String]) -> Self {
        if args.len() < 2 {
            return Self {
                command: Command::Tui { config_path: None },
            };
        }

        let command = match args[1].as_str() {
            "tui" => Self::parse_tui_command(args),
            "run" => Self::parse_run_command(args),
            "validate" => Self::parse_validate_command(args),
            "-h" | "--help" | "help" => Command::Help,
            "-V" | "--version" | "version" => Command::Version,
            unknown => {
                eprintln!("Unknown command: {unknown}");
                Command::Help
            }
        };

        Self { command }
    }

    /// Scan `args[2..]` for `--config <path>`.
    ///
    /// Returns `Err(())` when the flag is present without a value.
    fn config_flag(args: &[String]) -> Result<Option<PathBuf>, ()> {
        let mut config_path = None;
        let mut i = 2;
        while i < args.len() {
            if matches!(args[i].as_str(), "--config" | "-c") {
                let Some(value) = args.get(i + 1) else {
                    eprintln!("Error: '--config' requires a file path");
                    return Err(());
                };
                config_path = Some(PathBuf::from(value));
                i += 2;
            } else {
                i += 1;
            }
        }
        Ok(config_path)
    }

    fn parse_tui_command(args: &[String]) -> Command {
        match Self::config_flag(args) {
            Ok(config_path) => Command::Tui { config_path },
            Err(()) => Command::Help,
        }
    }

    fn parse_run_command(args: &[String]) -> Command {
        let Ok(config_path) = Self::config_flag(args) else {
            return Command::Help;
        };
        let json = args[2..].iter().any(|a| a == "--json");
        Command::Run { config_path, json }
    }

    fn parse_validate_command(args: &[String]) -> Command {
        match args.get(2) {
            Some(path) => Command::Validate {
                config_path: PathBuf::from(path),
            },
            None => {
                eprintln!("Error: 'validate' command requires a config path");
                Command::Help
            }
        }
    }
}
