//! Tracing subscriber setup.
//!
//! Filter directives come from `RUNOFF_LAB_LOG` (default `info`). The
//! interactive shell owns the terminal, so it logs to the file named by
//! `RUNOFF_LAB_LOG_FILE` or not at all.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::RunoffResult;

/// Environment variable holding filter directives.
pub const LOG_FILTER_ENV: &str = "RUNOFF_LAB_LOG";

/// Environment variable naming the shell's log file.
pub const LOG_FILE_ENV: &str = "RUNOFF_LAB_LOG_FILE";

/// Where log events go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error, for headless commands.
    Stderr,
    /// Append to a file.
    File(PathBuf),
    /// Discard everything.
    Off,
}

impl LogTarget {
    /// Target for the interactive shell, read from the environment.
    #[must_use]
    pub fn for_shell() -> Self {
        std::env::var_os(LOG_FILE_ENV).map_or(Self::Off, |path| Self::File(path.into()))
    }
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber.
///
/// Calling this more than once is harmless; later calls keep the first
/// subscriber.
///
/// # Errors
///
/// Returns error if the log file cannot be opened.
pub fn init(target: &LogTarget) -> RunoffResult<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(filter());

    // try_init fails only when a subscriber is already set.
    match target {
        LogTarget::Stderr => {
            let _ = builder.with_writer(std::io::stderr).try_init();
        }
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let _ = builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
        LogTarget::Off => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_off_target_is_noop() {
        assert!(init(&LogTarget::Off).is_ok());
    }

    #[test]
    fn test_file_target_in_missing_dir_fails() {
        let target = LogTarget::File(PathBuf::from("/nonexistent/dir/runoff.log"));
        assert!(init(&target).is_err());
    }

    #[test]
    fn test_file_target_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("runoff.log");
        assert!(init(&LogTarget::File(path.clone())).is_ok());
        assert!(path.exists());
    }
}
