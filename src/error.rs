//! Error types for runoff-lab.
//!
//! The simulation core is infallible; errors only arise at the boundaries
//! (user input in the shell, configuration files, output encoding).

use thiserror::Error;

/// Result type alias for runoff-lab operations.
pub type RunoffResult<T> = Result<T, RunoffError>;

/// Unified error type for all runoff-lab operations.
#[derive(Debug, Error)]
pub enum RunoffError {
    // ===== Shell Input =====
    /// A control value could not be parsed as a number.
    #[error("Invalid numeric input for {field}: '{input}'")]
    InvalidInput {
        /// Label of the control that received the input.
        field: String,
        /// Raw text that failed to parse.
        input: String,
    },

    // ===== Series Errors =====
    /// Time axis and values of a series differ in length.
    #[error("Series length mismatch: time axis has {times} samples but values have {values}")]
    LengthMismatch {
        /// Number of time points.
        times: usize,
        /// Number of values.
        values: usize,
    },

    // ===== Configuration Errors =====
    /// Invalid configuration parameter.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    // ===== I/O Errors =====
    /// File or terminal I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RunoffError {
    /// Create an invalid-input error for a named control.
    #[must_use]
    pub fn invalid_input(field: impl Into<String>, input: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            input: input.into(),
        }
    }

    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Whether this error came from user input and should be shown as a
    /// modal message rather than aborting.
    #[must_use]
    pub const fn is_user_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

impl From<serde_json::Error> for RunoffError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
