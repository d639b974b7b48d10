use std::io;

use thiserror::Error;

/// Library-wide error type for alternate operations.
///
/// Only host failures end up here. Missing configuration, malformed patterns,
/// unmatched files and absent candidates are all handled as silent no-ops.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// State file could not be encoded.
    #[error("State file error: {0}")]
    StateFormat(#[from] serde_json::Error),

    /// Interactive selection failed for a reason other than dismissal.
    #[error("Failed to select alternate file: {0}")]
    Prompt(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
