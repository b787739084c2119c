/*!
 * Error types for the voscript application.
 *
 * The analysis engine itself never fails; these errors cover the layers
 * around it: configuration, script files and the CLI workflow. They use the
 * thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors raised while validating or loading configuration
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    /// Reading speed outside the supported range
    #[error("Reading speed {wpm} WPM is outside the supported range {min}-{max}")]
    WpmOutOfRange {
        wpm: i32,
        min: i32,
        max: i32,
    },

    /// A rate or fee is negative or not a number
    #[error("Invalid pricing value for '{field}': {value}")]
    InvalidPricing {
        field: &'static str,
        value: f64,
    },

    /// Config file could not be parsed
    #[error("Failed to parse config: {0}")]
    Parse(String),
}

/// Errors raised while loading scripts
#[derive(Error, Debug)]
pub enum ScriptError {
    /// Script path does not exist
    #[error("Script not found: {0}")]
    NotFound(String),

    /// Script file exists but contains no text
    #[error("Script is empty: {0}")]
    Empty(String),

    /// Script file is not valid UTF-8 text
    #[error("Script is not valid UTF-8 text: {0}")]
    InvalidEncoding(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from configuration handling
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Error from script loading
    #[error("Script error: {0}")]
    Script(#[from] ScriptError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(error: serde_json::Error) -> Self {
        Self::Parse(error.to_string())
    }
}
