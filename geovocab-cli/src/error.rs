//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use geovocab::config::ConfigFileError;
use geovocab::geohash::GeohashError;
use geovocab::store::{DictionaryError, StoreError};
use std::fmt;
use std::path::PathBuf;
use std::process;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(String),
    /// Failed to read or write the config file
    ConfigFile(ConfigFileError),
    /// Failed to load the segment dictionary
    Dictionary { path: PathBuf, error: DictionaryError },
    /// Failed to open the premium journal
    Store(StoreError),
    /// Invalid coordinate or geohash for a codec command
    Geohash(GeohashError),
    /// Failed to render JSON output
    Output(serde_json::Error),
    /// The request was answered with a failure status
    RequestFailed { status: u16, message: String },
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        if let CliError::Dictionary {
            error: DictionaryError::Io(_),
            ..
        } = self
        {
            eprintln!();
            eprintln!("Point the CLI at a dictionary file with:");
            eprintln!("  geovocab config set dictionary.path <path>");
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::ConfigFile(e) => write!(f, "{}", e),
            CliError::Dictionary { path, error } => {
                write!(f, "Failed to load dictionary '{}': {}", path.display(), error)
            }
            CliError::Store(e) => write!(f, "Failed to open store: {}", e),
            CliError::Geohash(e) => write!(f, "{}", e),
            CliError::Output(e) => write!(f, "Failed to render output: {}", e),
            CliError::RequestFailed { status, message } => {
                write!(f, "{} (status {})", message, status)
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::ConfigFile(e) => Some(e),
            CliError::Dictionary { error, .. } => Some(error),
            CliError::Store(e) => Some(e),
            CliError::Geohash(e) => Some(e),
            CliError::Output(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::ConfigFile(e)
    }
}

impl From<StoreError> for CliError {
    fn from(e: StoreError) -> Self {
        CliError::Store(e)
    }
}

impl From<GeohashError> for CliError {
    fn from(e: GeohashError) -> Self {
        CliError::Geohash(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Output(e)
    }
}
