//! Error types for the logger

use thiserror::Error;

/// Errors that can occur while configuring or writing through the logger
#[derive(Error, Debug)]
pub enum LogError {
    /// The log line could not be written (unwritable file, missing directory, closed stdout, ...)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Options could not be parsed from YAML/JSON
    #[error("Configuration error: {0}")]
    Config(String),

    /// The global logger was already created with a different configuration
    #[error("Logger already initialized")]
    AlreadyInitialized,

    /// Another `log` implementation is already registered
    #[error("Log facade error: {0}")]
    Facade(String),
}

pub type LogResult<T> = Result<T, LogError>;
