//! CML Logger
//!
//! A small process-wide diagnostic logger. Each message is written as one line
//!
//! ```text
//! [2024-03-11T08:15:30.123Z] [INFO] Server started
//! ```
//!
//! to either stdout or an append-only file, chosen once through `LogOptions`.
//!
//! ## Global logger
//!
//! The first call to `get_logger` fixes the configuration for the whole
//! process; later options are ignored. Use `try_init_logger` to be told about
//! a conflicting configuration instead.
//!
//! ```rust,no_run
//! use cml_logger::{get_logger, LogOptions, Logger};
//!
//! let logger = get_logger(Some(LogOptions::file_at("/tmp/t.log")));
//! logger.warning("low memory")?;
//! # Ok::<(), cml_logger::LogError>(())
//! ```
//!
//! ## Owned logger
//!
//! `CmlLogger::new` builds an independent logger that can be passed around
//! explicitly, with the same options and output format.
//!
//! Write failures are returned from every logging call; nothing is retried or
//! redirected to another sink.

pub mod types;
pub mod error;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use types::LogLevel;

pub use error::{LogError, LogResult};

pub use config::{Destination, LogOptions, DEFAULT_LOG_FILE_NAME};

pub use logging::{
    Logger, LoggerExt, SharedLogger,
    CmlLogger, ConsoleLogger, FileLogger,
    get_logger, try_init_logger, install,
    default_log_path, format_line,
};
