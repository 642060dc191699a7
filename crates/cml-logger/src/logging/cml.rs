//! Configured logger
//!
//! `CmlLogger` resolves a `LogOptions` once, at construction, into a concrete
//! sink and dispatches every line to it. Applications can own one directly
//! and pass it around, or use the process-wide instance from
//! [`get_logger`](super::get_logger).

use std::path::Path;

use super::console::ConsoleLogger;
use super::file_logger::FileLogger;
use super::traits::Logger;
use crate::config::{Destination, LogOptions};
use crate::error::LogResult;
use crate::types::LogLevel;

#[derive(Debug)]
enum Sink {
    Console(ConsoleLogger),
    File(FileLogger),
}

/// Logger built from `LogOptions`
///
/// # Example
///
/// ```no_run
/// use cml_logger::{CmlLogger, LogOptions, Logger};
///
/// let logger = CmlLogger::new(LogOptions::file_at("/tmp/t.log"));
/// logger.warning("low memory")?;
/// # Ok::<(), cml_logger::LogError>(())
/// ```
#[derive(Debug)]
pub struct CmlLogger {
    options: LogOptions,
    sink: Sink,
}

impl Default for CmlLogger {
    fn default() -> Self {
        Self::new(LogOptions::default())
    }
}

impl CmlLogger {
    /// Create a logger, resolving the file path for the file destination
    ///
    /// Unrecognized destinations log to the console.
    pub fn new(options: LogOptions) -> Self {
        let sink = match &options.destination {
            Destination::File => Sink::File(match &options.filepath {
                Some(path) => FileLogger::new(path),
                None => FileLogger::with_default_path(),
            }),
            Destination::Console | Destination::Other(_) => Sink::Console(ConsoleLogger::new()),
        };
        Self { options, sink }
    }

    /// Create a console logger that writes to a custom target instead of stdout
    pub fn with_console_writer(writer: impl std::io::Write + Send + 'static) -> Self {
        Self {
            options: LogOptions::console(),
            sink: Sink::Console(ConsoleLogger::with_writer(writer)),
        }
    }

    /// Options this logger was created with
    pub fn options(&self) -> &LogOptions {
        &self.options
    }

    /// Resolved file path, `None` unless lines go to a file
    pub fn log_file_path(&self) -> Option<&Path> {
        match &self.sink {
            Sink::File(file) => Some(file.path()),
            Sink::Console(_) => None,
        }
    }

    pub fn writes_to_console(&self) -> bool {
        matches!(self.sink, Sink::Console(_))
    }
}

impl Logger for CmlLogger {
    fn log(&self, level: LogLevel, message: &str) -> LogResult<()> {
        match &self.sink {
            Sink::Console(console) => console.log(level, message),
            Sink::File(file) => file.log(level, message),
        }
    }
}
