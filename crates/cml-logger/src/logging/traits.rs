//! Logger trait definition

use std::sync::Arc;

use crate::error::LogResult;
use crate::types::LogLevel;

/// Logger abstraction
///
/// Implementations only provide [`Logger::log`]; the severity methods are
/// plain pass-throughs with the matching level. Write failures are returned
/// to the caller, never retried or redirected.
///
/// Implementations:
/// - `ConsoleLogger`: Writes to stdout (or any writer)
/// - `FileLogger`: Appends to a file
/// - `CmlLogger`: Dispatches to one of the above from `LogOptions`
pub trait Logger: Send + Sync {
    /// Format and write one line at the given level
    fn log(&self, level: LogLevel, message: &str) -> LogResult<()>;

    /// Log a debug message
    fn debug(&self, message: &str) -> LogResult<()> {
        self.log(LogLevel::Debug, message)
    }

    /// Log an info message
    fn info(&self, message: &str) -> LogResult<()> {
        self.log(LogLevel::Info, message)
    }

    /// Log a warning message
    fn warning(&self, message: &str) -> LogResult<()> {
        self.log(LogLevel::Warning, message)
    }

    /// Log an error message
    fn error(&self, message: &str) -> LogResult<()> {
        self.log(LogLevel::Error, message)
    }

    /// Log a verbose message
    fn verbose(&self, message: &str) -> LogResult<()> {
        self.log(LogLevel::Verbose, message)
    }
}

/// Type alias for a boxed logger
pub type BoxedLogger = Box<dyn Logger>;

/// Type alias for an Arc-wrapped logger
pub type SharedLogger = Arc<dyn Logger>;

impl<L: Logger + ?Sized> Logger for Box<L> {
    fn log(&self, level: LogLevel, message: &str) -> LogResult<()> {
        (**self).log(level, message)
    }
}

impl<L: Logger + ?Sized> Logger for Arc<L> {
    fn log(&self, level: LogLevel, message: &str) -> LogResult<()> {
        (**self).log(level, message)
    }
}

impl<L: Logger + ?Sized> Logger for &L {
    fn log(&self, level: LogLevel, message: &str) -> LogResult<()> {
        (**self).log(level, message)
    }
}

/// Extension trait for logging with format arguments
pub trait LoggerExt: Logger {
    /// Log a debug message with format arguments
    fn debug_fmt(&self, args: std::fmt::Arguments<'_>) -> LogResult<()> {
        self.debug(&args.to_string())
    }

    /// Log an info message with format arguments
    fn info_fmt(&self, args: std::fmt::Arguments<'_>) -> LogResult<()> {
        self.info(&args.to_string())
    }

    /// Log a warning message with format arguments
    fn warning_fmt(&self, args: std::fmt::Arguments<'_>) -> LogResult<()> {
        self.warning(&args.to_string())
    }

    /// Log an error message with format arguments
    fn error_fmt(&self, args: std::fmt::Arguments<'_>) -> LogResult<()> {
        self.error(&args.to_string())
    }

    /// Log a verbose message with format arguments
    fn verbose_fmt(&self, args: std::fmt::Arguments<'_>) -> LogResult<()> {
        self.verbose(&args.to_string())
    }
}

// Implement LoggerExt for all Logger implementations
impl<T: Logger + ?Sized> LoggerExt for T {}

/// Convenience macros for logging
///
/// Each expands to the matching severity method and evaluates to its `LogResult<()>`.
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $crate::Logger::debug(&$logger, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $crate::Logger::info(&$logger, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warning {
    ($logger:expr, $($arg:tt)*) => {
        $crate::Logger::warning(&$logger, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $crate::Logger::error(&$logger, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_verbose {
    ($logger:expr, $($arg:tt)*) => {
        $crate::Logger::verbose(&$logger, &format!($($arg)*))
    };
}
