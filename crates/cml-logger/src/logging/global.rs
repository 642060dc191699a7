//! Process-wide logger
//!
//! The first call that creates the global logger fixes its configuration for
//! the rest of the process. [`get_logger`] silently ignores options passed
//! after that; [`try_init_logger`] reports them as an error instead.

use once_cell::sync::OnceCell;

use super::cml::CmlLogger;
use crate::config::LogOptions;
use crate::error::{LogError, LogResult};

/// Global logger instance
static LOGGER: OnceCell<CmlLogger> = OnceCell::new();

/// Get the global logger, creating it on first use
///
/// `None` means console output. Options passed once the logger exists have
/// no effect.
///
/// ```no_run
/// use cml_logger::{get_logger, LogOptions, Logger};
///
/// let logger = get_logger(Some(LogOptions::file_at("a.log")));
/// logger.info("ready")?;
///
/// // Still writes to a.log
/// get_logger(Some(LogOptions::console())).info("again")?;
/// # Ok::<(), cml_logger::LogError>(())
/// ```
pub fn get_logger(options: Option<LogOptions>) -> &'static CmlLogger {
    LOGGER.get_or_init(|| CmlLogger::new(options.unwrap_or_default()))
}

/// Create the global logger, failing if it already exists
pub fn try_init_logger(options: LogOptions) -> LogResult<&'static CmlLogger> {
    let mut created = false;
    let logger = LOGGER.get_or_init(|| {
        created = true;
        CmlLogger::new(options)
    });
    if created {
        Ok(logger)
    } else {
        Err(LogError::AlreadyInitialized)
    }
}

/// Whether the global logger has been created
pub fn is_initialized() -> bool {
    LOGGER.get().is_some()
}
