//! Bridge to the `log` crate
//!
//! Once installed, `log::info!`, `log::warn!` and friends write through the
//! global logger. Every record is written; levels are only mapped to tags.

use log::{LevelFilter, Metadata, Record};

use super::cml::CmlLogger;
use super::global::get_logger;
use super::traits::Logger;
use crate::config::LogOptions;
use crate::error::{LogError, LogResult};
use crate::types::LogLevel;

impl log::Log for CmlLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        // `log::Log` has no error channel
        let _ = Logger::log(self, LogLevel::from(record.level()), &record.args().to_string());
    }

    fn flush(&self) {}
}

/// Create (or reuse) the global logger and register it with the `log` crate
pub fn install(options: Option<LogOptions>) -> LogResult<&'static CmlLogger> {
    let logger = get_logger(options);
    log::set_logger(logger).map_err(|e| LogError::Facade(e.to_string()))?;
    log::set_max_level(LevelFilter::Trace);
    Ok(logger)
}
