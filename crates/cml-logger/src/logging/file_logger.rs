//! Append-only file logger
//!
//! Every call opens the target in append mode, writes the whole line with a
//! single `write_all`, and closes it again before returning. The file is
//! created when missing; its parent directory is not.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::format::format_line;
use super::traits::Logger;
use crate::config::DEFAULT_LOG_FILE_NAME;
use crate::error::LogResult;
use crate::types::LogLevel;

/// Default log file: `cml.log` next to the running executable
///
/// Falls back to `cml.log` in the working directory when the executable
/// location is unknown.
pub fn default_log_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_LOG_FILE_NAME)))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE_NAME))
}

/// A logger that appends lines to a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLogger {
    path: PathBuf,
}

impl FileLogger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Logger targeting [`default_log_path`]
    pub fn with_default_path() -> Self {
        Self::new(default_log_path())
    }

    /// Get the path to the log file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, line: &str) -> LogResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        Ok(())
    }
}

impl Logger for FileLogger {
    fn log(&self, level: LogLevel, message: &str) -> LogResult<()> {
        let mut line = format_line(level, message);
        line.push('\n');
        self.append(&line)
    }
}
