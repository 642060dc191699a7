//! Console logger implementation

use std::fmt;
use std::io::{self, Write};

use parking_lot::Mutex;

use super::format::format_line;
use super::traits::Logger;
use crate::error::LogResult;
use crate::types::LogLevel;

/// A logger that writes each line to stdout
///
/// Any other `Write` target can be swapped in with [`ConsoleLogger::with_writer`].
pub struct ConsoleLogger {
    out: Mutex<Box<dyn Write + Send>>,
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleLogger {
    /// Create a console logger writing to stdout
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a console logger writing to a custom target
    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            out: Mutex::new(Box::new(writer)),
        }
    }
}

impl fmt::Debug for ConsoleLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleLogger").finish_non_exhaustive()
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, level: LogLevel, message: &str) -> LogResult<()> {
        let line = format_line(level, message);
        let mut out = self.out.lock();
        writeln!(out, "{}", line)?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().clone()).unwrap()
        }
    }

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_error_writes_one_line() {
        let captured = Captured::default();
        let logger = ConsoleLogger::with_writer(captured.clone());
        logger.error("disk full").unwrap();

        let text = captured.text();
        assert_eq!(text.lines().count(), 1);
        assert!(text.ends_with("] [ERROR] disk full\n"));
        assert!(text.starts_with('['));
    }

    #[test]
    fn test_lines_keep_call_order() {
        let captured = Captured::default();
        let logger = ConsoleLogger::with_writer(captured.clone());
        logger.info("first").unwrap();
        logger.verbose("second").unwrap();

        let text = captured.text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("[INFO] first"));
        assert!(lines[1].ends_with("[VERBOSE] second"));
    }

    #[test]
    fn test_write_failure_is_returned() {
        let logger = ConsoleLogger::with_writer(Broken);
        assert!(logger.warning("lost").is_err());
    }

    #[test]
    fn test_stdout_logger_logs() {
        // Goes to real stdout; only checks nothing fails
        let logger = ConsoleLogger::new();
        logger.debug("debug message").unwrap();
        logger.info("info message").unwrap();
    }
}
