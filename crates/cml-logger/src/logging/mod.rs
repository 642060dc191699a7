//! Loggers, line formatting and the process-wide instance

mod traits;
mod format;
mod console;
mod cml;
mod global;
mod facade;
pub mod file_logger;

pub use traits::{Logger, LoggerExt, BoxedLogger, SharedLogger};
pub use format::{format_line, format_line_at, format_timestamp};
pub use console::ConsoleLogger;
pub use file_logger::{FileLogger, default_log_path};
pub use cml::CmlLogger;
pub use global::{get_logger, try_init_logger, is_initialized};
pub use facade::install;
