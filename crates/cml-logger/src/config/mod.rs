//! Logger configuration
//!
//! `LogOptions` is read once, when the logger is created, and never changes
//! afterwards. It can be built in code or loaded from a YAML/JSON document.

mod options;

pub use options::{Destination, LogOptions, DEFAULT_LOG_FILE_NAME};
