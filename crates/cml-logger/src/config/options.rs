//! Logger options and their YAML/JSON loaders

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LogError, LogResult};

/// File name used when the file destination is chosen without a path
pub const DEFAULT_LOG_FILE_NAME: &str = "cml.log";

/// Where formatted lines are written
///
/// Unrecognized destination names are kept as `Other` rather than rejected;
/// the logger treats them as console output.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Destination {
    /// Standard output
    #[default]
    Console,
    /// Append-only file
    File,
    /// Anything else, written to the console
    Other(String),
}

impl Destination {
    pub fn as_str(&self) -> &str {
        match self {
            Destination::Console => "console",
            Destination::File => "file",
            Destination::Other(name) => name,
        }
    }
}

impl From<&str> for Destination {
    fn from(value: &str) -> Self {
        match value {
            "console" => Destination::Console,
            "file" => Destination::File,
            other => Destination::Other(other.to_string()),
        }
    }
}

impl From<String> for Destination {
    fn from(value: String) -> Self {
        match value.as_str() {
            "console" => Destination::Console,
            "file" => Destination::File,
            _ => Destination::Other(value),
        }
    }
}

impl From<Destination> for String {
    fn from(value: Destination) -> Self {
        match value {
            Destination::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logger configuration
///
/// # Example
///
/// ```
/// use cml_logger::{Destination, LogOptions};
///
/// let options = LogOptions::from_yaml_str("destination: file\nfilepath: app.log").unwrap();
/// assert_eq!(options.destination, Destination::File);
/// assert_eq!(options, LogOptions::file_at("app.log"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LogOptions {
    /// Selected sink
    #[serde(default)]
    pub destination: Destination,

    /// Target file, only consulted for `Destination::File`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filepath: Option<PathBuf>,
}

impl LogOptions {
    pub fn new(destination: impl Into<Destination>) -> Self {
        Self {
            destination: destination.into(),
            filepath: None,
        }
    }

    /// Log to standard output
    pub fn console() -> Self {
        Self::new(Destination::Console)
    }

    /// Log to the default `cml.log` file
    pub fn file() -> Self {
        Self::new(Destination::File)
    }

    /// Log to a specific file
    pub fn file_at(path: impl Into<PathBuf>) -> Self {
        Self::file().with_filepath(path)
    }

    pub fn with_filepath(mut self, path: impl Into<PathBuf>) -> Self {
        self.filepath = Some(path.into());
        self
    }

    /// Parse options from a YAML document
    pub fn from_yaml_str(yaml: &str) -> LogResult<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| LogError::Config(format!("Failed to parse YAML: {}", e)))
    }

    /// Parse options from a JSON document
    pub fn from_json_str(json: &str) -> LogResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| LogError::Config(format!("Failed to parse JSON: {}", e)))
    }

    /// Load options from a YAML (or JSON) file
    pub fn load(path: impl AsRef<Path>) -> LogResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }
}
