//! Configuration for log sessions

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::logging::DEFAULT_RETAIN_COUNT;

/// Parameters used to construct a [`LogSession`](crate::LogSession)
///
/// Every field is optional in a TOML file; missing fields take their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionConfig {
    /// Directory that holds the log files (default: ./log)
    #[serde(default = "default_directory")]
    pub directory: PathBuf,

    /// Prefix for new log files, also used to select files to prune (default: log)
    #[serde(default = "default_program_name")]
    pub program_name: String,

    /// Whether to prune old log files when the session starts (default: true)
    #[serde(default = "default_should_clean")]
    pub should_clean: bool,

    /// Number of previous log files kept besides the new one (default: 3)
    #[serde(default = "default_retain_count")]
    pub retain_count: usize,
}

fn default_directory() -> PathBuf {
    PathBuf::from("./log")
}

fn default_program_name() -> String {
    "log".to_string()
}

fn default_should_clean() -> bool {
    true
}

fn default_retain_count() -> usize {
    DEFAULT_RETAIN_COUNT
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            program_name: default_program_name(),
            should_clean: default_should_clean(),
            retain_count: default_retain_count(),
        }
    }
}

impl SessionConfig {
    /// Default configuration with a different log directory and program name
    pub fn new(directory: impl Into<PathBuf>, program_name: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            program_name: program_name.into(),
            ..Self::default()
        }
    }

    /// Set whether old log files are pruned at startup
    pub fn should_clean(mut self, should_clean: bool) -> Self {
        self.should_clean = should_clean;
        self
    }

    /// Set how many previous log files are kept
    pub fn retain_count(mut self, retain_count: usize) -> Self {
        self.retain_count = retain_count;
        self
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration from `path` if given, otherwise return defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
