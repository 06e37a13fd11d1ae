//! Error types for log sessions and their configuration

use std::path::PathBuf;

/// Errors that prevent a [`LogSession`](crate::LogSession) from being created
#[derive(Debug, thiserror::Error)]
pub enum LogSessionError {
    #[error("failed to create log directory '{}': {source}", .path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while loading a [`SessionConfig`](crate::SessionConfig)
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// A level label that does not name any [`Level`](crate::Level)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown log level '{label}'")]
pub struct ParseLevelError {
    pub label: String,
}
