//! logsession - timestamped, color-coded logging to the console and a per-run file
//!
//! A [`LogSession`] keeps the newest few log files of a program, opens a new one
//! for the current run and writes every record to both the console and that file.

pub mod config;
pub mod error;
pub mod logging;

pub use config::SessionConfig;
pub use error::{ConfigError, LogSessionError, ParseLevelError};
pub use logging::{Level, LogSession};
