//! Severity levels
//!
//! Levels only label and color a record; nothing is filtered by level.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseLevelError;

/// ANSI SGR sequence that restores the default terminal color
pub const RESET_COLOR: &str = "\x1b[0m";

/// Severity of a log record, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Debug,
    Info,
    Warning,
    Error,
    Fatal,
}

impl Level {
    /// All levels in ascending severity
    pub const ALL: [Level; 5] = [
        Level::Debug,
        Level::Info,
        Level::Warning,
        Level::Error,
        Level::Fatal,
    ];

    /// Get the label written between brackets in a log line
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
        }
    }

    /// Get the ANSI color used for this level on the console
    pub fn color(&self) -> &'static str {
        match self {
            Level::Debug => "\x1b[36m",   // cyan
            Level::Info => "\x1b[32m",    // green
            Level::Warning => "\x1b[33m", // yellow
            Level::Error => "\x1b[31m",   // red
            Level::Fatal => "\x1b[35m",   // magenta
        }
    }
}

/// Look up the console color for a level label
///
/// Labels that are not a known level get [`RESET_COLOR`].
pub fn color_for_label(label: &str) -> &'static str {
    label
        .parse::<Level>()
        .map(|level| level.color())
        .unwrap_or(RESET_COLOR)
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Parse a level label, ignoring ASCII case
    ///
    /// `WARN` is accepted as an alias for `WARNING`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(Level::Debug),
            "INFO" => Ok(Level::Info),
            "WARNING" | "WARN" => Ok(Level::Warning),
            "ERROR" => Ok(Level::Error),
            "FATAL" => Ok(Level::Fatal),
            _ => Err(ParseLevelError {
                label: s.to_string(),
            }),
        }
    }
}
