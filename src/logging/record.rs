//! A single formatted log record
//!
//! Records are built per `log()` call and handed to every sink; they are never
//! stored.

use chrono::{DateTime, Local};

use super::level::{Level, RESET_COLOR};

/// Timestamp format used inside a log line
pub const LINE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A log record
#[derive(Debug, Clone)]
pub struct LogRecord<'a> {
    /// Wall-clock time when the record was created
    pub timestamp: DateTime<Local>,
    /// Program name of the owning session
    pub program_name: &'a str,
    /// Severity level
    pub level: Level,
    /// Message text, written unmodified
    pub message: &'a str,
}

impl<'a> LogRecord<'a> {
    /// Create a record stamped with the current local time
    pub fn new(program_name: &'a str, level: Level, message: &'a str) -> Self {
        Self::at(Local::now(), program_name, level, message)
    }

    /// Create a record with an explicit timestamp
    pub fn at(
        timestamp: DateTime<Local>,
        program_name: &'a str,
        level: Level,
        message: &'a str,
    ) -> Self {
        Self {
            timestamp,
            program_name,
            level,
            message,
        }
    }

    /// Format as `[YYYY-MM-DD HH:MM:SS] [program] [LEVEL] message`
    pub fn line(&self) -> String {
        format!(
            "[{}] [{}] [{}] {}",
            self.timestamp.format(LINE_TIMESTAMP_FORMAT),
            self.program_name,
            self.level.as_str(),
            self.message
        )
    }

    /// Format the line wrapped in the level's color and a trailing reset
    pub fn colored_line(&self) -> String {
        format!("{}{}{}", self.level.color(), self.line(), RESET_COLOR)
    }
}
