//! Logging system for logsession
//!
//! Provides colored console output, per-run log files and count-based
//! retention of old log files.

mod level;
mod record;
mod retention;
mod session;
mod sink;

pub use level::{color_for_label, Level, RESET_COLOR};
pub use record::{LogRecord, LINE_TIMESTAMP_FORMAT};
pub use retention::{matches_program, prune_logs, PruneReport, DEFAULT_RETAIN_COUNT};
pub use session::LogSession;
pub use sink::{create_log_file_path, ConsoleSink, FileSink, Sink, FILE_TIMESTAMP_FORMAT};
