//! Output sinks for log records
//!
//! A session writes every record to a console sink and, while its log file is
//! open, to a [`FileSink`]. The console sink is replaceable so output can be
//! captured.

use std::fs::{File, OpenOptions};
use std::io::{self, Stdout, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use super::record::LogRecord;

/// Timestamp format used in log file names
pub const FILE_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Something that accepts formatted log records
pub trait Sink {
    /// Write one record as one line
    fn write(&mut self, record: &LogRecord<'_>) -> io::Result<()>;

    /// Flush anything the sink has buffered
    fn flush(&mut self) -> io::Result<()>;
}

/// Build the path of a new log file: `{dir}/{program_name}_{YYYYMMDD_HHMMSS}.log`
pub fn create_log_file_path(dir: &Path, program_name: &str, now: DateTime<Local>) -> PathBuf {
    dir.join(format!(
        "{}_{}.log",
        program_name,
        now.format(FILE_TIMESTAMP_FORMAT)
    ))
}

/// Writes color-coded lines to a terminal-like stream (stdout by default)
pub struct ConsoleSink<W: Write = Stdout> {
    out: W,
}

impl ConsoleSink<Stdout> {
    /// Console sink on the process's standard output
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> ConsoleSink<W> {
    /// Console sink over an arbitrary writer
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Get the underlying writer back
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Sink for ConsoleSink<W> {
    fn write(&mut self, record: &LogRecord<'_>) -> io::Result<()> {
        writeln!(self.out, "{}", record.colored_line())?;
        self.out.flush()
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// Writes plain lines to a log file, flushing after every record
#[derive(Debug)]
pub struct FileSink {
    file: File,
    path: PathBuf,
}

impl FileSink {
    /// Create (or truncate) the file at `path`
    pub fn create(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&path)?;
        Ok(Self { file, path })
    }

    /// Path of the open file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn write(&mut self, record: &LogRecord<'_>) -> io::Result<()> {
        let mut line = record.line();
        line.push('\n');
        self.file.write_all(line.as_bytes())?;
        self.file.flush()
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}
