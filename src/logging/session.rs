//! Per-run log session
//!
//! A [`LogSession`] owns one log file for its whole lifetime. Creating it
//! prunes old files of the same program and opens a fresh timestamped file;
//! dropping it (or calling [`LogSession::close`]) flushes and closes the file.
//!
//! Sessions are not synchronized. `log` takes `&mut self`, so sharing one
//! session between threads needs a lock around it, e.g. `Mutex<LogSession>`.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use super::level::Level;
use super::record::LogRecord;
use super::retention;
use super::sink::{create_log_file_path, ConsoleSink, FileSink, Sink};
use crate::config::SessionConfig;
use crate::error::LogSessionError;

/// Console output plus one log file per run
pub struct LogSession {
    directory: PathBuf,
    program_name: String,
    retain_count: usize,
    console: Box<dyn Sink + Send>,
    /// `None` once closed, or when the file could not be opened
    file: Option<FileSink>,
    closed: bool,
}

impl LogSession {
    /// Start a session that writes its console output to stdout
    pub fn new(config: SessionConfig) -> Result<Self, LogSessionError> {
        Self::with_console(config, Box::new(ConsoleSink::stdout()))
    }

    /// Start a session that writes its console output to `console`
    ///
    /// Fails only if the log directory can't be created. Pruning errors are
    /// logged and ignored, and if the log file can't be opened the session
    /// writes to the console only.
    pub fn with_console(
        config: SessionConfig,
        console: Box<dyn Sink + Send>,
    ) -> Result<Self, LogSessionError> {
        let SessionConfig {
            directory,
            program_name,
            should_clean,
            retain_count,
        } = config;

        fs::create_dir_all(&directory).map_err(|source| LogSessionError::CreateDirectory {
            path: directory.clone(),
            source,
        })?;

        if should_clean {
            match retention::prune_logs(&directory, &program_name, retain_count) {
                Ok(report) => {
                    if !report.removed.is_empty() {
                        tracing::debug!(
                            "Pruned {} of {} log files for '{}' in {}",
                            report.removed.len(),
                            report.matched,
                            program_name,
                            directory.display()
                        );
                    }
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to prune log files in {}: {}",
                        directory.display(),
                        e
                    );
                }
            }
        }

        let path = create_log_file_path(&directory, &program_name, Local::now());
        let file = match FileSink::create(&path) {
            Ok(file) => Some(file),
            Err(e) => {
                tracing::warn!(
                    "Failed to open log file {}, logging to console only: {}",
                    path.display(),
                    e
                );
                None
            }
        };

        Ok(Self {
            directory,
            program_name,
            retain_count,
            console,
            file,
            closed: false,
        })
    }

    /// Write a record to the console and, if open, the log file
    ///
    /// File write errors are not returned; the next call writes again.
    pub fn log(&mut self, level: Level, message: &str) {
        let record = LogRecord::new(&self.program_name, level, message);

        let _ = self.console.write(&record);

        if let Some(file) = self.file.as_mut() {
            if let Err(e) = file.write(&record) {
                tracing::debug!("Failed to write to {}: {}", file.path().display(), e);
            }
        }
    }

    pub fn debug(&mut self, message: &str) {
        self.log(Level::Debug, message);
    }

    pub fn info(&mut self, message: &str) {
        self.log(Level::Info, message);
    }

    pub fn warning(&mut self, message: &str) {
        self.log(Level::Warning, message);
    }

    pub fn error(&mut self, message: &str) {
        self.log(Level::Error, message);
    }

    /// Log at [`Level::Fatal`]. This does not exit the process.
    pub fn fatal(&mut self, message: &str) {
        self.log(Level::Fatal, message);
    }

    /// Flush and close the log file
    ///
    /// Later calls do nothing. Records logged after closing go to the console only.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;

        if let Some(mut file) = self.file.take() {
            if let Err(e) = file.flush() {
                tracing::debug!("Failed to flush {}: {}", file.path().display(), e);
            }
        }
        let _ = self.console.flush();
    }

    /// Whether the log file is open
    pub fn is_open(&self) -> bool {
        self.file.is_some()
    }

    /// Path of this run's log file, if it is open
    pub fn file_path(&self) -> Option<&Path> {
        self.file.as_ref().map(|f| f.path())
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn program_name(&self) -> &str {
        &self.program_name
    }

    pub fn retain_count(&self) -> usize {
        self.retain_count
    }
}

impl Drop for LogSession {
    fn drop(&mut self) {
        self.close();
    }
}
