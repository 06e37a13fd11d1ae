//! Log file retention management
//!
//! Handles cleanup of old log files based on how many a program may keep.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Default number of previous log files kept per program
pub const DEFAULT_RETAIN_COUNT: usize = 3;

/// Outcome of a pruning pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PruneReport {
    /// Number of files that matched the program name
    pub matched: usize,
    /// Files that were deleted, oldest first
    pub removed: Vec<PathBuf>,
}

/// Check whether a file name belongs to a program
///
/// This is a plain substring match: `app` also matches `app2_...log` and
/// `myapp.txt`. An empty program name matches every file.
pub fn matches_program(file_name: &str, program_name: &str) -> bool {
    file_name.contains(program_name)
}

/// Delete the oldest log files of `program_name` until at most `retain_count` remain
///
/// Only regular files directly inside `logs_dir` are considered; symlinks count
/// when they point at a regular file. Files are ordered by modification time;
/// files with equal times keep the order `read_dir` returned them in. A file
/// that cannot be deleted is skipped and still counts towards the files removed
/// from consideration.
pub fn prune_logs(
    logs_dir: &Path,
    program_name: &str,
    retain_count: usize,
) -> io::Result<PruneReport> {
    prune_logs_with(logs_dir, program_name, retain_count, |path| {
        fs::remove_file(path)
    })
}

fn prune_logs_with<F>(
    logs_dir: &Path,
    program_name: &str,
    retain_count: usize,
    mut remove: F,
) -> io::Result<PruneReport>
where
    F: FnMut(&Path) -> io::Result<()>,
{
    let mut log_files = matching_files(logs_dir, program_name)?;
    let mut report = PruneReport {
        matched: log_files.len(),
        removed: Vec::new(),
    };

    if log_files.len() <= retain_count {
        return Ok(report);
    }

    // Stable, so equal timestamps stay in directory order
    log_files.sort_by_key(|(_, modified)| *modified);

    let excess = log_files.len() - retain_count;
    for (path, _) in log_files.into_iter().take(excess) {
        match remove(&path) {
            Ok(()) => {
                tracing::debug!("Removed old log file {}", path.display());
                report.removed.push(path);
            }
            Err(e) => {
                tracing::warn!("Failed to remove old log file {}: {}", path.display(), e);
            }
        }
    }

    Ok(report)
}

/// Collect regular files in `logs_dir` whose name contains `program_name`
fn matching_files(
    logs_dir: &Path,
    program_name: &str,
) -> io::Result<Vec<(PathBuf, SystemTime)>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(logs_dir)? {
        let path = entry?.path();

        // Follows symlinks
        let Ok(metadata) = fs::metadata(&path) else {
            continue;
        };
        if !metadata.is_file() {
            continue;
        }

        let Some(name) = path.file_name() else {
            continue;
        };
        if !matches_program(&name.to_string_lossy(), program_name) {
            continue;
        }

        // Files whose mtime can't be read sort first
        let modified = metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH);

        files.push((path, modified));
    }

    Ok(files)
}
