//! End-to-end tests for session construction, retention and output.
//!
//! These run against a real temporary directory: files are created with
//! explicit modification times, a session is started over them, and the
//! resulting directory and log file contents are checked.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::NaiveDateTime;
use filetime::FileTime;
use logsession::logging::{ConsoleSink, LINE_TIMESTAMP_FORMAT};
use logsession::{Level, LogSession, SessionConfig};
use tempfile::TempDir;

// =============================================================================
// Helpers
// =============================================================================

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn start(config: SessionConfig) -> (LogSession, SharedBuffer) {
    let buffer = SharedBuffer::default();
    let session =
        LogSession::with_console(config, Box::new(ConsoleSink::new(buffer.clone()))).unwrap();
    (session, buffer)
}

/// Write a file whose modification time is `offset_secs` into 2023
fn old_log(dir: &Path, name: &str, offset_secs: i64) -> PathBuf {
    let path = dir.join(name);
    File::create(&path).unwrap().write_all(b"old\n").unwrap();
    filetime::set_file_mtime(&path, FileTime::from_unix_time(1_672_531_200 + offset_secs, 0))
        .unwrap();
    path
}

fn names_in(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

// =============================================================================
// Retention
// =============================================================================

/// Three dated files with retain_count 1 leave the newest plus the new file.
#[test]
fn e2e_prunes_two_oldest_of_three() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();

    old_log(dir, "app_20230101_000000.log", 0);
    old_log(dir, "app_20230102_000000.log", 86_400);
    let newest = old_log(dir, "app_20230103_000000.log", 2 * 86_400);

    let (session, _) = start(SessionConfig::new(dir, "app").retain_count(1));

    let names = names_in(dir);
    assert_eq!(names.len(), 2, "unexpected files: {names:?}");
    assert!(newest.exists());
    assert!(session.file_path().unwrap().exists());
    assert!(!dir.join("app_20230101_000000.log").exists());
    assert!(!dir.join("app_20230102_000000.log").exists());
}

/// After startup at most retain_count old files survive, plus the new one.
#[test]
fn e2e_retention_bounds_file_count() {
    for retain in 0..4usize {
        for existing in 0..6i64 {
            let temp_dir = TempDir::new().unwrap();
            let dir = temp_dir.path();

            let created: Vec<PathBuf> = (0..existing)
                .map(|i| old_log(dir, &format!("app_old_{i}.log"), i * 60))
                .collect();

            let (_session, _) = start(SessionConfig::new(dir, "app").retain_count(retain));

            let expected_old = (existing as usize).min(retain);
            assert_eq!(
                names_in(dir).len(),
                expected_old + 1,
                "retain={retain} existing={existing}"
            );

            // The newest ones are the survivors
            let survivors: Vec<&PathBuf> = created.iter().filter(|p| p.exists()).collect();
            let newest: Vec<&PathBuf> = created.iter().rev().take(expected_old).collect();
            assert_eq!(survivors.len(), newest.len());
            for path in newest {
                assert!(path.exists(), "{} should survive", path.display());
            }
        }
    }
}

#[test]
fn e2e_clean_disabled_deletes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();

    for i in 0..5 {
        old_log(dir, &format!("app_2023010{i}_000000.log"), i * 10);
    }

    let config = SessionConfig::new(dir, "app")
        .retain_count(0)
        .should_clean(false);
    let (_session, _) = start(config);

    assert_eq!(names_in(dir).len(), 6);
}

#[test]
fn e2e_other_programs_are_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();

    let server = old_log(dir, "server_20230101_000000.log", 0);
    old_log(dir, "worker_20230101_000000.log", 5);

    let (_session, _) = start(SessionConfig::new(dir, "worker").retain_count(0));

    assert!(server.exists());
    assert!(!dir.join("worker_20230101_000000.log").exists());
}

// =============================================================================
// Output
// =============================================================================

/// A line written at INFO reads back in the documented format.
#[test]
fn e2e_line_round_trips_through_file() {
    let temp_dir = TempDir::new().unwrap();
    let (mut session, console) = start(SessionConfig::new(temp_dir.path(), "app"));

    session.log(Level::Info, "hello");
    let content = fs::read_to_string(session.file_path().unwrap()).unwrap();

    assert!(content.ends_with('\n'));
    let line = content.trim_end_matches('\n');
    assert_eq!(line.lines().count(), 1);

    // [YYYY-MM-DD HH:MM:SS] [app] [INFO] hello
    assert!(line.starts_with('['));
    let (stamp, rest) = line[1..].split_once("] ").unwrap();
    assert!(NaiveDateTime::parse_from_str(stamp, LINE_TIMESTAMP_FORMAT).is_ok());
    assert_eq!(stamp.len(), 19);
    assert_eq!(rest, "[app] [INFO] hello");

    assert_eq!(console.contents(), format!("\x1b[32m{line}\x1b[0m\n"));
}

#[test]
fn e2e_every_call_is_one_line_per_sink() {
    let temp_dir = TempDir::new().unwrap();
    let (mut session, console) = start(SessionConfig::new(temp_dir.path(), "svc"));

    let messages = ["plain", "with [brackets]", "", "unicode ✓ ok"];
    for (level, message) in Level::ALL.iter().zip(messages.iter().cycle()) {
        session.log(*level, message);
    }

    let content = fs::read_to_string(session.file_path().unwrap()).unwrap();
    let file_lines: Vec<&str> = content.lines().collect();
    let console_contents = console.contents();
    let console_lines: Vec<&str> = console_contents.lines().collect();

    assert_eq!(file_lines.len(), Level::ALL.len());
    assert_eq!(console_lines.len(), Level::ALL.len());

    for ((level, message), (file_line, console_line)) in Level::ALL
        .iter()
        .zip(messages.iter().cycle())
        .zip(file_lines.iter().zip(console_lines.iter()))
    {
        let tail = format!("[svc] [{}] {}", level.as_str(), message);
        assert!(file_line.ends_with(&tail), "{file_line:?}");
        assert!(
            console_line.ends_with(&format!("{tail}\x1b[0m")),
            "{console_line:?}"
        );
        assert!(console_line.starts_with(level.color()));
    }
}

/// Fatal on a console-only session just prints.
#[test]
fn e2e_fatal_on_console_only_session() {
    let temp_dir = TempDir::new().unwrap();
    let (mut session, console) = start(SessionConfig::new(temp_dir.path(), "no/such/app"));

    assert!(!session.is_open());
    session.log(Level::Fatal, "disk full");

    assert!(console.contents().contains("[FATAL] disk full"));
    assert!(names_in(temp_dir.path()).is_empty());
}

#[test]
fn e2e_drop_closes_file_with_all_lines() {
    let temp_dir = TempDir::new().unwrap();
    let (mut session, _) = start(SessionConfig::new(temp_dir.path(), "app"));

    session.info("one");
    session.error("two");
    let path = session.file_path().unwrap().to_path_buf();

    session.close();
    session.close();
    drop(session);

    let content = fs::read_to_string(path).unwrap();
    assert_eq!(content.lines().count(), 2);
}
