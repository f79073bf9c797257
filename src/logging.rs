//! Tracing subscriber setup shared by the binary and integration tests.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use chrono::Local;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;

/// Keeps the non-blocking file writer alive for the rest of the process.
static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Log file name inside the logs directory.
pub const LOG_FILE_NAME: &str = "folio.log";

/// Local timestamps as `YYYY-MM-DD HH:MM:SS`.
pub struct FolioTimer;

impl FormatTime for FolioTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        let ts = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        w.write_str(&ts)
    }
}

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error, with colors.
    Stderr,
    /// Append to this file, without colors.
    File(PathBuf),
}

/// What: Build the env filter for a default level.
///
/// Inputs:
/// - `level`: Level used when `RUST_LOG` is unset or invalid
///
/// Output:
/// - `EnvFilter` honoring `RUST_LOG` first
fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// What: Install the global tracing subscriber.
///
/// Inputs:
/// - `level`: Default level (`trace`..`error`)
/// - `target`: Where to write
///
/// Output:
/// - None
///
/// Details:
/// - Falls back to stderr when the log file cannot be opened.
/// - Safe to call more than once; later calls are no-ops.
pub fn init(level: &str, target: &LogTarget) {
    match target {
        LogTarget::Stderr => init_stderr(level),
        LogTarget::File(path) => match open_log_file(path) {
            Ok(file) => {
                let (non_blocking, guard) = tracing_appender::non_blocking(file);
                let installed = tracing_subscriber::fmt()
                    .with_env_filter(env_filter(level))
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(non_blocking)
                    .with_timer(FolioTimer)
                    .try_init()
                    .is_ok();
                if installed {
                    let _ = LOG_GUARD.set(guard);
                    tracing::info!(path = %path.display(), "logging initialized");
                }
            }
            Err(e) => {
                init_stderr(level);
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "failed to open log file; using stderr"
                );
            }
        },
    }
}

fn init_stderr(level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_target(false)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_timer(FolioTimer)
        .try_init();
}

fn open_log_file(path: &Path) -> std::io::Result<fs::File> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir)?;
    }
    fs::OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: `FormatTime` impl writes a timestamp of the expected shape.
    fn folio_timer_formats_time() {
        let mut buf = String::new();
        let mut writer = Writer::new(&mut buf);
        FolioTimer
            .format_time(&mut writer)
            .expect("formatting into a String cannot fail");
        assert_eq!(buf.len(), "2024-01-01 00:00:00".len());
        assert_eq!(&buf[4..5], "-");
    }

    #[test]
    fn open_log_file_creates_parent_directories() {
        let temp_dir = tempfile::TempDir::new().expect("Failed to create temp directory for test");
        let path = temp_dir.path().join("nested").join(LOG_FILE_NAME);
        open_log_file(&path).expect("log file should open");
        assert!(path.is_file());
    }
}
