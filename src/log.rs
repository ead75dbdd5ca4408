//! Simple file-based logging behind the `log` facade
//!
//! Call [`init`] once at startup; afterwards `log::info!` and friends append
//! `[timestamp] LEVEL target: message` lines to the configured file.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{LevelFilter, Log, Metadata, Record};
use parking_lot::Mutex;

/// Logger that appends to a single file
struct FileLogger {
    file: Mutex<Option<File>>,
    level: LevelFilter,
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let mut guard = self.file.lock();
        if let Some(ref mut file) = *guard {
            let _ = writeln!(
                file,
                "[{}] {:<5} {}: {}",
                timestamp(),
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        if let Some(ref mut file) = *self.file.lock() {
            let _ = file.flush();
        }
    }
}

/// Get the directory where the executable is located
pub fn exe_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|d| d.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Default log file location (<data dir>/nisi/nisi.log)
pub fn default_log_path() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("nisi"))
        .unwrap_or_else(exe_dir)
        .join("nisi.log")
}

/// Parse a level name from configuration, falling back to `Info`
pub fn parse_level(name: &str) -> LevelFilter {
    name.parse().unwrap_or(LevelFilter::Info)
}

/// Initialize logging to `path`.
///
/// A file that cannot be opened leaves logging disabled instead of failing.
/// Calling this twice keeps the first logger.
pub fn init(path: &Path, level: LevelFilter) {
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .ok();

    let logger = FileLogger {
        file: Mutex::new(file),
        level,
    };

    if log::set_boxed_logger(Box::new(logger)).is_ok() {
        log::set_max_level(level);
        log::info!("=== Nisi log started ===");
    }
}

fn timestamp() -> String {
    chrono::Local::now()
        .format("%Y-%m-%d %H:%M:%S%.3f")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_level("WARN"), LevelFilter::Warn);
        assert_eq!(parse_level("nonsense"), LevelFilter::Info);
    }

    #[test]
    fn test_logger_writes_enabled_records_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.log");
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .unwrap();
        let logger = FileLogger {
            file: Mutex::new(Some(file)),
            level: LevelFilter::Info,
        };

        logger.log(
            &Record::builder()
                .level(log::Level::Info)
                .target("nisi::test")
                .args(format_args!("kept"))
                .build(),
        );
        logger.log(
            &Record::builder()
                .level(log::Level::Debug)
                .target("nisi::test")
                .args(format_args!("dropped"))
                .build(),
        );
        logger.flush();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("INFO  nisi::test: kept"));
        assert!(!content.contains("dropped"));
    }

    #[test]
    fn test_init_installs_file_logger() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("nisi.log");

        init(&path, LevelFilter::Info);
        log::logger().flush();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("=== Nisi log started ==="));
    }
}
