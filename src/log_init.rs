//! File logger for the `log` facade.
//!
//! The terminal UI owns stdout, so records go to an append-only file instead.

use log::{LevelFilter, Metadata, Record};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};

struct FileLogger {
    file_path: PathBuf,
    level: LevelFilter,
}

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut file) = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)
            {
                let _ = writeln!(
                    file,
                    "[{}] {}: {}",
                    record.level(),
                    record.target(),
                    record.args()
                );
            }
        }
    }

    fn flush(&self) {}
}

/// Install the file logger at `path`, keeping records up to `level`.
///
/// The file is created (or opened for append) up front so a bad path fails
/// here instead of silently dropping every record.
pub fn init_logger(path: &Path, level: LevelFilter) -> Result<()> {
    OpenOptions::new().create(true).append(true).open(path)?;

    let logger = FileLogger {
        file_path: path.to_path_buf(),
        level,
    };
    log::set_boxed_logger(Box::new(logger)).map_err(|e| AppError::Logger(e.to_string()))?;
    log::set_max_level(level);
    Ok(())
}
