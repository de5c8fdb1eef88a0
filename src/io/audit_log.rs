//! Audit log sinks
//!
//! Every action a session takes is recorded as a [`LogEntry`] through the
//! [`LogSink`] trait. The binary appends entries to a file; tests collect
//! them in memory.
//!
//! # Format
//!
//! [`FileLog`] writes one line per entry:
//!
//! ```text
//! INFO: 2026/10/19 09:30:00 Deposit of 500.00 made. New balance: 2500.00
//! ```

use crate::types::BankError;
use chrono::{DateTime, Local};
use log::Level;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Timestamp layout used in the log file
const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// One audit record
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub level: Level,
    pub message: String,
}

impl LogEntry {
    /// Create an `Info` entry stamped with the current local time
    pub fn info(message: impl Into<String>) -> Self {
        LogEntry {
            timestamp: Local::now(),
            level: Level::Info,
            message: message.into(),
        }
    }

    /// Render the entry as a log file line (without the trailing newline)
    pub fn to_line(&self) -> String {
        format!(
            "{}: {} {}",
            self.level.as_str(),
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.message
        )
    }
}

/// Destination for audit entries
pub trait LogSink {
    /// Record a single entry
    fn record(&mut self, entry: LogEntry) -> Result<(), BankError>;
}

/// Append-only log file
///
/// The file is opened once and held for the lifetime of the sink; it is
/// closed when the sink is dropped.
#[derive(Debug)]
pub struct FileLog {
    file: File,
}

impl FileLog {
    /// Open `path` for appending, creating it if needed
    ///
    /// New files are created with owner read/write permissions (0644) on
    /// unix.
    ///
    /// # Errors
    ///
    /// Returns `LogFile` if the file cannot be opened or created.
    pub fn open(path: &Path) -> Result<Self, BankError> {
        let mut options = OpenOptions::new();
        options.append(true).create(true);

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o644);
        }

        let file = options
            .open(path)
            .map_err(|e| BankError::log_file(&path.display().to_string(), &e))?;

        Ok(FileLog { file })
    }
}

impl LogSink for FileLog {
    fn record(&mut self, entry: LogEntry) -> Result<(), BankError> {
        writeln!(self.file, "{}", entry.to_line())?;
        self.file.flush()?;
        Ok(())
    }
}

/// In-memory sink that keeps every entry
#[derive(Debug, Default)]
pub struct MemoryLog {
    entries: Vec<LogEntry>,
}

impl MemoryLog {
    pub fn new() -> Self {
        MemoryLog::default()
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Messages of all recorded entries, oldest first
    pub fn messages(&self) -> Vec<&str> {
        self.entries
            .iter()
            .map(|entry| entry.message.as_str())
            .collect()
    }
}

impl LogSink for MemoryLog {
    fn record(&mut self, entry: LogEntry) -> Result<(), BankError> {
        self.entries.push(entry);
        Ok(())
    }
}
