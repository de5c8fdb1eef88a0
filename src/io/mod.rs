//! I/O module
//!
//! Handles console input conversion and the audit log.
//!
//! # Components
//!
//! - `input` - Typed parsing of lines read at a prompt
//! - `audit_log` - Log entries, the sink trait, file and in-memory sinks

pub mod audit_log;
pub mod input;

pub use audit_log::{FileLog, LogEntry, LogSink, MemoryLog};
pub use input::{parse_decimal, parse_integer, parse_token};
