//! Logging system for Headsmith
//!
//! File-based logging through `tracing`, plus retention of old log files.
//! Nothing is logged to the console, which belongs to the read loop.

mod file_writer;
mod retention;

pub use file_writer::{init_file_logging, LogFileInfo, LoggingGuard};
pub use retention::cleanup_old_logs;
