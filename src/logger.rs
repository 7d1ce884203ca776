//! Custom logging module.
//!
//! This module provides a custom logger implementation that captures log
//! entries into a shared buffer. The application state drains the buffer on
//! every tick and shows the entries in the log pane, so logging never writes
//! to the terminal the interface is drawn on.

use crate::error::{AppError, AppResult};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::{Arc, Mutex};

/// Shared buffer the logger writes into and the state drains from.
pub type LogBuffer = Arc<Mutex<Vec<String>>>;

/// Format a log record into a string for display
///
pub fn format_log(record: &Record) -> String {
    let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f");
    let level_str = match record.level() {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    };
    format!("{} {} {}", timestamp, level_str, record.args())
}

/// Custom logger that captures logs to a shared buffer
///
pub struct BufferLogger {
    buffer: LogBuffer,
    level: LevelFilter,
}

impl Log for BufferLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            // A poisoned lock drops the entry
            if let Ok(mut entries) = self.buffer.lock() {
                entries.push(format_log(record));
            }
        }
    }

    fn flush(&self) {
        // No-op
    }
}

/// Install the buffer logger as the global logger and return the buffer it
/// writes into.
///
pub fn init(level: LevelFilter) -> AppResult<LogBuffer> {
    let buffer: LogBuffer = Arc::new(Mutex::new(Vec::new()));
    let logger = Box::new(BufferLogger {
        buffer: Arc::clone(&buffer),
        level,
    });
    log::set_logger(Box::leak(logger)).map_err(|e| AppError::Logger(e.to_string()))?;
    log::set_max_level(level);
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_logger_captures_enabled_levels() {
        let buffer: LogBuffer = Arc::new(Mutex::new(Vec::new()));
        let logger = BufferLogger {
            buffer: Arc::clone(&buffer),
            level: LevelFilter::Info,
        };
        logger.log(
            &Record::builder()
                .args(format_args!("goal committed"))
                .level(Level::Info)
                .build(),
        );
        logger.log(
            &Record::builder()
                .args(format_args!("noisy detail"))
                .level(Level::Trace)
                .build(),
        );
        let entries = buffer.lock().unwrap();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].contains("INFO"));
        assert!(entries[0].contains("goal committed"));
    }

    #[test]
    fn test_format_log_includes_level_and_message() {
        let record = Record::builder()
            .args(format_args!("logged 250 ml"))
            .level(Level::Warn)
            .build();
        let formatted = format_log(&record);
        assert!(formatted.contains("WARN"));
        assert!(formatted.contains("logged 250 ml"));
    }
}
