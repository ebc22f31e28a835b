//! Custom logging module.
//!
//! This module provides a custom logger implementation that captures log entries
//! and forwards them to a shared buffer displayed in the log panel.

use crate::error::AppError;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Most recent formatted log lines, oldest first.
///
pub type LogEntries = Arc<Mutex<VecDeque<String>>>;

/// Number of lines kept for the log panel.
///
const MAX_ENTRIES: usize = 200;

/// Format a log record into a string for display
///
pub fn format_log(record: &Record) -> String {
    let timestamp = chrono::Local::now().format("%H:%M:%S%.3f");
    let level_str = match record.level() {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    };
    format!("{} {} {}", timestamp, level_str, record.args())
}

/// Custom logger that captures logs to state
///
pub struct CustomLogger {
    log_callback: Arc<Mutex<Option<Box<dyn Fn(String) + Send + Sync>>>>,
}

impl Default for CustomLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomLogger {
    pub fn new() -> Self {
        CustomLogger {
            log_callback: Arc::new(Mutex::new(None)),
        }
    }

    pub fn set_log_callback(&self, callback: Box<dyn Fn(String) + Send + Sync>) {
        if let Ok(mut guard) = self.log_callback.lock() {
            *guard = Some(callback);
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        // Level filtering happens through log::set_max_level
        true
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(callback) = self.log_callback.lock() {
                if let Some(ref cb) = *callback {
                    cb(format_log(record));
                }
            }
        }
    }

    fn flush(&self) {}
}

/// Append a line to the buffer, dropping the oldest beyond the cap.
///
pub fn push_entry(entries: &LogEntries, line: String) {
    if let Ok(mut guard) = entries.lock() {
        guard.push_back(line);
        while guard.len() > MAX_ENTRIES {
            guard.pop_front();
        }
    }
}

/// Install the logger as the global `log` backend, writing into `entries`.
///
pub fn init(level: LevelFilter, entries: LogEntries) -> Result<(), AppError> {
    let logger = CustomLogger::new();
    logger.set_log_callback(Box::new(move |line| push_entry(&entries, line)));
    log::set_boxed_logger(Box::new(logger)).map_err(|e| AppError::Logger(e.to_string()))?;
    log::set_max_level(level);
    Ok(())
}
