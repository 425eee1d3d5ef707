//! File persistence for log output
//!
//! Appends plain-text log lines to logs/lockbot.log. File logging is
//! best-effort: failures never interrupt the process.

use once_cell::sync::Lazy;
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::Write;
use std::sync::Mutex;

const LOG_DIR: &str = "logs";
const LOG_FILE: &str = "logs/lockbot.log";

static LOG_HANDLE: Lazy<Mutex<Option<File>>> = Lazy::new(|| Mutex::new(None));

/// Create the logs directory and open the log file for appending
pub fn init_file_logging() {
    if let Err(e) = create_dir_all(LOG_DIR) {
        eprintln!("Failed to create log directory: {}", e);
        return;
    }

    match OpenOptions::new().create(true).append(true).open(LOG_FILE) {
        Ok(file) => {
            if let Ok(mut handle) = LOG_HANDLE.lock() {
                *handle = Some(file);
            }
        }
        Err(e) => eprintln!("Failed to open log file: {}", e),
    }
}

/// Append one line to the log file, if it is open
pub fn write_to_file(line: &str) {
    if let Ok(mut handle) = LOG_HANDLE.lock() {
        if let Some(file) = handle.as_mut() {
            let _ = writeln!(file, "{}", line);
        }
    }
}
