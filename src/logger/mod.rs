//! Structured logging for lockbot
//!
//! Provides a small, ergonomic logging API with:
//! - Standard log levels (Error/Warning/Info/Debug/Verbose)
//! - Per-module debug control via --debug-<module> flags
//! - Dual output: colored console + file persistence under logs/
//!
//! ## Usage
//!
//! ```rust
//! use lockbot::logger::{self, log, LogTag};
//!
//! logger::info(LogTag::Rpc, "Connected");
//! log(LogTag::Pool, "DECODE", "80 byte record parsed");
//! logger::debug(LogTag::Pool, "raw bytes: ..."); // Only with --debug-pool
//! ```
//!
//! Call `logger::init()` once at startup before any logging occurs.

mod file;
mod format;
mod levels;
mod tags;

pub use levels::LogLevel;
pub use tags::LogTag;

use crate::arguments;

/// Initialize the logger system
///
/// Creates the logs directory and opens the log file for appending.
/// Debug gating needs no setup: flags are read from the shared CMD_ARGS.
pub fn init() {
    file::init_file_logging();
}

/// Check if a log message should be displayed
///
/// Filtering rules:
/// 1. Errors and warnings are always shown
/// 2. Debug level requires --debug-<module> for that tag
/// 3. Verbose level requires --verbose
fn should_log(tag: &LogTag, level: LogLevel) -> bool {
    match level {
        LogLevel::Error | LogLevel::Warning | LogLevel::Info => true,
        LogLevel::Debug => {
            arguments::is_verbose_mode() || arguments::has_arg(&format!("--debug-{}", tag.debug_key()))
        }
        LogLevel::Verbose => arguments::is_verbose_mode(),
    }
}

/// Log with an explicit type string, e.g. log(LogTag::Pool, "DECODE", "...")
///
/// The type string is free-form and colorized by convention (ERROR/WARN/
/// SUCCESS/INFO/...). Filtering treats unknown types as Info.
pub fn log(tag: LogTag, log_type: &str, message: &str) {
    let level = LogLevel::from_type_str(log_type);
    if !should_log(&tag, level) {
        return;
    }
    format::format_and_log(tag, log_type, message);
}

/// Log at ERROR level (always shown)
pub fn error(tag: LogTag, message: &str) {
    log_internal(tag, LogLevel::Error, message);
}

/// Log at WARNING level
pub fn warning(tag: LogTag, message: &str) {
    log_internal(tag, LogLevel::Warning, message);
}

/// Log at INFO level (standard operations)
pub fn info(tag: LogTag, message: &str) {
    log_internal(tag, LogLevel::Info, message);
}

/// Log at DEBUG level (only shown with --debug-<module>)
pub fn debug(tag: LogTag, message: &str) {
    log_internal(tag, LogLevel::Debug, message);
}

/// Log at VERBOSE level (only shown with --verbose)
pub fn verbose(tag: LogTag, message: &str) {
    log_internal(tag, LogLevel::Verbose, message);
}

fn log_internal(tag: LogTag, level: LogLevel, message: &str) {
    if !should_log(&tag, level) {
        return;
    }
    format::format_and_log(tag, level.as_str(), message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arguments::{set_cmd_args, test_support};

    #[test]
    fn test_error_always_logs() {
        let _guard = test_support::lock_args();
        set_cmd_args(vec!["lockbot".to_string()]);
        assert!(should_log(&LogTag::Pool, LogLevel::Error));
        assert!(should_log(&LogTag::Pool, LogLevel::Info));
        assert!(!should_log(&LogTag::Pool, LogLevel::Verbose));
    }

    #[test]
    fn test_debug_gated_by_module_flag() {
        let _guard = test_support::lock_args();
        set_cmd_args(vec!["lockbot".to_string(), "--debug-pool".to_string()]);
        assert!(should_log(&LogTag::Pool, LogLevel::Debug));
        assert!(!should_log(&LogTag::Rpc, LogLevel::Debug));
    }
}
