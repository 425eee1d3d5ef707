//! Log formatting and output with ANSI colors
//!
//! Handles:
//! - Colorized console output with tag and level formatting
//! - Dual output (console + file)
//! - Broken pipe handling for piped commands

use super::file::write_to_file;
use super::tags::LogTag;
use chrono::Local;
use colored::*;
use std::io::{stdout, ErrorKind, Write};

/// Log format widths for alignment
const TAG_WIDTH: usize = 7;
const LOG_TYPE_WIDTH: usize = 9;

/// Format and output a log message
pub fn format_and_log(tag: LogTag, log_type: &str, message: &str) {
    let now = Local::now();
    let time = now.format("%H:%M:%S").to_string();

    let prefix = format!("{} ", time).dimmed().to_string();
    let tag_str = format_tag(&tag);
    let log_type_str = format_log_type(log_type);

    let console_line = format!("{}[{}] [{}] {}", prefix, tag_str, log_type_str, message);
    print_stdout_safe(&console_line);

    // File output keeps the full timestamp and no ANSI codes
    let timestamp = now.format("%Y-%m-%d %H:%M:%S").to_string();
    let file_line = format!(
        "{} [{}] [{}] {}",
        timestamp,
        tag.to_plain_string(),
        log_type,
        message
    );
    write_to_file(&file_line);
}

/// Colorize a tag, padded for column alignment
fn format_tag(tag: &LogTag) -> String {
    let padded = format!("{:<width$}", tag.to_plain_string(), width = TAG_WIDTH);
    match tag {
        LogTag::System => padded.cyan().to_string(),
        LogTag::Config => padded.blue().to_string(),
        LogTag::Rpc => padded.magenta().to_string(),
        LogTag::Pool => padded.green().to_string(),
        LogTag::Price => padded.yellow().to_string(),
        LogTag::Lockup => padded.bright_blue().to_string(),
        LogTag::Token => padded.bright_green().to_string(),
        LogTag::Scheduler => padded.bright_magenta().to_string(),
        LogTag::Wallet => padded.bright_cyan().to_string(),
    }
}

/// Colorize a log type string by convention
fn format_log_type(log_type: &str) -> String {
    let padded = format!("{:<width$}", log_type, width = LOG_TYPE_WIDTH);
    match log_type.to_uppercase().as_str() {
        "ERROR" => padded.red().bold().to_string(),
        "WARNING" | "WARN" => padded.yellow().bold().to_string(),
        "SUCCESS" => padded.green().bold().to_string(),
        "DEBUG" | "VERBOSE" => padded.dimmed().to_string(),
        _ => padded.normal().to_string(),
    }
}

/// Print to stdout, swallowing broken-pipe errors so piping into head
/// does not panic the process
fn print_stdout_safe(line: &str) {
    let mut out = stdout();
    if let Err(e) = writeln!(out, "{}", line) {
        if e.kind() == ErrorKind::BrokenPipe {
            std::process::exit(0);
        }
    }
}
