//! Terminal output utilities.
//!
//! Section headers, colours, flushing.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const RED: &str = "\x1b[38;5;9m";
pub const YELLOW: &str = "\x1b[33m";
pub const GREEN: &str = "\x1b[32m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Leave raw mode and drop any active style.
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}");
    flush();
}

// ============================================================================
// Section Headers
// ============================================================================

/// Header text underlined by `separator`, one per character of `header`.
pub fn section_header(header: &str, separator: char) -> String {
    let rule: String = std::iter::repeat_n(separator, header.chars().count()).collect();
    format!("{header}\n{rule}")
}

/// Print a section header:
///
/// ```text
/// Your Generated Password
/// -----------------------
/// ```
pub fn print_section_header(header: &str, separator: char) {
    println!("{}", section_header(header, separator));
}

/// Print a labelled value with the value highlighted.
pub fn print_value(label: &str, value: &str) {
    println!("{label}: {BOLD}{GREEN}{value}{RESET}");
}
