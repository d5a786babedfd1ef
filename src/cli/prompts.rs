//! User-facing messages on stderr. These are separate from `log` output.

use super::quiet;
use crate::terminal::{RED, RESET, YELLOW};

/// Yellow notice; dropped under `--quiet`.
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Red error line; always shown, `--quiet` included.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

pub fn invalid_length() {
    error("Please provide a valid length for the password.");
}

pub fn empty_alphabet() {
    error("No character types selected. Enable at least one of special, numbers, uppercase or lowercase.");
}

/// Shown when prompts are skipped for lack of a terminal; silent under `--quiet`.
pub fn using_defaults() {
    warn("Not running in a terminal; using default answers.");
}
