//! Quiet mode and terminal detection.

use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);

/// Record `--quiet` for the rest of the process; read by the message helpers.
pub fn set(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

/// Whether `--quiet` was given.
pub fn enabled() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Both ends must be a tty for the yes/no prompts to make sense.
pub fn is_interactive() -> bool {
    unsafe { libc::isatty(0) == 1 && libc::isatty(1) == 1 }
}

/// True when quiet mode is on or there is nobody at the keyboard.
pub fn skip_prompt() -> bool {
    enabled() || !is_interactive()
}
