//! Exit handling: signal handlers, terminal restore, and process hardening.

/// Turn canonical input, echo, signal keys and output newline translation
/// back on for stdin, whatever a prompt left behind.
fn reset_terminal_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(0, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(0, libc::TCSANOW, &termios);
        }
    }
}

/// atexit hook: restores the tty after main returns or process::exit.
extern "C" fn cleanup_on_exit() {
    reset_terminal_termios();
    // Only emit escape codes to a tty; a piped password must stay clean
    unsafe {
        if libc::isatty(1) == 1 {
            const RESTORE: &[u8] = b"\x1b[0m\x1b[?25h";
            libc::write(1, RESTORE.as_ptr() as *const libc::c_void, RESTORE.len());
        }
    }
}

/// SIGINT/SIGTERM/SIGHUP leave with status 130 and let the atexit hook
/// restore the tty.
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// Hook tty restoration into every way the process can end.
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
    }
}

/// Keep generated passwords out of core dumps and ptrace attaches.
pub fn disable_core_dumps() {
    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }
}

pub fn reset_terminal() {
    reset_terminal_termios();
}
