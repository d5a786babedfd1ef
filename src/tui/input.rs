use std::io::{self, Write};

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, read};

use crate::terminal::{BOLD, GREEN, RESET, RawModeGuard, flush, reset_terminal};

/// Interpret a typed answer. Empty input takes the default; anything
/// unrecognised is `None`.
pub fn parse_answer(input: &str, default: bool) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "" => Some(default),
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

fn hint(default: bool) -> &'static str {
    if default { "(Y/n)" } else { "(y/N)" }
}

/// What a single terminal event means for a yes/no prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyOutcome {
    /// Stop waiting; `None` cancels.
    Answer(Option<bool>),
    /// Ctrl+C.
    Interrupt,
    /// Keep waiting.
    Ignore,
}

/// A read error cancels like Esc does, so a dead tty cannot keep feeding
/// default answers into the session.
fn key_outcome(event: io::Result<Event>, default: bool) -> KeyOutcome {
    let key_event = match event {
        Ok(Event::Key(key_event)) if key_event.kind == KeyEventKind::Press => key_event,
        Ok(_) => return KeyOutcome::Ignore,
        Err(_) => return KeyOutcome::Answer(None),
    };

    match key_event.code {
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            KeyOutcome::Interrupt
        }
        KeyCode::Esc => KeyOutcome::Answer(None),
        KeyCode::Enter => KeyOutcome::Answer(Some(default)),
        KeyCode::Char('y' | 'Y') => KeyOutcome::Answer(Some(true)),
        KeyCode::Char('n' | 'N') => KeyOutcome::Answer(Some(false)),
        _ => KeyOutcome::Ignore,
    }
}

/// Single-key yes/no prompt. Enter takes the default, Esc or a failed read
/// returns `None`, Ctrl+C restores the terminal and exits.
pub fn confirm(message: &str, default: bool) -> Option<bool> {
    let mut guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return confirm_line(message, default),
    };

    print!("{GREEN}?{RESET} {BOLD}{message}{RESET} {}: ", hint(default));
    flush();

    let answer = loop {
        match key_outcome(read(), default) {
            KeyOutcome::Answer(answer) => break answer,
            KeyOutcome::Interrupt => {
                // process::exit skips destructors
                guard.release();
                reset_terminal();
                println!();
                std::process::exit(130);
            }
            KeyOutcome::Ignore => {}
        }
    };

    // Leave raw mode before println so the newline is translated
    guard.release();
    match answer {
        Some(true) => println!("Yes"),
        Some(false) => println!("No"),
        None => println!(),
    }
    answer
}

/// Line-buffered fallback when raw mode is unavailable. Re-asks on
/// unrecognised input; end of input cancels.
fn confirm_line(message: &str, default: bool) -> Option<bool> {
    loop {
        print!("? {message} {}: ", hint(default));
        let _ = io::stdout().flush();

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) | Err(_) => return None,
            Ok(_) => {
                if let Some(yes) = parse_answer(&input, default) {
                    return Some(yes);
                }
            }
        }
    }
}
