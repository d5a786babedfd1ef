use log::debug;
use zeroize::Zeroize;

use crate::cli::prompts;
use crate::pass::{self, GenerateError, PasswordOptions};
use crate::terminal::reset_terminal;

use super::{
    ANOTHER_PROMPT, confirm, print_another_header, print_goodbye, print_password,
    print_questions_header, print_welcome, questions,
};

/// Interactive loop: ask, generate, show, offer another round.
pub fn run(base: PasswordOptions) {
    reset_terminal();
    print_welcome();

    let rounds = run_with(base, &mut confirm);
    debug!("session ended after {rounds} round(s)");

    print_goodbye();
}

/// Rounds until `ask` declines another or cancels. Returns the round count.
fn run_with<F>(base: PasswordOptions, ask: &mut F) -> usize
where
    F: FnMut(&str, bool) -> Option<bool>,
{
    let mut rounds = 1usize;
    while generate_and_ask(base, ask) {
        rounds += 1;
    }
    rounds
}

/// One round. Returns whether the user wants another.
fn generate_and_ask<F>(base: PasswordOptions, ask: &mut F) -> bool
where
    F: FnMut(&str, bool) -> Option<bool>,
{
    print_questions_header();

    let Some(options) = questions::answer(base, |q| ask(q.message(), q.default_answer())) else {
        // Esc ends the session
        return false;
    };

    match pass::generate(&options) {
        Ok(mut password) => {
            print_password(&password);
            password.zeroize();
        }
        Err(GenerateError::EmptyAlphabet) => {
            prompts::empty_alphabet();
            println!();
        }
        Err(e) => {
            prompts::error(&e.to_string());
            println!();
        }
    }

    print_another_header();
    ask(ANOTHER_PROMPT, true).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Replays answers in order and records every prompt shown.
    struct Script {
        answers: VecDeque<Option<bool>>,
        asked: Vec<String>,
    }

    impl Script {
        fn new(answers: &[Option<bool>]) -> Self {
            Self {
                answers: answers.iter().copied().collect(),
                asked: Vec::new(),
            }
        }

        fn ask(&mut self, message: &str, _default: bool) -> Option<bool> {
            self.asked.push(message.to_string());
            self.answers.pop_front().expect("prompt with no scripted answer")
        }
    }

    fn base() -> PasswordOptions {
        PasswordOptions {
            length: 8,
            require_special_character: false,
            require_number: false,
            require_uppercase: false,
            require_lowercase: false,
            avoid_ambiguous: false,
        }
    }

    #[test]
    fn empty_alphabet_is_reported_and_session_goes_on() {
        // special, number, uppercase, lowercase, ambiguous: all no; then another: yes
        let mut script = Script::new(&[
            Some(false),
            Some(false),
            Some(false),
            Some(false),
            Some(false),
            Some(true),
        ]);
        let again = generate_and_ask(base(), &mut |m: &str, d: bool| script.ask(m, d));
        assert!(again);
        assert_eq!(script.asked.last().map(String::as_str), Some(ANOTHER_PROMPT));
        assert!(script.answers.is_empty());
    }

    #[test]
    fn cancel_at_a_question_ends_without_another_prompt() {
        let mut script = Script::new(&[Some(true), None]);
        let again = generate_and_ask(base(), &mut |m: &str, d: bool| script.ask(m, d));
        assert!(!again);
        assert_eq!(script.asked.len(), 2);
        assert!(!script.asked.iter().any(|m| m == ANOTHER_PROMPT));
    }

    #[test]
    fn declining_another_ends_the_loop() {
        let round = [Some(false), Some(true), Some(false), Some(true), Some(false)];
        let mut answers = Vec::new();
        answers.extend(round);
        answers.push(Some(true));
        answers.extend(round);
        answers.push(Some(false));

        let mut script = Script::new(&answers);
        let rounds = run_with(base(), &mut |m: &str, d: bool| script.ask(m, d));
        assert_eq!(rounds, 2);
        assert!(script.answers.is_empty());
    }

    #[test]
    fn cancelled_another_prompt_ends_the_loop() {
        let mut script = Script::new(&[
            Some(false),
            Some(false),
            Some(false),
            Some(true),
            Some(false),
            None,
        ]);
        assert_eq!(run_with(base(), &mut |m: &str, d: bool| script.ask(m, d)), 1);
    }

    #[test]
    fn flagged_classes_are_not_asked() {
        let preset = PasswordOptions {
            require_lowercase: true,
            require_number: true,
            ..base()
        };
        // special, uppercase, ambiguous; then another: no
        let mut script = Script::new(&[Some(false), Some(false), Some(true), Some(false)]);
        assert!(!generate_and_ask(preset, &mut |m: &str, d: bool| script.ask(m, d)));
        assert_eq!(script.asked.len(), 4);
    }
}
