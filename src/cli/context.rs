//! CLI context - validated flags and the choice between one-shot and
//! interactive generation.

use log::{debug, info};
use zeroize::Zeroize;

use super::{CliFlags, parse_length, prompts, quiet};
use crate::pass::{self, GenerateError, PasswordOptions};
use crate::tui::{self, questions};

pub struct Context {
    flags: CliFlags,
    length: usize,
}

impl Context {
    /// Validate the flags. Fails only on a bad length; nothing has been
    /// prompted or printed yet at that point.
    pub fn new(flags: CliFlags) -> Result<Self, GenerateError> {
        let length = parse_length(&flags.length)?;
        Ok(Self { flags, length })
    }

    pub fn run(&self) -> Result<(), GenerateError> {
        quiet::set(self.flags.quiet);

        if quiet::skip_prompt() {
            prompts::using_defaults();
            return self.generate_once();
        }

        debug!("interactive session, length {}", self.length);
        tui::run(self.base_options());
        Ok(())
    }

    /// Flag-derived options before any question is answered.
    pub fn base_options(&self) -> PasswordOptions {
        self.flags.options(self.length)
    }

    /// Non-interactive path: unanswered questions take their defaults.
    fn generate_once(&self) -> Result<(), GenerateError> {
        let options = questions::with_defaults(self.base_options());
        info!("generating one password without prompts");

        let mut password = pass::generate(&options)?;
        println!("{password}");
        password.zeroize();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(length: &str) -> CliFlags {
        CliFlags {
            length: length.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn bad_length_fails_before_anything_else() {
        for raw in ["0", "-1", "twelve", ""] {
            assert!(matches!(
                Context::new(flags(raw)),
                Err(GenerateError::InvalidLength(_))
            ));
        }
    }

    #[test]
    fn base_options_carry_length_and_flags() {
        let context = Context::new(CliFlags {
            number: true,
            avoid_ambiguous: true,
            ..flags("16")
        })
        .unwrap();
        let options = context.base_options();
        assert_eq!(options.length, 16);
        assert!(options.require_number);
        assert!(options.avoid_ambiguous);
        assert!(!options.require_lowercase);
    }
}
