mod context;
mod flags;
mod parse;
pub mod prompts;
mod quiet;

use std::process::ExitCode;

use log::debug;

use context::Context;
pub use flags::CliFlags;
use parse::parse_length;

use crate::pass::GenerateError;

/// Run CLI mode and map the outcome to a process exit status.
pub fn run(flags: CliFlags) -> ExitCode {
    let context = match Context::new(flags) {
        Ok(context) => context,
        Err(e) => {
            debug!("{e}");
            prompts::invalid_length();
            return ExitCode::FAILURE;
        }
    };

    match context.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(GenerateError::EmptyAlphabet) => {
            prompts::empty_alphabet();
            ExitCode::FAILURE
        }
        Err(e) => {
            prompts::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(length: &str) -> CliFlags {
        CliFlags {
            length: length.to_string(),
            quiet: true,
            ..Default::default()
        }
    }

    #[test]
    fn invalid_length_exits_with_failure() {
        for raw in ["0", "-3", "12abc", ""] {
            assert_eq!(run(flags(raw)), ExitCode::FAILURE, "{raw:?}");
        }
    }

    #[test]
    fn quiet_one_shot_exits_with_success() {
        assert_eq!(run(flags("8")), ExitCode::SUCCESS);
        assert_eq!(
            run(CliFlags {
                special: true,
                avoid_ambiguous: true,
                ..flags("16")
            }),
            ExitCode::SUCCESS
        );
    }
}
