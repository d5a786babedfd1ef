//! The yes/no questions that fill in character classes not set by flags.

use crate::pass::PasswordOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Question {
    Special,
    Number,
    Uppercase,
    Lowercase,
    AvoidAmbiguous,
}

impl Question {
    /// Asking order.
    pub const ALL: [Question; 5] = [
        Question::Special,
        Question::Number,
        Question::Uppercase,
        Question::Lowercase,
        Question::AvoidAmbiguous,
    ];

    pub fn message(self) -> &'static str {
        match self {
            Question::Special => "Require special characters?",
            Question::Number => "Require numbers?",
            Question::Uppercase => "Require uppercase letters?",
            Question::Lowercase => "Require lowercase letters?",
            Question::AvoidAmbiguous => "Avoid ambiguous characters (0, O, l, 1)?",
        }
    }

    pub fn default_answer(self) -> bool {
        matches!(self, Question::Lowercase)
    }

    fn field(self, options: &mut PasswordOptions) -> &mut bool {
        match self {
            Question::Special => &mut options.require_special_character,
            Question::Number => &mut options.require_number,
            Question::Uppercase => &mut options.require_uppercase,
            Question::Lowercase => &mut options.require_lowercase,
            Question::AvoidAmbiguous => &mut options.avoid_ambiguous,
        }
    }
}

/// Ask every question whose field is still off and merge the answers in.
/// A field already on (set by a flag) is never asked and stays on.
/// Returns `None` as soon as `ask` does.
pub fn answer<F>(mut options: PasswordOptions, mut ask: F) -> Option<PasswordOptions>
where
    F: FnMut(Question) -> Option<bool>,
{
    for question in Question::ALL {
        let slot = question.field(&mut options);
        if !*slot {
            *slot = ask(question)?;
        }
    }
    Some(options)
}

/// Answer every open question with its default.
pub fn with_defaults(options: PasswordOptions) -> PasswordOptions {
    let mut filled = options;
    for question in Question::ALL {
        let slot = question.field(&mut filled);
        *slot = *slot || question.default_answer();
    }
    filled
}
