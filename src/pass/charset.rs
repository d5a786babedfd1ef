//! Character set building for password generation.

use super::PasswordOptions;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const NUMBERS: &str = "0123456789";
const SPECIAL: &str = "!@#$%^&*()_+~`|}{[]\\:;?><,./-=";

/// Glyphs that read alike on most fonts.
pub const AMBIGUOUS: &[char] = &['0', 'O', '1', 'l'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Number,
    Special,
}

impl CharClass {
    /// Alphabet order.
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Number,
        CharClass::Special,
    ];

    pub fn chars(self) -> &'static str {
        match self {
            CharClass::Lowercase => LOWERCASE,
            CharClass::Uppercase => UPPERCASE,
            CharClass::Number => NUMBERS,
            CharClass::Special => SPECIAL,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CharClass::Lowercase => "lowercase",
            CharClass::Uppercase => "uppercase",
            CharClass::Number => "number",
            CharClass::Special => "special",
        }
    }
}

/// Build the character pool: enabled classes concatenated in `CharClass::ALL`
/// order, minus ambiguous glyphs when requested. Relative order is preserved.
pub fn build(options: &PasswordOptions) -> Vec<char> {
    let mut chars: Vec<char> = Vec::new();

    for class in options.enabled_classes() {
        chars.extend(class.chars().chars());
    }

    if options.avoid_ambiguous {
        chars.retain(|c| !AMBIGUOUS.contains(c));
    }

    chars
}
