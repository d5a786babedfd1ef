//! Generation request.

use super::charset::CharClass;

/// Everything a single `generate` call needs. Built once per request and
/// passed by value or reference; nothing here outlives the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordOptions {
    pub length: usize,
    pub require_special_character: bool,
    pub require_number: bool,
    pub require_uppercase: bool,
    pub require_lowercase: bool,
    pub avoid_ambiguous: bool,
}

impl PasswordOptions {
    pub fn has(&self, class: CharClass) -> bool {
        match class {
            CharClass::Lowercase => self.require_lowercase,
            CharClass::Uppercase => self.require_uppercase,
            CharClass::Number => self.require_number,
            CharClass::Special => self.require_special_character,
        }
    }

    /// Enabled classes in alphabet order.
    pub fn enabled_classes(&self) -> Vec<CharClass> {
        CharClass::ALL
            .into_iter()
            .filter(|&class| self.has(class))
            .collect()
    }
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: 12,
            require_special_character: false,
            require_number: false,
            require_uppercase: false,
            require_lowercase: true,
            avoid_ambiguous: false,
        }
    }
}
