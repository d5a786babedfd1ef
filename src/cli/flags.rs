use clap::Parser;

use crate::pass::PasswordOptions;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "Password Generator", version, about = "Password Generator CLI")]
pub struct CliFlags {
    /// length of the password
    #[arg(short, long, default_value = "12", allow_negative_numbers = true)]
    pub length: String,

    /// require special characters
    #[arg(short, long)]
    pub special: bool,

    /// require numbers
    #[arg(short, long)]
    pub number: bool,

    /// require uppercase letters
    #[arg(short, long)]
    pub uppercase: bool,

    /// require lowercase letters
    #[arg(short = 'L', long)]
    pub lowercase: bool,

    /// avoid ambiguous characters (0, O, l, 1)
    #[arg(short, long)]
    pub avoid_ambiguous: bool,

    /// print only the password; never prompt
    #[arg(short, long)]
    pub quiet: bool,

    /// verbose diagnostics on stderr
    #[arg(short, long)]
    pub debug: bool,
}

impl CliFlags {
    /// Options with every flagged class switched on and the rest off.
    /// Unset classes are left for the questions to decide.
    pub fn options(&self, length: usize) -> PasswordOptions {
        PasswordOptions {
            length,
            require_special_character: self.special,
            require_number: self.number,
            require_uppercase: self.uppercase,
            require_lowercase: self.lowercase,
            avoid_ambiguous: self.avoid_ambiguous,
        }
    }
}
