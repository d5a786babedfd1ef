use thiserror::Error;

/// Why a generation request was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// Length was missing, non-numeric, zero or negative.
    #[error("invalid password length: {0:?}")]
    InvalidLength(String),
    /// No character class enabled, or everything was filtered out.
    #[error("no characters to choose from: enable at least one character class")]
    EmptyAlphabet,
}
