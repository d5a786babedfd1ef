//! Password generation.

pub mod charset;
mod error;
mod generate;
mod options;

pub use error::GenerateError;
pub use generate::generate;
pub use options::PasswordOptions;
