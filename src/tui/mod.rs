//! Interactive prompts.

mod input;
pub mod questions;
mod session;
mod text;

pub use input::*;
pub use session::run;
pub use text::*;
