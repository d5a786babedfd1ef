//! Password generation.

use log::debug;
use rand::rngs::OsRng;
use rand::{CryptoRng, Rng, RngCore};

use super::{GenerateError, PasswordOptions, charset};

/// Generate a single password from the operating system's secure random source.
pub fn generate(options: &PasswordOptions) -> Result<String, GenerateError> {
    generate_with(options, &mut OsRng)
}

/// Same as [`generate`], drawing from the given generator. The `CryptoRng`
/// bound keeps general-purpose generators out.
pub fn generate_with<R>(options: &PasswordOptions, rng: &mut R) -> Result<String, GenerateError>
where
    R: RngCore + CryptoRng + ?Sized,
{
    if options.length == 0 {
        return Err(GenerateError::InvalidLength(options.length.to_string()));
    }

    let chars = charset::build(options);
    if chars.is_empty() {
        return Err(GenerateError::EmptyAlphabet);
    }

    debug!(
        "drawing {} chars from a pool of {} ({})",
        options.length,
        chars.len(),
        options
            .enabled_classes()
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join(", ")
    );

    Ok((0..options.length)
        .map(|_| random_char(&chars, rng))
        .collect())
}

/// Uniform pick; `gen_range` rejects out-of-zone samples so there is no
/// modulo bias.
#[inline]
fn random_char<R: RngCore + ?Sized>(chars: &[char], rng: &mut R) -> char {
    chars[rng.gen_range(0..chars.len())]
}
