//! Random password generator.
//!
//! A generated password of length `n` is laid out as `n - 2` lowercase
//! letters, one uppercase letter, then one character of [`SPECIAL_CHARS`].
//! No digit is ever placed, and `_` is drawn as a special character even
//! though the evaluator does not count it as one.

use std::ops::RangeInclusive;

use rand::Rng;
use secrecy::SecretString;
use thiserror::Error;

/// Alphabet the trailing special character is drawn from.
pub const SPECIAL_CHARS: &[u8] = b"!@#$%^&*()_-+=~`";

/// Smallest length that fits the mandatory uppercase and special character.
pub const MIN_GENERATED_LENGTH: usize = 2;

/// Largest length the generator accepts.
pub const MAX_GENERATED_LENGTH: usize = 1024;

/// Lengths drawn from when the caller does not pick one.
pub const RANDOM_LENGTH_RANGE: RangeInclusive<usize> = 8..=16;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Invalid password length {0}: must be at least 2")]
    InvalidLength(usize),
    #[error("Invalid password length {0}: must be at most 1024")]
    LengthTooLong(usize),
}

/// Generates a password using the thread-local random generator.
///
/// With `length == None` the length is drawn uniformly from
/// [`RANDOM_LENGTH_RANGE`].
///
/// # Errors
///
/// Returns `GeneratorError::InvalidLength` if `length` is below
/// [`MIN_GENERATED_LENGTH`], and `GeneratorError::LengthTooLong` if it is
/// above [`MAX_GENERATED_LENGTH`].
pub fn generate_password(length: Option<usize>) -> Result<SecretString, GeneratorError> {
    generate_password_with(&mut rand::rng(), length)
}

/// Same as [`generate_password`], drawing from `rng`.
pub fn generate_password_with<R: Rng + ?Sized>(
    rng: &mut R,
    length: Option<usize>,
) -> Result<SecretString, GeneratorError> {
    let length = match length {
        Some(n) if n < MIN_GENERATED_LENGTH => {
            #[cfg(feature = "tracing")]
            tracing::warn!("Rejected password length {}", n);
            return Err(GeneratorError::InvalidLength(n));
        }
        Some(n) if n > MAX_GENERATED_LENGTH => {
            #[cfg(feature = "tracing")]
            tracing::warn!("Rejected password length {}", n);
            return Err(GeneratorError::LengthTooLong(n));
        }
        Some(n) => n,
        None => rng.random_range(RANDOM_LENGTH_RANGE),
    };

    let mut password = String::with_capacity(length);
    for _ in 0..length - 2 {
        password.push(rng.random_range(b'a'..=b'z') as char);
    }
    password.push(rng.random_range(b'A'..=b'Z') as char);
    password.push(SPECIAL_CHARS[rng.random_range(0..SPECIAL_CHARS.len())] as char);

    #[cfg(feature = "tracing")]
    tracing::debug!(length, "password generated");

    Ok(SecretString::new(password.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use secrecy::ExposeSecret;

    fn assert_layout(password: &str) {
        let bytes = password.as_bytes();
        let n = bytes.len();
        assert!(n >= MIN_GENERATED_LENGTH);
        assert!(
            bytes[..n - 2].iter().all(|b| b.is_ascii_lowercase()),
            "fill must be lowercase: {}",
            password
        );
        assert!(bytes[n - 2].is_ascii_uppercase(), "uppercase slot: {}", password);
        assert!(SPECIAL_CHARS.contains(&bytes[n - 1]), "special slot: {}", password);
    }

    #[test]
    fn test_generate_fixed_length() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let pwd = generate_password_with(&mut rng, Some(10)).expect("valid length");
            let pwd = pwd.expose_secret();
            assert_eq!(pwd.len(), 10);
            assert_layout(pwd);
        }
    }

    #[test]
    fn test_generate_minimum_length() {
        let pwd = generate_password(Some(2)).expect("valid length");
        let pwd = pwd.expose_secret();
        assert_eq!(pwd.len(), 2);
        assert_layout(pwd);
    }

    #[test]
    fn test_generate_invalid_length() {
        assert_eq!(
            generate_password(Some(1)).err(),
            Some(GeneratorError::InvalidLength(1))
        );
        assert_eq!(
            generate_password(Some(0)).err(),
            Some(GeneratorError::InvalidLength(0))
        );
    }

    #[test]
    fn test_generate_maximum_length() {
        let pwd = generate_password(Some(MAX_GENERATED_LENGTH)).expect("valid length");
        let pwd = pwd.expose_secret();
        assert_eq!(pwd.len(), MAX_GENERATED_LENGTH);
        assert_layout(pwd);
    }

    #[test]
    fn test_generate_length_too_long() {
        assert_eq!(
            generate_password(Some(MAX_GENERATED_LENGTH + 1)).err(),
            Some(GeneratorError::LengthTooLong(MAX_GENERATED_LENGTH + 1))
        );
        assert_eq!(
            generate_password(Some(usize::MAX)).err(),
            Some(GeneratorError::LengthTooLong(usize::MAX))
        );
    }

    #[test]
    fn test_generate_random_length() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let pwd = generate_password_with(&mut rng, None).expect("random length");
            let pwd = pwd.expose_secret();
            assert!(RANDOM_LENGTH_RANGE.contains(&pwd.len()), "length {}", pwd.len());
            assert_layout(pwd);
        }
    }

    #[test]
    fn test_generate_thread_rng() {
        let pwd = generate_password(None).expect("random length");
        assert!(RANDOM_LENGTH_RANGE.contains(&pwd.expose_secret().len()));
    }

    #[test]
    fn test_generate_covers_special_alphabet() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..2000 {
            let pwd = generate_password_with(&mut rng, Some(2)).expect("valid length");
            seen.insert(pwd.expose_secret().as_bytes()[1]);
        }
        assert_eq!(seen.len(), SPECIAL_CHARS.len());
    }

    #[test]
    fn test_generated_password_scores() {
        use crate::evaluator::evaluate_password_strength;

        let mut rng = StdRng::seed_from_u64(3);
        let pwd = generate_password_with(&mut rng, Some(12)).expect("valid length");
        let evaluation = evaluate_password_strength(&pwd, None);

        assert!(evaluation.is_long);
        assert!(evaluation.has_mixed_case);
        assert!(!evaluation.has_digits);
    }
}
