//! Length section - checks password minimum length.

/// Minimum length, in bytes, of a long password.
pub const MIN_LENGTH: usize = 8;

/// Returns `true` if the password is at least [`MIN_LENGTH`] bytes long.
pub fn length_section(password: &[u8]) -> bool {
    password.len() >= MIN_LENGTH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_section_too_short() {
        assert!(!length_section(b"Short1!"));
        assert!(!length_section(b""));
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        assert!(length_section(b"12345678"));
    }

    #[test]
    fn test_length_section_valid() {
        assert!(length_section(b"LongEnough123!"));
    }

    #[test]
    fn test_length_section_counts_bytes() {
        // 4 characters, 8 bytes
        assert!(length_section("éééé".as_bytes()));
    }
}
