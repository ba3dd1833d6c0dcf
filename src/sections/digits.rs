//! Digits section - checks for at least one ASCII digit.

pub fn digits_section(password: &[u8]) -> bool {
    password.iter().any(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_section() {
        assert!(!digits_section(b""));
        assert!(digits_section(b"a1"));
        assert!(!digits_section(b"abc"));
    }

    #[test]
    fn test_digits_section_ignores_non_ascii_digits() {
        // Arabic-Indic digit three
        assert!(!digits_section("abc\u{0663}".as_bytes()));
    }
}
