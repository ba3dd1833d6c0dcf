//! Mixed case section - checks for both ASCII uppercase and lowercase letters.

/// Returns `true` if the password has at least one uppercase and one
/// lowercase ASCII letter.
///
/// Scans once and stops as soon as both have been seen.
pub fn mixed_case_section(password: &[u8]) -> bool {
    let mut has_upper = false;
    let mut has_lower = false;

    for b in password {
        if b.is_ascii_uppercase() {
            has_upper = true;
        } else if b.is_ascii_lowercase() {
            has_lower = true;
        }
        if has_upper && has_lower {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_case_section_lowercase_only() {
        assert!(!mixed_case_section(b"abc"));
    }

    #[test]
    fn test_mixed_case_section_uppercase_only() {
        assert!(!mixed_case_section(b"ABC"));
    }

    #[test]
    fn test_mixed_case_section_mixed() {
        assert!(mixed_case_section(b"aBc"));
    }

    #[test]
    fn test_mixed_case_section_non_ascii_letters() {
        // Non-ASCII letters never count as upper or lower case
        assert!(!mixed_case_section("Éa".as_bytes()));
        assert!(!mixed_case_section(b"\xc9a"));
        assert!(!mixed_case_section(b""));
    }
}
