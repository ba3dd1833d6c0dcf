//! Special characters section - checks for anything besides ASCII letters,
//! ASCII digits and the underscore.

pub fn special_chars_section(password: &[u8]) -> bool {
    password
        .iter()
        .any(|b| !b.is_ascii_alphanumeric() && *b != b'_')
}
