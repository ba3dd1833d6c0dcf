//! Blacklist section - checks if password is in the common password list.

use crate::blacklist::CommonPasswords;

/// Returns `true` if the password appears in `common`.
///
/// Without a list, no password is considered common. The list only holds
/// UTF-8 entries, so a password that is not valid UTF-8 is never common.
pub fn blacklist_section(password: &[u8], common: Option<&dyn CommonPasswords>) -> bool {
    let Some(list) = common else {
        return false;
    };
    std::str::from_utf8(password).is_ok_and(|p| list.contains(p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blacklist::Blacklist;

    fn setup_blacklist() -> Blacklist {
        ["password", "123456", "qwerty"].into_iter().collect()
    }

    #[test]
    fn test_blacklist_section_common_password() {
        let list = setup_blacklist();
        assert!(blacklist_section(b"password", Some(&list)));
    }

    #[test]
    fn test_blacklist_section_strong_password() {
        let list = setup_blacklist();
        assert!(!blacklist_section(b"CorrectHorseBatteryStaple!123", Some(&list)));
    }

    #[test]
    fn test_blacklist_section_without_list() {
        assert!(!blacklist_section(b"password", None));
        assert!(!blacklist_section(b"password", Some(&Blacklist::default())));
    }

    #[test]
    fn test_blacklist_section_invalid_utf8() {
        let list = setup_blacklist();
        assert!(!blacklist_section(b"passw\xf6rd", Some(&list)));
    }
}
