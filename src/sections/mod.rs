//! Password evaluation sections
//!
//! Each section checks one strength criterion and reports whether it holds.
//! Sections see the raw bytes of the password, which need not be UTF-8.
//! Classification is byte-wise and ASCII-only: every byte outside the ASCII
//! range counts as a special character.

mod blacklist;
mod case;
mod digits;
mod length;
mod special;

pub use blacklist::blacklist_section;
pub use case::mixed_case_section;
pub use digits::digits_section;
pub use length::length_section;
pub use special::special_chars_section;

/// Signature shared by the sections that only look at the password itself.
pub type Section = fn(&[u8]) -> bool;
