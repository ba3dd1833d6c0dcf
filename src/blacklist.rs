//! Common password list
//!
//! Loads the list of known-weak passwords and answers membership queries.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up in the working directory when no path is given.
pub const DEFAULT_BLACKLIST_PATH: &str = "topPasswords.txt";

#[derive(Error, Debug)]
pub enum BlacklistError {
    #[error("Blacklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read blacklist file: {0}")]
    ReadError(#[from] std::io::Error),
}

/// Lookup capability for known-weak passwords.
///
/// Matching is exact and case-sensitive.
pub trait CommonPasswords {
    fn contains(&self, password: &str) -> bool;
}

impl CommonPasswords for HashSet<String> {
    fn contains(&self, password: &str) -> bool {
        HashSet::contains(self, password)
    }
}

/// Common password list backed by a flat text file, one password per line.
#[derive(Debug, Clone, Default)]
pub struct Blacklist {
    passwords: HashSet<String>,
}

impl Blacklist {
    /// Loads the blacklist from `path`.
    ///
    /// Line terminators (`\n` or `\r\n`) are stripped, nothing else is
    /// trimmed. Empty lines and lines that are not valid UTF-8 are skipped.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, BlacklistError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(BlacklistError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read(path)?;
        let blacklist: Blacklist = content
            .split(|&b| b == b'\n')
            .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
            .filter_map(|line| std::str::from_utf8(line).ok())
            .collect();

        #[cfg(feature = "tracing")]
        tracing::info!("Blacklist initialized: {} passwords from {:?}", blacklist.len(), path);

        Ok(blacklist)
    }

    /// Loads the blacklist from `path`, falling back to an empty list.
    ///
    /// A missing or unreadable file is not an error: every lookup against the
    /// returned list answers `false`.
    pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Self {
        match Self::from_path(path) {
            Ok(blacklist) => blacklist,
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Common password check disabled: {}", _e);
                Self::default()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.passwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passwords.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Blacklist {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let passwords = iter
            .into_iter()
            .map(Into::into)
            .filter(|l: &String| !l.is_empty())
            .collect();
        Self { passwords }
    }
}

impl CommonPasswords for Blacklist {
    fn contains(&self, password: &str) -> bool {
        self.passwords.contains(password)
    }
}
