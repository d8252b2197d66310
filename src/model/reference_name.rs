//! Reference names for code blocks.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::FILE_PREFIX;

/// A reference name identifies a named code block.
///
/// Names are kept exactly as written after the block marker: no trimming,
/// no case folding. Names of the form `file:path/to/output` are file targets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceName(String);

impl ReferenceName {
    /// Creates a new ReferenceName from a string.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Checks if this is a file target (starts with "file:").
    pub fn is_file_target(&self) -> bool {
        self.0.starts_with(FILE_PREFIX)
    }

    /// Returns the relative output path if this is a file target.
    pub fn file_path(&self) -> Option<&str> {
        self.0.strip_prefix(FILE_PREFIX)
    }
}

impl fmt::Display for ReferenceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ReferenceName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ReferenceName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ReferenceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for ReferenceName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_target() {
        let name = ReferenceName::new("file:src/main.rs");
        assert!(name.is_file_target());
        assert_eq!(name.file_path(), Some("src/main.rs"));
    }

    #[test]
    fn test_not_file_target() {
        let name = ReferenceName::new("helpers");
        assert!(!name.is_file_target());
        assert_eq!(name.file_path(), None);
    }

    #[test]
    fn test_prefix_must_lead() {
        // Leading whitespace is part of the name, so this is not a file target.
        let name = ReferenceName::new(" file:out.txt");
        assert!(!name.is_file_target());
    }

    #[test]
    fn test_names_are_exact() {
        assert_ne!(ReferenceName::new("Items"), ReferenceName::new("items"));
        assert_ne!(ReferenceName::new("items "), ReferenceName::new("items"));
    }
}
