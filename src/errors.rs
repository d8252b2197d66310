//! Error types for mdtangle.
//!
//! Only the I/O layer can fail. Extraction, normalization, concatenation,
//! expansion and file selection are total over their input.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for mdtangle operations.
#[derive(Error, Debug)]
pub enum TangleError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Glob pattern error: {0}")]
    GlobPattern(#[from] glob::PatternError),

    #[error("no source documents found")]
    NoSources,

    #[error("output path {path} leaves the document directory")]
    OutputEscapesRoot { path: PathBuf },
}

impl TangleError {
    /// The file this error concerns, if it is about a single file.
    pub fn path(&self) -> Option<&Path> {
        match self {
            TangleError::Read { path, .. }
            | TangleError::Write { path, .. }
            | TangleError::OutputEscapesRoot { path } => Some(path),
            _ => None,
        }
    }
}

/// Result type alias for mdtangle operations.
pub type Result<T> = std::result::Result<T, TangleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_names_path() {
        let err = TangleError::Read {
            path: PathBuf::from("docs/missing.md"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "cannot read docs/missing.md: not found");
    }

    #[test]
    fn test_escape_error_message() {
        let err = TangleError::OutputEscapesRoot {
            path: PathBuf::from("../out.txt"),
        };
        assert!(err.to_string().contains("../out.txt"));
        assert_eq!(err.path(), Some(Path::new("../out.txt")));
    }

    #[test]
    fn test_path_only_for_file_errors() {
        assert_eq!(TangleError::NoSources.path(), None);
    }
}
