//! Configuration data structures.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Main configuration structure for mdtangle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Glob patterns for source documents, used when none are given explicitly.
    #[serde(default = "default_source_patterns")]
    pub source_patterns: Vec<String>,

    /// Number of macro expansion passes over the whole collection.
    #[serde(default = "default_passes")]
    pub passes: usize,

    /// Base directory for output files instead of each document's own directory.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

fn default_source_patterns() -> Vec<String> {
    vec!["**/*.md".to_string()]
}

fn default_passes() -> usize {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_patterns: default_source_patterns(),
            passes: default_passes(),
            output_dir: None,
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the output directory, if configured.
    pub fn output_dir(&self) -> Option<&Path> {
        self.output_dir.as_deref()
    }

    /// Overrides the pass count. Zero is raised to one.
    pub fn with_passes(mut self, passes: usize) -> Self {
        self.passes = passes.max(1);
        self
    }
}
