//! Execution context for mdtangle operations.

use std::path::{Component, Path, PathBuf};

use crate::config::Config;
use crate::errors::{Result, TangleError};
use crate::model::PipelineOptions;

/// Context for mdtangle operations.
///
/// Contains configuration and the directory relative paths resolve against.
#[derive(Debug, Clone)]
pub struct Context {
    /// Configuration.
    pub config: Config,
    /// Base directory for operations.
    pub base_dir: PathBuf,
}

impl Context {
    /// Creates a new context with the given configuration.
    pub fn new(config: Config, base_dir: PathBuf) -> Self {
        Self { config, base_dir }
    }

    /// Creates a context with default configuration.
    pub fn default_for_dir(base_dir: PathBuf) -> Self {
        Self::new(Config::default(), base_dir)
    }

    /// Pipeline options derived from the configuration.
    pub fn pipeline_options(&self) -> PipelineOptions {
        PipelineOptions {
            passes: self.config.passes.max(1),
        }
    }

    /// Returns source file paths matching the configured patterns.
    pub fn source_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for pattern in &self.config.source_patterns {
            let full_pattern = self.base_dir.join(pattern);
            for entry in glob::glob(&full_pattern.to_string_lossy())? {
                match entry {
                    Ok(path) if path.is_file() => files.push(path),
                    Ok(_) => {}
                    Err(e) => tracing::warn!("skipping unreadable path: {}", e),
                }
            }
        }
        // Remove duplicates and sort
        files.sort();
        files.dedup();
        Ok(files)
    }

    /// Resolves a path relative to the base directory.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    /// Directory that output paths of `document` are relative to.
    pub fn output_root(&self, document: &Path) -> PathBuf {
        match self.config.output_dir() {
            Some(dir) => self.resolve_path(dir),
            None => self
                .resolve_path(document)
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| self.base_dir.clone()),
        }
    }

    /// Joins an output path taken from a block name onto `root`.
    ///
    /// Absolute paths and `..` components are rejected.
    pub fn output_path(&self, root: &Path, relative: &str) -> Result<PathBuf> {
        let relative = Path::new(relative);
        let escapes = relative.components().any(|c| {
            matches!(
                c,
                Component::ParentDir | Component::RootDir | Component::Prefix(_)
            )
        });
        if escapes || relative.as_os_str().is_empty() {
            return Err(TangleError::OutputEscapesRoot {
                path: relative.to_path_buf(),
            });
        }
        Ok(root.join(relative))
    }
}
