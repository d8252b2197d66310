//! Configuration loading and management.

mod config_data;
mod markers;

use std::fs;
use std::path::{Path, PathBuf};

pub use config_data::Config;
pub use markers::{BLOCK_MARKER, ESCAPED_MARKER, FENCE, FILE_PREFIX, MARKER};

use crate::errors::Result;

/// Standard configuration file names to search for.
const CONFIG_FILES: &[&str] = &["mdtangle.toml", ".mdtangle.toml"];

/// Finds the configuration file in the given directory or its parents.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for name in CONFIG_FILES {
            let candidate = current.join(name);
            if candidate.exists() {
                return Some(candidate);
            }
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Reads configuration from a TOML file.
pub fn read_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    tracing::debug!("loaded configuration from {}", path.display());
    Ok(config)
}

/// Reads configuration, searching from the given directory.
///
/// If no config file is found, returns the default configuration.
pub fn read_config(start_dir: &Path) -> Result<Config> {
    match find_config_file(start_dir) {
        Some(path) => read_config_file(&path),
        None => Ok(Config::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_find_config_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("mdtangle.toml");
        fs::write(&config_path, "passes = 2").unwrap();

        let found = find_config_file(dir.path()).unwrap();
        assert_eq!(found, config_path);
    }

    #[test]
    fn test_find_config_file_parent() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(".mdtangle.toml");
        fs::write(&config_path, "passes = 2").unwrap();

        let subdir = dir.path().join("docs");
        fs::create_dir(&subdir).unwrap();

        let found = find_config_file(&subdir).unwrap();
        assert_eq!(found, config_path);
    }

    #[test]
    fn test_read_config_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("mdtangle.toml");
        fs::write(
            &config_path,
            r#"
source_patterns = ["docs/**/*.md", "README.md"]
passes = 4
output_dir = "build"
"#,
        )
        .unwrap();

        let config = read_config_file(&config_path).unwrap();
        assert_eq!(config.source_patterns, vec!["docs/**/*.md", "README.md"]);
        assert_eq!(config.passes, 4);
        assert_eq!(config.output_dir(), Some(Path::new("build")));
    }

    #[test]
    fn test_read_config_default() {
        let dir = tempdir().unwrap();
        let config = read_config(dir.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_read_config_invalid() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("mdtangle.toml");
        fs::write(&config_path, "passes = \"many\"").unwrap();

        assert!(read_config_file(&config_path).is_err());
    }
}
