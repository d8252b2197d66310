//! Batched writes of tangled files.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::errors::{Result, TangleError};

/// Counter for unique temp file names within this process.
static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Write one file, creating parent directories as needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteAction {
    /// Target file path.
    pub path: PathBuf,
    /// Content to write.
    pub content: String,
}

impl WriteAction {
    /// Creates a new Write action.
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// True if the target already holds exactly this content.
    pub fn is_unchanged(&self) -> bool {
        fs::read_to_string(&self.path).is_ok_and(|current| current == self.content)
    }

    /// Writes the content atomically via a temp file in the same directory.
    pub fn execute(&self) -> Result<()> {
        let wrap = |source| TangleError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(wrap)?;
        }
        atomic_write(&self.path, &self.content).map_err(wrap)
    }

    /// Returns a description of this action.
    pub fn describe(&self) -> String {
        let verb = if self.path.exists() { "write" } else { "create" };
        format!("{} {}", verb, self.path.display())
    }
}

/// What happened to each action of an executed transaction.
#[derive(Debug, Default)]
pub struct TransactionReport {
    /// Files written.
    pub written: Vec<PathBuf>,
    /// Files skipped because their content was already up to date.
    pub unchanged: Vec<PathBuf>,
    /// Writes that failed. The other actions still ran.
    pub failed: Vec<TangleError>,
}

impl TransactionReport {
    /// True if no write failed.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// A collection of writes executed together.
#[derive(Debug, Default)]
pub struct Transaction {
    /// Actions to execute.
    actions: Vec<WriteAction>,
}

impl Transaction {
    /// Creates a new empty transaction.
    #[must_use]
    pub fn new() -> Self {
        Self {
            actions: Vec::new(),
        }
    }

    /// Adds a write action.
    pub fn write(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.actions.push(WriteAction::new(path, content));
    }

    /// Returns the number of actions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns true if there are no actions.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Returns the queued actions.
    pub fn actions(&self) -> &[WriteAction] {
        &self.actions
    }

    /// Returns descriptions of all actions.
    pub fn describe(&self) -> Vec<String> {
        self.actions.iter().map(WriteAction::describe).collect()
    }

    /// Executes all actions in order, skipping files that are up to date.
    ///
    /// A failing write is recorded in the report and does not stop the
    /// remaining actions.
    pub fn execute(&self) -> TransactionReport {
        let mut report = TransactionReport::default();

        for action in &self.actions {
            if action.is_unchanged() {
                tracing::debug!("unchanged {}", action.path.display());
                report.unchanged.push(action.path.clone());
                continue;
            }
            match action.execute() {
                Ok(()) => {
                    tracing::info!("wrote {}", action.path.display());
                    report.written.push(action.path.clone());
                }
                Err(e) => report.failed.push(e),
            }
        }

        report
    }
}

/// Writes content to a file atomically using a temp file and rename.
fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    let parent = path.parent().unwrap_or(Path::new("."));
    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let temp_path = parent.join(format!(
        ".mdtangle-tmp-{}-{}",
        std::process::id(),
        counter,
    ));

    {
        let mut file = File::create(&temp_path)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    if let Err(err) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }

    Ok(())
}
