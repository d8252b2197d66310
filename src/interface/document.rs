//! Document orchestrator: read, tangle, write.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::errors::{Result, TangleError};
use crate::io::Transaction;
use crate::model::{tangle_document, Diagnostic, Tangled};

use super::context::Context;

/// A source document and what it tangles into.
#[derive(Debug, Clone)]
pub struct Document {
    /// Path to the source markdown file.
    pub path: PathBuf,
    /// Pipeline output.
    pub tangled: Tangled,
}

impl Document {
    /// Loads and tangles a document.
    pub fn load(path: &Path, ctx: &Context) -> Result<Self> {
        let full_path = ctx.resolve_path(path);
        let content = std::fs::read_to_string(&full_path).map_err(|source| TangleError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self::from_text(path, &content, ctx))
    }

    /// Tangles document text that has already been read.
    pub fn from_text(path: &Path, content: &str, ctx: &Context) -> Self {
        let tangled = tangle_document(content, ctx.pipeline_options());
        for diagnostic in &tangled.diagnostics {
            tracing::warn!("{}: {}", path.display(), diagnostic);
        }

        Self {
            path: path.to_path_buf(),
            tangled,
        }
    }

    /// Builds the writes for this document's output files.
    ///
    /// Output paths that leave the output root are returned as errors and
    /// left out of the transaction. The remaining files are still queued.
    pub fn transaction(&self, ctx: &Context) -> (Transaction, Vec<TangleError>) {
        let root = ctx.output_root(&self.path);
        let mut transaction = Transaction::new();
        let mut rejected = Vec::new();

        for file in &self.tangled.files {
            match ctx.output_path(&root, &file.path) {
                Ok(target) => transaction.write(target, file.contents.clone()),
                Err(e) => rejected.push(e),
            }
        }

        (transaction, rejected)
    }
}

/// An output file that was rejected or could not be written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileFailure {
    /// Output path as far as it was resolved.
    pub path: PathBuf,
    /// What went wrong.
    pub error: String,
}

impl From<&TangleError> for FileFailure {
    fn from(e: &TangleError) -> Self {
        Self {
            path: e.path().map(Path::to_path_buf).unwrap_or_default(),
            error: e.to_string(),
        }
    }
}

/// Report for one document that was read and tangled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocumentReport {
    /// Source document.
    pub source: PathBuf,
    /// Files written, or that would be written in a dry run.
    pub written: Vec<PathBuf>,
    /// Files already up to date.
    pub unchanged: Vec<PathBuf>,
    /// Output files that were not written.
    pub failures: Vec<FileFailure>,
    /// Unresolved references.
    pub diagnostics: Vec<Diagnostic>,
    /// Expansion passes that ran.
    pub passes: usize,
}

impl DocumentReport {
    /// True if every output file was written or already up to date.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Outcome of tangling a set of documents. Each document succeeds or fails
/// on its own.
#[derive(Debug, Default)]
pub struct TangleRun {
    /// Per-document results in input order.
    pub outcomes: Vec<(PathBuf, Result<DocumentReport>)>,
}

impl TangleRun {
    /// Reports of the documents that could be read.
    pub fn reports(&self) -> impl Iterator<Item = &DocumentReport> {
        self.outcomes.iter().filter_map(|(_, r)| r.as_ref().ok())
    }

    /// Documents that could not be processed at all, with their errors.
    pub fn errors(&self) -> impl Iterator<Item = (&PathBuf, &TangleError)> {
        self.outcomes
            .iter()
            .filter_map(|(path, r)| r.as_ref().err().map(|e| (path, e)))
    }

    /// Output files that were rejected or failed to write, across documents.
    pub fn file_failures(&self) -> impl Iterator<Item = &FileFailure> {
        self.reports().flat_map(|r| r.failures.iter())
    }

    /// Number of documents with an error or at least one failed output file.
    pub fn failed_documents(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, r)| r.as_ref().map_or(true, |report| !report.is_success()))
            .count()
    }

    /// True if every document was read and every output file written.
    pub fn is_success(&self) -> bool {
        self.failed_documents() == 0
    }

    /// Total number of diagnostics across documents.
    pub fn diagnostic_count(&self) -> usize {
        self.reports().map(|r| r.diagnostics.len()).sum()
    }
}

/// Tangles one document and, unless `dry_run`, writes its output files.
///
/// Only a document that cannot be read is an error. Output files that are
/// rejected or fail to write are listed in the report's `failures`, and the
/// document's other files are still written.
pub fn tangle_file(ctx: &Context, path: &Path, dry_run: bool) -> Result<DocumentReport> {
    let doc = Document::load(path, ctx)?;
    let (transaction, mut errors) = doc.transaction(ctx);

    let mut report = DocumentReport {
        source: doc.path.clone(),
        diagnostics: doc.tangled.diagnostics.clone(),
        passes: doc.tangled.passes,
        ..Default::default()
    };

    if transaction.is_empty() {
        tracing::debug!("{}: no output files", path.display());
    }

    if dry_run {
        for line in transaction.describe() {
            tracing::debug!("would {}", line);
        }
        for action in transaction.actions() {
            if action.is_unchanged() {
                report.unchanged.push(action.path.clone());
            } else {
                report.written.push(action.path.clone());
            }
        }
    } else {
        let executed = transaction.execute();
        report.written = executed.written;
        report.unchanged = executed.unchanged;
        errors.extend(executed.failed);
    }

    for e in &errors {
        tracing::error!("{}: {}", path.display(), e);
    }
    report.failures = errors.iter().map(FileFailure::from).collect();

    Ok(report)
}

/// Tangles each document independently. A failing document does not stop
/// the others.
pub fn tangle_files(ctx: &Context, source_files: &[PathBuf], dry_run: bool) -> TangleRun {
    let outcomes = source_files
        .iter()
        .map(|path| {
            let result = tangle_file(ctx, path, dry_run);
            if let Err(e) = &result {
                tracing::error!("{}: {}", path.display(), e);
            }
            (path.clone(), result)
        })
        .collect();

    TangleRun { outcomes }
}

/// Tangles all documents matching the configured source patterns.
pub fn tangle_documents(ctx: &Context, dry_run: bool) -> Result<TangleRun> {
    let source_files = ctx.source_files()?;
    if source_files.is_empty() {
        return Err(TangleError::NoSources);
    }
    Ok(tangle_files(ctx, &source_files, dry_run))
}
