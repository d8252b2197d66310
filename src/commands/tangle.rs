//! Tangle command implementation.

use std::path::PathBuf;

use serde::Serialize;

use crate::errors::Result;
use crate::interface::{tangle_documents, tangle_files, Context, DocumentReport, TangleRun};

/// How the tangle command prints its report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// A single JSON object.
    Json,
}

/// Options for the tangle command.
#[derive(Debug, Clone, Default)]
pub struct TangleOptions {
    /// Dry run - show what would be done without doing it.
    pub dry_run: bool,
    /// Report format.
    pub format: OutputFormat,
    /// Specific files to tangle (empty means all configured sources).
    pub files: Vec<PathBuf>,
}

#[derive(Serialize)]
struct JsonFailure<'a> {
    source: &'a PathBuf,
    error: String,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    dry_run: bool,
    documents: Vec<&'a DocumentReport>,
    errors: Vec<JsonFailure<'a>>,
}

/// Executes the tangle command.
///
/// Per-document failures are reported in the returned run, not as an error.
pub fn tangle(ctx: &Context, options: TangleOptions) -> Result<TangleRun> {
    tracing::info!("Tangling documents...");

    let run = if options.files.is_empty() {
        tangle_documents(ctx, options.dry_run)?
    } else {
        tangle_files(ctx, &options.files, options.dry_run)
    };

    match options.format {
        OutputFormat::Text => print_text(&run, options.dry_run),
        OutputFormat::Json => print_json(&run, options.dry_run),
    }

    Ok(run)
}

// Failures are logged where they happen; the text report only counts them.
fn print_text(run: &TangleRun, dry_run: bool) {
    if dry_run {
        for report in run.reports() {
            for path in &report.written {
                println!("  would write {}", path.display());
            }
        }
    }
    println!("{}", summary(run, dry_run));
}

fn summary(run: &TangleRun, dry_run: bool) -> String {
    let written: usize = run.reports().map(|r| r.written.len()).sum();
    let mut line = if dry_run {
        format!("Would write {} files.", written)
    } else if written == 0 {
        "No files to tangle.".to_string()
    } else {
        format!("Tangled {} files.", written)
    };

    let failed = run.failed_documents();
    if failed > 0 {
        line.push_str(&format!(" {} documents failed.", failed));
    }
    line
}

fn print_json(run: &TangleRun, dry_run: bool) {
    let report = JsonReport {
        dry_run,
        documents: run.reports().collect(),
        errors: run
            .errors()
            .map(|(source, e)| JsonFailure {
                source,
                error: e.to_string(),
            })
            .collect(),
    };

    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{}", json),
        Err(e) => tracing::error!("cannot serialize report: {}", e),
    }
}
