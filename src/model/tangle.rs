//! The tangle pipeline: from document text to output files.

use serde::Serialize;

use crate::readers::{extract, unindent};

use super::block_map::BlockMap;
use super::code_block::CodeBlock;
use super::diagnostic::Diagnostic;
use super::macros::{expand_passes, unescape};

/// Options for a tangle run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Maximum number of expansion passes over the whole collection.
    pub passes: usize,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self { passes: 1 }
    }
}

/// A file to be written, relative to the document's directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputFile {
    /// Path taken from the block name after the `file:` prefix.
    pub path: String,
    /// Fully processed block body.
    pub contents: String,
}

impl OutputFile {
    /// Creates a new output file.
    pub fn new(path: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
        }
    }
}

/// Everything one document tangles into.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Tangled {
    /// Processed blocks in first-occurrence order.
    pub blocks: BlockMap,
    /// Output files in block order.
    pub files: Vec<OutputFile>,
    /// Unresolved references found while expanding.
    pub diagnostics: Vec<Diagnostic>,
    /// Expansion passes that ran.
    pub passes: usize,
}

/// Normalizes, concatenates, expands and unescapes extracted blocks.
pub fn tangle_blocks(blocks: Vec<CodeBlock>, options: PipelineOptions) -> Tangled {
    let unindented = blocks.into_iter().map(|block| {
        let body = unindent(&block.body);
        block.with_body(body)
    });
    let concatenated = BlockMap::concatenate(unindented);

    let outcome = expand_passes(concatenated, options.passes);
    let blocks = outcome.blocks.map_bodies(|_, body| unescape(body));
    let files = select_files(&blocks);

    Tangled {
        blocks,
        files,
        diagnostics: outcome.diagnostics,
        passes: outcome.passes,
    }
}

/// Runs the whole pipeline over one document.
pub fn tangle_document(document: &str, options: PipelineOptions) -> Tangled {
    let blocks = extract(document);
    tracing::debug!(blocks = blocks.len(), "extracted blocks");
    tangle_blocks(blocks, options)
}

/// Keeps the blocks named `file:<path>`, in collection order.
pub fn select_files(blocks: &BlockMap) -> Vec<OutputFile> {
    blocks
        .iter()
        .filter_map(|(name, body)| name.file_path().map(|path| OutputFile::new(path, body)))
        .collect()
}
