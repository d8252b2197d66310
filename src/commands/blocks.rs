//! Blocks command: list the named blocks of one document.

use std::path::PathBuf;

use crate::errors::Result;
use crate::interface::{Context, Document};

/// Options for the blocks command.
#[derive(Debug, Clone, Default)]
pub struct BlocksOptions {
    /// Document to inspect.
    pub file: PathBuf,
}

/// One line of the block listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockEntry {
    /// Block name.
    pub name: String,
    /// Lines in the processed body.
    pub lines: usize,
    /// True for `file:` blocks.
    pub is_file: bool,
}

/// Lists the concatenated blocks of a document in first-occurrence order.
pub fn blocks(ctx: &Context, options: BlocksOptions) -> Result<Vec<BlockEntry>> {
    let doc = Document::load(&options.file, ctx)?;

    let entries: Vec<BlockEntry> = doc
        .tangled
        .blocks
        .iter()
        .map(|(name, body)| BlockEntry {
            name: name.to_string(),
            lines: crate::readers::split_lines(body).count(),
            is_file: name.is_file_target(),
        })
        .collect();

    for entry in &entries {
        let marker = if entry.is_file { "file" } else { "    " };
        println!("{} {:>5}  {}", marker, entry.lines, entry.name);
    }

    Ok(entries)
}
