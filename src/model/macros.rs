//! Macro expansion and escape resolution.
//!
//! A line inside a block body that contains the marker token splices in
//! another block. Text before the first marker is a per-line prefix, text
//! after an optional second marker is a per-line suffix:
//!
//! ```text
//! - ###### items ###### -
//! ```
//!
//! with `items` = `one\ntwo` becomes
//!
//! ```text
//! - one -
//! - two -
//! ```
//!
//! One pass only substitutes bodies as they were before the pass started.
//! Nested references need further passes; see [`expand_passes`].

use serde::Serialize;

use crate::config::{ESCAPED_MARKER, MARKER};
use crate::readers::split_lines;

use super::block_map::BlockMap;
use super::diagnostic::Diagnostic;
use super::reference_name::ReferenceName;

/// A macro reference parsed from a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacroReference<'a> {
    /// Text before the opening marker, used verbatim.
    pub prefix: &'a str,
    /// Referenced block name, trimmed.
    pub name: &'a str,
    /// Text after the closing marker, used verbatim. Empty without one.
    pub suffix: &'a str,
}

impl<'a> MacroReference<'a> {
    /// Finds the macro reference on `line`, ignoring escaped markers.
    pub fn parse(line: &'a str) -> Option<Self> {
        let open = find_unescaped_marker(line)?;
        let prefix = &line[..open];
        let rest = &line[open + MARKER.len()..];

        let reference = match find_unescaped_marker(rest) {
            Some(close) => Self {
                prefix,
                name: rest[..close].trim(),
                suffix: &rest[close + MARKER.len()..],
            },
            None => Self {
                prefix,
                name: rest.trim(),
                suffix: "",
            },
        };
        Some(reference)
    }

    /// Wraps every line of `body` in this reference's prefix and suffix.
    pub fn wrap(&self, body: &str) -> String {
        split_lines(body)
            .map(|line| format!("{}{}{}", self.prefix, line, self.suffix))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Byte offset of the first marker not preceded by a backslash.
fn find_unescaped_marker(text: &str) -> Option<usize> {
    text.match_indices(MARKER)
        .map(|(idx, _)| idx)
        .find(|&idx| !text[..idx].ends_with('\\'))
}

/// Result of expanding one body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expansion {
    /// The rewritten body.
    pub body: String,
    /// References that could not be resolved, in line order.
    pub diagnostics: Vec<Diagnostic>,
}

/// Expands the macro references in `body` once, reading substitutions from
/// `blocks`. `within` names the block being expanded, for diagnostics.
pub fn expand(body: &str, blocks: &BlockMap, within: &ReferenceName) -> Expansion {
    let mut output = Vec::new();
    let mut diagnostics = Vec::new();

    for line in split_lines(body) {
        let Some(reference) = MacroReference::parse(line) else {
            output.push(line.to_string());
            continue;
        };

        match blocks.get(reference.name) {
            Some(target) => output.push(reference.wrap(target)),
            None => {
                diagnostics.push(Diagnostic::unresolved(reference.name, within));
                output.push(line.to_string());
            }
        }
    }

    Expansion {
        body: output.join("\n"),
        diagnostics,
    }
}

/// Runs one expansion pass over every block.
///
/// All substitutions read from `blocks` as given, never from bodies
/// rewritten earlier in the same pass.
pub fn expand_all(blocks: &BlockMap) -> (BlockMap, Vec<Diagnostic>) {
    let mut diagnostics = Vec::new();
    let expanded = blocks.map_bodies(|name, body| {
        let expansion = expand(body, blocks, name);
        diagnostics.extend(expansion.diagnostics);
        expansion.body
    });
    (expanded, diagnostics)
}

/// Outcome of running several expansion passes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PassOutcome {
    /// Blocks after the last pass.
    pub blocks: BlockMap,
    /// Diagnostics of the last pass that ran.
    pub diagnostics: Vec<Diagnostic>,
    /// Number of passes that ran.
    pub passes: usize,
}

/// Runs up to `max_passes` expansion passes, stopping early once a pass
/// changes nothing. At least one pass always runs.
///
/// There is no cycle detection: mutually referencing blocks keep growing
/// until `max_passes` is reached.
pub fn expand_passes(blocks: BlockMap, max_passes: usize) -> PassOutcome {
    let mut current = blocks;
    let mut diagnostics = Vec::new();
    let mut passes = 0;

    while passes < max_passes.max(1) {
        let (next, found) = expand_all(&current);
        passes += 1;
        diagnostics = found;

        let stable = next == current;
        current = next;
        tracing::debug!(pass = passes, stable, "expansion pass finished");
        if stable {
            break;
        }
    }

    PassOutcome {
        blocks: current,
        diagnostics,
        passes,
    }
}

/// Turns every escaped marker `\######` into a plain `######`.
pub fn unescape(body: &str) -> String {
    body.replace(ESCAPED_MARKER, MARKER)
}
