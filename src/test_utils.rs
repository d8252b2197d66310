//! Shared test utilities.

use crate::model::{BlockMap, CodeBlock, ReferenceName};

/// Builds a concatenated block map from (name, body) pairs.
pub fn block_map(blocks: &[(&str, &str)]) -> BlockMap {
    blocks
        .iter()
        .map(|(name, body)| CodeBlock::new(*name, *body))
        .collect()
}

/// Shorthand for a reference name.
pub fn name(s: &str) -> ReferenceName {
    ReferenceName::new(s)
}
