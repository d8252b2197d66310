//! Ordered name-to-body map of concatenated blocks.

use indexmap::IndexMap;
use serde::Serialize;

use super::code_block::CodeBlock;
use super::reference_name::ReferenceName;

/// Blocks keyed by name, one entry per distinct name.
///
/// Iteration follows the order in which each name first appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BlockMap {
    blocks: IndexMap<ReferenceName, String>,
}

impl BlockMap {
    /// Creates a new empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges same-named blocks, joining their bodies with a line break.
    ///
    /// Names keep their first-occurrence order; bodies under one name keep
    /// document order.
    pub fn concatenate<I>(blocks: I) -> Self
    where
        I: IntoIterator<Item = CodeBlock>,
    {
        let mut map = Self::new();
        for block in blocks {
            map.append(block);
        }
        map
    }

    /// Adds a block, appending its body to any existing body of the same name.
    pub fn append(&mut self, block: CodeBlock) {
        match self.blocks.get_mut(&block.name) {
            Some(body) => {
                body.push('\n');
                body.push_str(&block.body);
            }
            None => {
                self.blocks.insert(block.name, block.body);
            }
        }
    }

    /// Looks up a body by exact name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.blocks.get(name).map(String::as_str)
    }

    /// Checks if a name exists in the map.
    pub fn contains(&self, name: &str) -> bool {
        self.blocks.contains_key(name)
    }

    /// Returns the number of distinct names.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Returns true if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Returns all names in first-occurrence order.
    pub fn names(&self) -> impl Iterator<Item = &ReferenceName> {
        self.blocks.keys()
    }

    /// Returns all (name, body) pairs in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&ReferenceName, &str)> {
        self.blocks.iter().map(|(name, body)| (name, body.as_str()))
    }

    /// Applies `f` to every body, producing a new map with the same order.
    pub fn map_bodies<F>(&self, mut f: F) -> Self
    where
        F: FnMut(&ReferenceName, &str) -> String,
    {
        let blocks = self
            .blocks
            .iter()
            .map(|(name, body)| (name.clone(), f(name, body)))
            .collect();
        Self { blocks }
    }
}

impl FromIterator<CodeBlock> for BlockMap {
    fn from_iter<I: IntoIterator<Item = CodeBlock>>(iter: I) -> Self {
        Self::concatenate(iter)
    }
}

impl IntoIterator for BlockMap {
    type Item = CodeBlock;
    type IntoIter = std::iter::Map<
        indexmap::map::IntoIter<ReferenceName, String>,
        fn((ReferenceName, String)) -> CodeBlock,
    >;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.into_iter().map(into_block as fn(_) -> _)
    }
}

fn into_block((name, body): (ReferenceName, String)) -> CodeBlock {
    CodeBlock { name, body }
}
