//! Code block representation.

use serde::Serialize;

use super::reference_name::ReferenceName;

/// One named fragment of code.
///
/// The extractor creates one block per marker occurrence, so several blocks
/// may share a name until they are concatenated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeBlock {
    /// Name as written after the block marker.
    pub name: ReferenceName,
    /// Code text of this occurrence.
    pub body: String,
}

impl CodeBlock {
    /// Creates a new code block.
    pub fn new(name: impl Into<ReferenceName>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
        }
    }

    /// Returns the block name.
    pub fn name(&self) -> &ReferenceName {
        &self.name
    }

    /// Returns a copy of this block with a different body.
    pub fn with_body(&self, body: impl Into<String>) -> Self {
        Self {
            name: self.name.clone(),
            body: body.into(),
        }
    }

    /// Checks if this block is an output file.
    pub fn is_file_target(&self) -> bool {
        self.name.is_file_target()
    }

    /// Returns the number of lines in the body.
    pub fn line_count(&self) -> usize {
        crate::readers::split_lines(&self.body).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_block_new() {
        let block = CodeBlock::new("main", "line1\nline2\nline3\n");
        assert_eq!(block.name().as_str(), "main");
        assert_eq!(block.line_count(), 3);
        assert!(!block.is_file_target());
    }

    #[test]
    fn test_with_body_keeps_name() {
        let block = CodeBlock::new("file:out.txt", "    a");
        let changed = block.with_body("a");
        assert_eq!(changed.name, block.name);
        assert_eq!(changed.body, "a");
        assert!(changed.is_file_target());
    }
}
