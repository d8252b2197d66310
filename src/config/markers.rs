//! Marker tokens recognised in literate sources.

/// The H6 heading token. Introduces a block at the start of a line and
/// delimits macro references inside block bodies.
pub const MARKER: &str = "######";

/// A block marker: the token followed by exactly one space, at a line start.
pub const BLOCK_MARKER: &str = "###### ";

/// A marker preceded by a backslash is literal text.
pub const ESCAPED_MARKER: &str = "\\######";

/// Opening and closing token of a fenced body.
pub const FENCE: &str = "```";

/// Block names starting with this prefix are output files.
pub const FILE_PREFIX: &str = "file:";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_shapes() {
        assert_eq!(BLOCK_MARKER, format!("{} ", MARKER));
        assert_eq!(ESCAPED_MARKER, format!("\\{}", MARKER));
        assert_eq!(MARKER.len(), 6);
    }
}
