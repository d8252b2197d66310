//! Code block extraction from literate markdown.
//!
//! A block starts at a line beginning with `###### ` and the rest of that
//! line is its name. The body is either fenced:
//!
//! ````text
//! ###### file:hello.sh
//! ```sh
//! echo hello
//! ```
//! ````
//!
//! or indented, running until the next line that starts with a
//! non-whitespace character:
//!
//! ```text
//! ###### greeting
//!     echo hello
//! ```
//!
//! Everything outside blocks is prose and is ignored.

use crate::config::{BLOCK_MARKER, FENCE};
use crate::model::CodeBlock;

use super::cursor::Cursor;

/// Extracts every block from `document` in document order.
///
/// Duplicate names produce one block per occurrence. Bodies that run into
/// the end of the document are returned as collected.
pub fn extract(document: &str) -> Vec<CodeBlock> {
    let mut cursor = Cursor::new(document);
    let mut blocks = Vec::new();

    while cursor.skip_to_line_starting_with(BLOCK_MARKER) {
        cursor.advance(BLOCK_MARKER.len());
        let name = cursor.take_line();

        let body = if cursor.starts_with(FENCE) {
            fenced_body(&mut cursor)
        } else {
            cursor.take_indented()
        };

        tracing::trace!(name, lines = body.lines().count(), "extracted block");
        blocks.push(CodeBlock::new(name, body));
    }

    blocks
}

/// Reads a fenced body. The opening line, including any language hint, is
/// dropped; the closing fence token is consumed.
fn fenced_body<'a>(cursor: &mut Cursor<'a>) -> &'a str {
    cursor.take_line();

    if cursor.starts_with(FENCE) {
        cursor.advance(FENCE.len());
        return "";
    }

    let closing = format!("\n{}", FENCE);
    cursor.take_until(&closing)
}
