//! Readers for literate markdown sources.

mod cursor;
mod indent;
mod markdown;

pub use cursor::Cursor;
pub use indent::{indentation_prefix, split_lines, unindent};
pub use markdown::extract;
