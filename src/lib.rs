//! mdtangle - tangle engine for literate markdown
//!
//! Reads markdown documents containing named code blocks and reassembles
//! them into output files. Blocks are introduced by an H6 marker line:
//!
//! ```text
//! ###### file:out.txt
//!     header
//!     - ###### items ###### -
//!     footer
//! ###### items
//!     one
//!     two
//! ```
//!
//! tangles into `out.txt`:
//!
//! ```text
//! header
//! - one -
//! - two -
//! footer
//! ```
//!
//! # Pipeline
//!
//! - **Extract**: split the document into (name, body) blocks
//! - **Unindent**: strip each block's own indentation
//! - **Concatenate**: merge same-named blocks in document order
//! - **Expand**: splice referenced blocks, wrapping every line in the
//!   reference's prefix and suffix
//! - **Unescape**: turn `\######` into a literal `######`
//! - **Select**: keep `file:` blocks as output files
//!
//! # Example
//!
//! ```
//! use mdtangle::model::{tangle_document, PipelineOptions};
//!
//! let doc = "###### file:hello.txt\n    hello\n";
//! let tangled = tangle_document(doc, PipelineOptions::default());
//! assert_eq!(tangled.files[0].path, "hello.txt");
//! assert_eq!(tangled.files[0].contents, "hello");
//! ```

pub mod commands;
pub mod config;
pub mod errors;
pub mod interface;
pub mod io;
pub mod model;
pub mod readers;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export commonly used types
pub use config::Config;
pub use errors::{Result, TangleError};
pub use interface::Context;
pub use model::{
    tangle_document, BlockMap, CodeBlock, Diagnostic, OutputFile, PipelineOptions, ReferenceName,
    Tangled,
};
