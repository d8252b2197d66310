//! High-level interface for mdtangle operations.

mod context;
mod document;

pub use context::Context;
pub use document::{
    tangle_documents, tangle_file, tangle_files, Document, DocumentReport, FileFailure,
    TangleRun,
};
