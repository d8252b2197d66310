//! Core model types and the tangle pipeline.

mod block_map;
mod code_block;
mod diagnostic;
mod macros;
mod reference_name;
mod tangle;

pub use block_map::BlockMap;
pub use code_block::CodeBlock;
pub use diagnostic::Diagnostic;
pub use macros::{expand, expand_all, expand_passes, unescape, Expansion, MacroReference, PassOutcome};
pub use reference_name::ReferenceName;
pub use tangle::{select_files, tangle_blocks, tangle_document, OutputFile, PipelineOptions, Tangled};
