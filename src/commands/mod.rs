//! CLI command implementations.

pub mod blocks;
pub mod tangle;

pub use blocks::{blocks, BlockEntry, BlocksOptions};
pub use tangle::{tangle, OutputFormat, TangleOptions};
