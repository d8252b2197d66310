//! I/O operations for writing tangled files.

mod transaction;

pub use transaction::{Transaction, TransactionReport, WriteAction};
