//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `corpus/` - Documentation discovery on the filesystem
//! - `process/` - Subprocess oracles (fixer listing, statement execution)

pub mod corpus;
pub mod process;

pub use corpus::{CorpusError, FsCorpus};
pub use process::{CommandFixerCatalog, CommandSpec, InterpreterRunner, OracleError};
