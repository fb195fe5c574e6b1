//! Subprocess oracles
//!
//! - [`CommandSpec`] - argv-style command description
//! - [`runner`] - blocking execution with a timeout
//! - [`CommandFixerCatalog`] / [`InterpreterRunner`] - port implementations

mod command_spec;
mod oracles;
pub mod runner;

pub use command_spec::CommandSpec;
pub use oracles::{CommandFixerCatalog, InterpreterRunner};
pub use runner::{OracleError, ProcessOutput};
