//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the validation logic and the
//! outside world: the documentation corpus and the two oracles.
//!
//! Implementations live in the `adapters` module.

mod document_source;
mod fixer_catalog;
mod statement_runner;

pub use document_source::DocumentSource;
pub use fixer_catalog::FixerCatalog;
pub use statement_runner::StatementRunner;

#[cfg(test)]
pub use document_source::MockDocumentSource;
#[cfg(test)]
pub use fixer_catalog::MockFixerCatalog;
#[cfg(test)]
pub use statement_runner::MockStatementRunner;
