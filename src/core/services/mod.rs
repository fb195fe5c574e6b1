//! Validation services
//!
//! Orchestration logic that operates on domain models and talks to the
//! outside world only through port traits.
//!
//! - [`scanner`] - Find references in document text
//! - [`fixers`] - Check fixer names against the fixer oracle
//! - [`future_imports`] - Check future imports by running them

pub mod fixers;
pub mod future_imports;
pub mod scanner;

pub use fixers::{FixerSet, FixerValidator, ListingError};
pub use future_imports::FutureImportValidator;
pub use scanner::scan;

use anyhow::Context;

use crate::core::models::{CaseOutcome, ReferenceKind, RunReport};
use crate::core::ports::DocumentSource;

/// A per-document check
pub trait Validator {
    /// Which references this validator checks
    fn kind(&self) -> ReferenceKind;

    /// Check the text of one document
    ///
    /// `Err` means the oracle itself is broken and the whole run must stop.
    fn check_text(&self, file: &str, text: &str) -> anyhow::Result<CaseOutcome>;
}

/// Run `validator` over every document of `source`
///
/// Each document is one independent case. A failing case does not stop the
/// run; an oracle or I/O error does.
pub fn validate_corpus(
    validator: &dyn Validator,
    source: &dyn DocumentSource,
) -> anyhow::Result<RunReport> {
    let documents = source.documents()?;
    log::debug!("checking {} document(s) for {} references", documents.len(), validator.kind());

    let mut report = RunReport::new(validator.kind());
    for document in &documents {
        let text = source.read(document)?;
        let outcome = validator
            .check_text(document.name(), &text)
            .with_context(|| format!("{} check aborted at {document}", validator.kind()))?;
        report.cases.push(outcome);
    }

    Ok(report)
}
