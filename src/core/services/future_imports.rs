//! Future-import validation
//!
//! Every `from __future__ import X` mentioned in the docs must run cleanly in
//! a fresh interpreter. Each statement gets its own process; nothing is
//! cached.

use super::Validator;
use super::scanner::scan;
use crate::core::models::{CaseOutcome, Failure, FailureReason, ReferenceKind};
use crate::core::ports::StatementRunner;

/// Checks future-import statements by executing them
#[derive(Debug)]
pub struct FutureImportValidator<R> {
    runner: R,
}

impl<R: StatementRunner> FutureImportValidator<R> {
    /// Create a validator backed by `runner`
    pub const fn new(runner: R) -> Self {
        Self { runner }
    }
}

impl<R: StatementRunner> Validator for FutureImportValidator<R> {
    fn kind(&self) -> ReferenceKind {
        ReferenceKind::FutureImport
    }

    fn check_text(&self, file: &str, text: &str) -> anyhow::Result<CaseOutcome> {
        let references = scan(ReferenceKind::FutureImport, file, text);
        let mut outcome = CaseOutcome::empty(file);
        outcome.references = references.len();

        for reference in references {
            let exit_code = self.runner.run(&reference.text)?;
            if exit_code != Some(0) {
                let reason = FailureReason::ImportFailed { exit_code };
                log::warn!("{} ({reason})", reference.trace());
                outcome.failures.push(Failure { reference, reason });
            }
        }

        Ok(outcome)
    }
}
