//! Validation outcomes
//!
//! One [`CaseOutcome`] per document and validator. A case passes when it
//! has no failures.

use std::fmt;

use serde::Serialize;

use super::{Reference, ReferenceKind};

/// Why a reference was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum FailureReason {
    /// The fixer oracle does not list this name
    UnknownFixer,
    /// The interpreter rejected the statement
    ImportFailed {
        /// Exit code, `None` when the interpreter was killed by a signal
        exit_code: Option<i32>,
    },
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownFixer => write!(f, "not a known fixer"),
            Self::ImportFailed {
                exit_code: Some(code),
            } => write!(f, "interpreter exited with status {code}"),
            Self::ImportFailed { exit_code: None } => {
                write!(f, "interpreter terminated by signal")
            },
        }
    }
}

/// A rejected reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    /// The offending reference
    pub reference: Reference,
    /// Why it was rejected
    #[serde(flatten)]
    pub reason: FailureReason,
}

/// Result of validating one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseOutcome {
    /// Document display name
    pub file: String,
    /// Number of references found and checked
    pub references: usize,
    /// Rejected references, in source order
    pub failures: Vec<Failure>,
}

impl CaseOutcome {
    /// Outcome for a document with nothing to check
    #[must_use]
    pub fn empty(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            references: 0,
            failures: Vec::new(),
        }
    }

    /// Whether every reference in the document was accepted
    #[must_use]
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// All case outcomes of one validator run over a corpus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Which validator produced the report
    pub kind: ReferenceKind,
    /// One outcome per document, in discovery order
    pub cases: Vec<CaseOutcome>,
}

impl RunReport {
    /// Create an empty report for a validator
    #[must_use]
    pub const fn new(kind: ReferenceKind) -> Self {
        Self {
            kind,
            cases: Vec::new(),
        }
    }

    /// Whether every case passed
    #[must_use]
    pub fn passed(&self) -> bool {
        self.cases.iter().all(CaseOutcome::passed)
    }

    /// Number of documents checked
    #[must_use]
    pub fn files_checked(&self) -> usize {
        self.cases.len()
    }

    /// Number of references checked across all documents
    #[must_use]
    pub fn references_checked(&self) -> usize {
        self.cases.iter().map(|c| c.references).sum()
    }

    /// Cases with at least one failure
    pub fn failed_cases(&self) -> impl Iterator<Item = &CaseOutcome> {
        self.cases.iter().filter(|c| !c.passed())
    }
}
