//! Fixer-reference validation
//!
//! The fixer oracle prints a header line followed by one fixer name per
//! line. The listing is schema-checked before any document is looked at:
//! the header must not look like a fixer, every other line must.

use std::cell::OnceCell;
use std::collections::BTreeSet;

use thiserror::Error;

use super::Validator;
use super::scanner::scan;
use crate::core::models::{CaseOutcome, Failure, FailureReason, ReferenceKind, is_fixer_name};
use crate::core::ports::FixerCatalog;

/// Errors in the shape of the fixer listing
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ListingError {
    /// The oracle printed nothing
    #[error("fixer listing is empty (expected a header line)")]
    Empty,

    /// The first line looks like a fixer name, so the header is missing
    #[error("fixer listing header looks like a fixer name: {0:?}")]
    HeaderIsFixer(String),

    /// A line after the header is not a fixer name
    #[error("fixer listing line {line} is not a fixer name: {text:?}")]
    MalformedFixer {
        /// 1-based line number in the listing
        line: usize,
        /// The offending line
        text: String,
    },
}

/// The set of fixer names the oracle knows about
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixerSet {
    names: BTreeSet<String>,
}

impl FixerSet {
    /// Parse and schema-check a raw listing
    pub fn parse(listing: &str) -> Result<Self, ListingError> {
        let mut lines = listing.lines();
        let header = lines.next().ok_or(ListingError::Empty)?;
        if is_fixer_name(header) {
            return Err(ListingError::HeaderIsFixer(header.to_string()));
        }

        let mut names = BTreeSet::new();
        for (index, line) in lines.enumerate() {
            if !is_fixer_name(line) {
                return Err(ListingError::MalformedFixer {
                    line: index + 2,
                    text: line.to_string(),
                });
            }
            names.insert(line.to_string());
        }

        Ok(Self { names })
    }

    /// Whether `name` is a known fixer
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Number of known fixers
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the oracle listed no fixers at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Checks fixer references against the oracle's listing
///
/// The listing is fetched on first use and kept for the lifetime of the
/// validator.
#[derive(Debug)]
pub struct FixerValidator<C> {
    catalog: C,
    fixers: OnceCell<FixerSet>,
}

impl<C: FixerCatalog> FixerValidator<C> {
    /// Create a validator backed by `catalog`
    pub const fn new(catalog: C) -> Self {
        Self {
            catalog,
            fixers: OnceCell::new(),
        }
    }

    /// The validated fixer set, fetching it on first call
    pub fn fixers(&self) -> anyhow::Result<&FixerSet> {
        if let Some(fixers) = self.fixers.get() {
            return Ok(fixers);
        }

        let listing = self.catalog.listing()?;
        let fixers = FixerSet::parse(&listing)?;
        log::debug!("fixer oracle lists {} fixer(s)", fixers.len());
        Ok(self.fixers.get_or_init(|| fixers))
    }
}

impl<C: FixerCatalog> Validator for FixerValidator<C> {
    fn kind(&self) -> ReferenceKind {
        ReferenceKind::Fixer
    }

    fn check_text(&self, file: &str, text: &str) -> anyhow::Result<CaseOutcome> {
        let fixers = self.fixers()?;
        let references = scan(ReferenceKind::Fixer, file, text);
        let mut outcome = CaseOutcome::empty(file);
        outcome.references = references.len();

        for reference in references {
            if !fixers.contains(&reference.text) {
                log::warn!("unknown fixer {}", reference.line_trace());
                outcome.failures.push(Failure {
                    reference,
                    reason: FailureReason::UnknownFixer,
                });
            }
        }

        Ok(outcome)
    }
}
