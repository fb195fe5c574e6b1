//! Domain models for docref
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Document`] - A documentation file in the corpus
//! - [`Reference`] - A fixer name or future import found in a line
//! - [`CaseOutcome`] - The verdict for one document

mod document;
mod outcome;
mod reference;

pub use document::Document;
pub use outcome::{CaseOutcome, Failure, FailureReason, RunReport};
pub use reference::{Reference, ReferenceKind, is_fixer_name};
