//! docref - Check fixer names and future imports mentioned in documentation
//!
//! Documentation rots when the tools it describes change. This library scans
//! a tree of reStructuredText files for two kinds of references and checks
//! each one against the real tool:
//!
//! - fixer names such as `lib2to3.fixes.fix_print`, against the list printed
//!   by `python -m modernize -l`
//! - `from __future__ import X` statements, by running them in a fresh
//!   interpreter
//!
//! # Examples
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use docref::adapters::{CommandSpec, FsCorpus, InterpreterRunner};
//! use docref::core::services::{FutureImportValidator, validate_corpus};
//!
//! let corpus = FsCorpus::new("source", "rst").unwrap();
//! let interpreter = CommandSpec::new("python3").arg("-c");
//! let validator =
//!     FutureImportValidator::new(InterpreterRunner::new(interpreter, Duration::from_secs(60)));
//! let report = validate_corpus(&validator, &corpus).unwrap();
//! assert!(report.passed());
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod output;
pub mod paths;
