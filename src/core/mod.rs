//! Core validation logic for docref
//!
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Document, Reference, CaseOutcome)
//! - `services/` - Scanning and the two validators
//! - `ports/` - Trait definitions for the corpus and the oracles

pub mod models;
pub mod ports;
pub mod services;
