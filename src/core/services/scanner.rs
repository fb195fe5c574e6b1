//! Reference scanner
//!
//! Finds every reference of one kind in a document's text. Pure: the caller
//! reads the file.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::models::{Reference, ReferenceKind};

/// Universal newlines: `\r\n`, a lone `\r` and `\n` all end a line
static LINE_BREAK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r\n|\r|\n").expect("line break pattern is valid"));

/// Scan `text` line by line for references of `kind`
///
/// Line numbers are 1-based. A line can hold several references; they are
/// returned left to right.
#[must_use]
pub fn scan(kind: ReferenceKind, file: &str, text: &str) -> Vec<Reference> {
    let pattern = kind.pattern();
    let mut found = Vec::new();

    for (index, line) in LINE_BREAK_RE.split(text).enumerate() {
        for m in pattern.find_iter(line) {
            let reference = Reference {
                kind,
                file: file.to_string(),
                line: index + 1,
                text: m.as_str().to_string(),
                context: line.trim().to_string(),
            };
            log::debug!("{}", reference.trace());
            found.push(reference);
        }
    }

    found
}
