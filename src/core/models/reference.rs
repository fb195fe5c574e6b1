//! References found in documentation text
//!
//! A [`Reference`] is one regex match inside one line of a document.
//! [`ReferenceKind`] owns the pattern for each kind of reference.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Fixer names look like `<module>.fixes.fix_<name>`
static FIXER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+\.fixes\.fix_\w+").expect("fixer pattern is valid"));

/// Anchored variant used to validate whole lines of the fixer listing
static FIXER_FULL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\w+\.fixes\.fix_\w+)$").expect("fixer pattern is valid"));

/// A future import runs up to the first whitespace or backtick
static FUTURE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"from __future__ import [^\s`]+").expect("future import pattern is valid")
});

/// The kind of reference a validator looks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceKind {
    /// `lib2to3.fixes.fix_print`
    Fixer,
    /// `from __future__ import division`
    FutureImport,
}

impl ReferenceKind {
    /// Regex that finds this kind of reference anywhere in a line
    #[must_use]
    pub fn pattern(self) -> &'static Regex {
        match self {
            Self::Fixer => &*FIXER_RE,
            Self::FutureImport => &*FUTURE_RE,
        }
    }

    /// Human label used in reports
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fixer => "fixer",
            Self::FutureImport => "future import",
        }
    }
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether `text` is exactly one fixer name, with nothing around it
#[must_use]
pub fn is_fixer_name(text: &str) -> bool {
    FIXER_FULL_RE.is_match(text)
}

/// A reference found in a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reference {
    /// What was matched
    pub kind: ReferenceKind,
    /// Document display name
    pub file: String,
    /// 1-based line number
    pub line: usize,
    /// The matched text
    pub text: String,
    /// The whole line, trimmed
    pub context: String,
}

impl Reference {
    /// `file:line:text` trace used in logs and failure reports
    #[must_use]
    pub fn trace(&self) -> String {
        format!("{}:{}:{}", self.file, self.line, self.text)
    }

    /// `file:line:context` trace showing the full source line
    #[must_use]
    pub fn line_trace(&self) -> String {
        format!("{}:{}:{}", self.file, self.line, self.context)
    }
}
