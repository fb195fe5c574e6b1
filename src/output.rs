//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use std::fmt::Write as _;

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{CaseOutcome, Failure, ReferenceKind, RunReport};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of one validator over the corpus
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    /// Which validator ran
    pub validator: ReferenceKind,
    /// Whether every document passed
    pub passed: bool,
    /// Number of documents checked
    pub files_checked: usize,
    /// Number of references checked
    pub references_checked: usize,
    /// Number of documents with failures
    pub failed_files: usize,
    /// Per-document outcomes
    pub cases: Vec<CaseOutcome>,
}

/// Result of running every validator
#[derive(Debug, Clone, Serialize)]
pub struct AllResult {
    /// Whether every validator passed
    pub passed: bool,
    /// One entry per validator, in run order
    pub results: Vec<ValidationResult>,
}

/// Result of a list operation
#[derive(Debug, Clone, Serialize)]
pub struct ListResult {
    /// Documentation root
    pub root: String,
    /// File pattern relative to the root
    pub pattern: String,
    /// Discovered documents
    pub files: Vec<String>,
}

impl From<RunReport> for ValidationResult {
    fn from(report: RunReport) -> Self {
        Self {
            validator: report.kind,
            passed: report.passed(),
            files_checked: report.files_checked(),
            references_checked: report.references_checked(),
            failed_files: report.failed_cases().count(),
            cases: report.cases,
        }
    }
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 { format!("{n} {word}") } else { format!("{n} {word}s") }
}

fn failure_line(kind: ReferenceKind, failure: &Failure) -> String {
    // Fixer failures show the whole source line, import failures the statement
    let trace = match kind {
        ReferenceKind::Fixer => failure.reference.line_trace(),
        ReferenceKind::FutureImport => failure.reference.trace(),
    };
    format!("{trace}  ({})", failure.reason)
}

impl ValidationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => self.render_json(),
        }
    }

    /// Human-readable report
    #[must_use]
    pub fn to_human(&self) -> String {
        let mut out = String::new();

        if self.files_checked == 0 {
            let _ = writeln!(out, "No documents found.");
            return out;
        }

        let _ = writeln!(
            out,
            "Checking {} for {} references...\n",
            plural(self.files_checked, "document"),
            self.validator
        );

        for case in &self.cases {
            let status = if case.passed() { "PASS".green() } else { "FAIL".red().bold() };
            let _ = writeln!(out, "  {status}  {} ({})", case.file, plural(case.references, "reference"));
            for failure in &case.failures {
                let _ = writeln!(out, "        {}", failure_line(self.validator, failure));
            }
        }

        let _ = writeln!(out);
        if self.passed {
            let _ = writeln!(
                out,
                "OK: {} checked in {}.",
                plural(self.references_checked, "reference"),
                plural(self.files_checked, "document")
            );
        } else {
            let failures: usize = self.cases.iter().map(|c| c.failures.len()).sum();
            let _ = writeln!(
                out,
                "FAILED: {} in {} of {} documents.",
                plural(failures, &format!("bad {} reference", self.validator)),
                self.failed_files,
                self.files_checked
            );
        }
        out
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl AllResult {
    /// Combine per-validator results
    #[must_use]
    pub fn new(results: Vec<ValidationResult>) -> Self {
        Self {
            passed: results.iter().all(|r| r.passed),
            results,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                for (i, result) in self.results.iter().enumerate() {
                    if i > 0 {
                        println!();
                    }
                    print!("{}", result.to_human());
                }
            },
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl ListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.files.is_empty() {
            println!("No documents matching {} under {}.", self.pattern, self.root);
            return;
        }
        for file in &self.files {
            println!("{file}");
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
