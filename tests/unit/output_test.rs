//! Tests for the Output module
//!
//! Output provides structured result types that can be rendered as either
//! human-readable text or machine-parseable JSON.

use docref::core::models::{
    CaseOutcome, Failure, FailureReason, Reference, ReferenceKind, RunReport,
};
use docref::output::{AllResult, ListResult, OutputMode, ValidationResult};

fn fixer_failure(file: &str, line: usize, text: &str) -> Failure {
    Failure {
        reference: Reference {
            kind: ReferenceKind::Fixer,
            file: file.to_string(),
            line,
            text: text.to_string(),
            context: format!("see ``{text}``"),
        },
        reason: FailureReason::UnknownFixer,
    }
}

fn sample_report() -> RunReport {
    RunReport {
        kind: ReferenceKind::Fixer,
        cases: vec![
            CaseOutcome {
                file: "index.rst".to_string(),
                references: 2,
                failures: vec![],
            },
            CaseOutcome {
                file: "guide/tools.rst".to_string(),
                references: 1,
                failures: vec![fixer_failure("guide/tools.rst", 12, "lib2to3.fixes.fix_typo")],
            },
        ],
    }
}

// =============================================================================
// OutputMode Tests
// =============================================================================

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

// =============================================================================
// ValidationResult Tests
// =============================================================================

#[test]
fn validation_result_from_report() {
    let result = ValidationResult::from(sample_report());
    assert!(!result.passed);
    assert_eq!(result.files_checked, 2);
    assert_eq!(result.references_checked, 3);
    assert_eq!(result.failed_files, 1);
}

#[test]
fn validation_result_serialization() {
    let result = ValidationResult::from(sample_report());
    let json: serde_json::Value = serde_json::to_value(&result).unwrap();

    assert_eq!(json["validator"], "fixer");
    assert_eq!(json["passed"], false);
    assert_eq!(json["files_checked"], 2);
    let failure = &json["cases"][1]["failures"][0];
    assert_eq!(failure["reason"], "unknown_fixer");
    assert_eq!(failure["reference"]["line"], 12);
    assert_eq!(failure["reference"]["text"], "lib2to3.fixes.fix_typo");
}

#[test]
fn import_failure_serializes_exit_code() {
    let failure = Failure {
        reference: Reference {
            kind: ReferenceKind::FutureImport,
            file: "a.rst".to_string(),
            line: 1,
            text: "from __future__ import braces".to_string(),
            context: "from __future__ import braces".to_string(),
        },
        reason: FailureReason::ImportFailed { exit_code: Some(1) },
    };
    let json = serde_json::to_value(&failure).unwrap();
    assert_eq!(json["reason"], "import_failed");
    assert_eq!(json["exit_code"], 1);
    assert_eq!(json["reference"]["kind"], "future_import");
}

#[test]
fn human_report_shows_failure_trace() {
    let text = ValidationResult::from(sample_report()).to_human();
    assert!(text.contains("Checking 2 documents for fixer references"));
    assert!(text.contains("PASS"));
    assert!(text.contains("FAIL"));
    assert!(text.contains("guide/tools.rst:12:see ``lib2to3.fixes.fix_typo``"));
    assert!(text.contains("not a known fixer"));
    assert!(text.contains("FAILED: 1 bad fixer reference in 1 of 2 documents."));
}

#[test]
fn human_report_for_clean_run() {
    let report = RunReport {
        kind: ReferenceKind::FutureImport,
        cases: vec![CaseOutcome {
            file: "a.rst".to_string(),
            references: 1,
            failures: vec![],
        }],
    };
    let text = ValidationResult::from(report).to_human();
    assert!(text.contains("OK: 1 reference checked in 1 document."));
}

#[test]
fn human_report_for_empty_corpus() {
    let text = ValidationResult::from(RunReport::new(ReferenceKind::Fixer)).to_human();
    assert_eq!(text, "No documents found.\n");
}

// =============================================================================
// AllResult / ListResult Tests
// =============================================================================

#[test]
fn all_result_fails_if_any_fails() {
    let ok = ValidationResult::from(RunReport::new(ReferenceKind::FutureImport));
    let bad = ValidationResult::from(sample_report());
    assert!(AllResult::new(vec![ok.clone()]).passed);
    assert!(!AllResult::new(vec![ok, bad]).passed);
}

#[test]
fn list_result_serialization() {
    let result = ListResult {
        root: "source".to_string(),
        pattern: "**/*.rst".to_string(),
        files: vec!["index.rst".to_string()],
    };
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"pattern\":\"**/*.rst\""));
    assert!(json.contains("index.rst"));
}
