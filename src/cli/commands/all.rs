//! Run every validator

use docref::config::Config;
use docref::core::services::{Validator, validate_corpus};
use docref::output::{AllResult, OutputMode, ValidationResult};

use super::{fixer_validator, future_import_validator, open_corpus};

/// Run the fixer and future-import checks; both always run
///
/// A validator that cannot run does not stop the other one. Its error is
/// returned after the results of the rest have been rendered.
pub fn all(config: &Config, mode: OutputMode) -> anyhow::Result<bool> {
    let corpus = open_corpus(config)?;
    let fixers = fixer_validator(config)?;
    let futures = future_import_validator(config)?;

    let validators: [&dyn Validator; 2] = [&fixers, &futures];
    let mut results = Vec::with_capacity(validators.len());
    let mut errors = Vec::new();
    for validator in validators {
        match validate_corpus(validator, &corpus) {
            Ok(report) => results.push(ValidationResult::from(report)),
            Err(e) => {
                log::warn!("{} check could not run: {e:#}", validator.kind());
                errors.push(e);
            },
        }
    }

    let result = AllResult::new(results);
    result.render(mode);

    match errors.into_iter().next() {
        Some(e) => Err(e),
        None => Ok(result.passed),
    }
}
