//! Run a single validator over the corpus

use docref::config::Config;
use docref::core::services::{Validator, validate_corpus};
use docref::output::{OutputMode, ValidationResult};

use super::{fixer_validator, future_import_validator, open_corpus};

/// Check fixer references
pub fn fixers(config: &Config, mode: OutputMode) -> anyhow::Result<bool> {
    let validator = fixer_validator(config)?;
    check(config, &validator, mode)
}

/// Check future-import statements
pub fn future_imports(config: &Config, mode: OutputMode) -> anyhow::Result<bool> {
    let validator = future_import_validator(config)?;
    check(config, &validator, mode)
}

fn check(config: &Config, validator: &dyn Validator, mode: OutputMode) -> anyhow::Result<bool> {
    let corpus = open_corpus(config)?;
    let result = ValidationResult::from(validate_corpus(validator, &corpus)?);
    result.render(mode);
    Ok(result.passed)
}
