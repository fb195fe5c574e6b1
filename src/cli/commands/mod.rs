//! Command implementations
//!
//! Each check command returns `Ok(true)` when every document passed.

mod all;
mod check;
mod list;

pub use all::all;
pub use check::{fixers, future_imports};
pub use list::list;

use anyhow::Context;

use docref::adapters::{CommandFixerCatalog, FsCorpus, InterpreterRunner};
use docref::config::Config;
use docref::core::services::{FixerValidator, FutureImportValidator};

/// Open the configured documentation corpus
fn open_corpus(config: &Config) -> anyhow::Result<FsCorpus> {
    FsCorpus::new(&config.corpus.root, &config.corpus.extension)
        .with_context(|| format!("cannot open documentation root {}", config.corpus.root.display()))
}

fn fixer_validator(config: &Config) -> anyhow::Result<FixerValidator<CommandFixerCatalog>> {
    let catalog = CommandFixerCatalog::new(config.fixer_command()?, config.timeout());
    Ok(FixerValidator::new(catalog))
}

fn future_import_validator(
    config: &Config,
) -> anyhow::Result<FutureImportValidator<InterpreterRunner>> {
    let runner = InterpreterRunner::new(config.interpreter()?, config.timeout());
    Ok(FutureImportValidator::new(runner))
}
