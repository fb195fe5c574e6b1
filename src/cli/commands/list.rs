//! List documentation files

use docref::config::Config;
use docref::output::{ListResult, OutputMode};

use super::open_corpus;

/// List the documents the checks would visit
pub fn list(config: &Config, mode: OutputMode) -> anyhow::Result<bool> {
    let corpus = open_corpus(config)?;
    let documents = corpus.find_documents()?;

    let result = ListResult {
        root: corpus.root().display().to_string(),
        pattern: corpus.pattern().to_string(),
        files: documents.iter().map(|d| d.name().to_string()).collect(),
    };
    result.render(mode);
    Ok(true)
}
