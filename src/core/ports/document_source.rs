//! Documentation corpus port

use crate::core::models::Document;

/// Provides the documents to validate and their contents
#[cfg_attr(test, mockall::automock)]
pub trait DocumentSource {
    /// All documents in the corpus, in the order they should be checked
    fn documents(&self) -> anyhow::Result<Vec<Document>>;

    /// Full text of one document
    fn read(&self, document: &Document) -> anyhow::Result<String>;
}
