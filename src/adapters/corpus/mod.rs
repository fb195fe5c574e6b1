//! Filesystem documentation corpus
//!
//! Implements `DocumentSource` by walking a directory tree and keeping every
//! file whose relative path matches `**/*.<extension>`.

use std::fs;
use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use thiserror::Error;
use walkdir::WalkDir;

use crate::core::models::Document;
use crate::core::ports::DocumentSource;

/// Errors that can occur while discovering or reading documents
#[derive(Debug, Error)]
pub enum CorpusError {
    /// Root path does not exist
    #[error("documentation root does not exist: {0}")]
    RootNotFound(PathBuf),

    /// Root path is not a directory
    #[error("documentation root is not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Extension cannot form a file pattern
    #[error("invalid document extension: {0:?}")]
    InvalidExtension(String),

    /// Error building the file pattern
    #[error("invalid file pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// Error walking directory tree
    #[error("walkdir error: {0}")]
    WalkDir(#[from] walkdir::Error),

    /// Error reading a document
    #[error("failed to read {path}: {source}")]
    Read {
        /// File being read
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },
}

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// A documentation tree on disk
#[derive(Debug, Clone)]
pub struct FsCorpus {
    root: PathBuf,
    pattern: Pattern,
}

impl FsCorpus {
    /// Create a corpus rooted at `root` that selects `*.<extension>` files
    pub fn new(root: impl AsRef<Path>, extension: &str) -> Result<Self, CorpusError> {
        let root = root.as_ref().to_path_buf();

        if !root.exists() {
            return Err(CorpusError::RootNotFound(root));
        }
        if !root.is_dir() {
            return Err(CorpusError::NotADirectory(root));
        }
        if extension.is_empty() || extension.contains('/') {
            return Err(CorpusError::InvalidExtension(extension.to_string()));
        }

        let pattern = Pattern::new(&format!("**/*.{}", Pattern::escape(extension)))?;
        Ok(Self { root, pattern })
    }

    /// Get the root path
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The file pattern, relative to the root
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Find every matching file, sorted by relative path
    pub fn find_documents(&self) -> Result<Vec<Document>, CorpusError> {
        let root = &self.root;
        let mut documents = Vec::new();

        // Dotfiles and dot-directories are documents too
        for entry in WalkDir::new(root).follow_links(true) {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let relative = path.strip_prefix(root).unwrap_or(path);

            if self.pattern.matches_path_with(relative, MATCH_OPTIONS) {
                documents.push(Document::from_relative(root, relative));
            }
        }

        // Sort for deterministic output
        documents.sort();
        log::debug!(
            "found {} document(s) matching {} under {}",
            documents.len(),
            self.pattern,
            root.display()
        );
        Ok(documents)
    }

    /// Read a document as UTF-8 text
    pub fn read_document(&self, document: &Document) -> Result<String, CorpusError> {
        fs::read_to_string(document.path()).map_err(|source| CorpusError::Read {
            path: document.path().to_path_buf(),
            source,
        })
    }
}

impl DocumentSource for FsCorpus {
    fn documents(&self) -> anyhow::Result<Vec<Document>> {
        Ok(self.find_documents()?)
    }

    fn read(&self, document: &Document) -> anyhow::Result<String> {
        Ok(self.read_document(document)?)
    }
}
