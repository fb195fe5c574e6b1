//! Documentation files
//!
//! A document is one text file of the corpus. It is identified by its
//! absolute path and reported by its path relative to the corpus root.

use std::fmt;
use std::path::{Path, PathBuf};

/// A documentation file discovered in a corpus
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Document {
    /// Path relative to the corpus root, with `/` separators
    name: String,
    /// Absolute (or root-joined) path used for reading
    path: PathBuf,
}

impl Document {
    /// Create a document from its display name and on-disk path
    #[must_use]
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Create a document from a path relative to `root`
    #[must_use]
    pub fn from_relative(root: &Path, relative: &Path) -> Self {
        let name = relative.to_string_lossy().replace('\\', "/");
        Self::new(name, root.join(relative))
    }

    /// Name used in reports (`guide/intro.rst`)
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path used to read the file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
