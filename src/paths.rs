//! Centralized names and defaults for docref
//!
//! ## Layout
//!
//! ```text
//! project/
//! ├── docref.toml          # Optional configuration
//! └── source/              # Documentation root
//!     ├── index.rst
//!     └── guide/
//!         └── tools.rst
//! ```

use std::path::{Path, PathBuf};

/// Configuration filename, looked up in the working directory
pub const CONFIG_FILE: &str = "docref.toml";

/// Documentation root, relative to the working directory
pub const DEFAULT_DOCS_DIR: &str = "source";

/// Extension of documentation files
pub const DEFAULT_EXTENSION: &str = "rst";

/// Seconds an oracle process may run before it is killed
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Fixer oracle argv
pub const DEFAULT_FIXER_COMMAND: [&str; 4] = ["python3", "-m", "modernize", "-l"];

/// Statement oracle argv; the statement is appended
pub const DEFAULT_INTERPRETER: [&str; 2] = ["python3", "-c"];

/// Get path to `docref.toml` inside `dir`.
#[must_use]
pub fn config_file(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE)
}
