//! Configuration
//!
//! docref reads an optional `docref.toml`. Every field has a default, so an
//! empty (or missing) file gives the stock setup: scan `source/**/*.rst`,
//! list fixers with `python3 -m modernize -l`, run statements with
//! `python3 -c`.
//!
//! ```toml
//! timeout_secs = 60
//!
//! [corpus]
//! root = "source"
//! extension = "rst"
//!
//! [fixers]
//! command = ["python3", "-m", "modernize", "-l"]
//!
//! [future_imports]
//! interpreter = ["python3", "-c"]
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::adapters::CommandSpec;
use crate::paths;

/// Errors loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        /// Config file path
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// Config file path
        path: PathBuf,
        /// Underlying error
        source: toml::de::Error,
    },

    /// A value is out of range
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Seconds an oracle process may run before it is killed
    pub timeout_secs: u64,
    /// Where documentation lives
    pub corpus: CorpusConfig,
    /// Fixer oracle
    pub fixers: FixersConfig,
    /// Statement oracle
    pub future_imports: FutureImportsConfig,
}

/// Documentation corpus settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CorpusConfig {
    /// Documentation root
    pub root: PathBuf,
    /// File extension without the dot
    pub extension: String,
}

/// Fixer oracle settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FixersConfig {
    /// Argv of the "list fixers" command
    pub command: Vec<String>,
}

/// Statement oracle settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FutureImportsConfig {
    /// Interpreter argv; the statement is appended as the last argument
    pub interpreter: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout_secs: paths::DEFAULT_TIMEOUT_SECS,
            corpus: CorpusConfig::default(),
            fixers: FixersConfig::default(),
            future_imports: FutureImportsConfig::default(),
        }
    }
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(paths::DEFAULT_DOCS_DIR),
            extension: paths::DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl Default for FixersConfig {
    fn default() -> Self {
        Self {
            command: paths::DEFAULT_FIXER_COMMAND.iter().map(ToString::to_string).collect(),
        }
    }
}

impl Default for FutureImportsConfig {
    fn default() -> Self {
        Self {
            interpreter: paths::DEFAULT_INTERPRETER.iter().map(ToString::to_string).collect(),
        }
    }
}

impl Config {
    /// Load and validate a config file
    ///
    /// A relative `corpus.root` is resolved against the file's directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if config.corpus.root.is_relative() {
            if let Some(dir) = path.parent() {
                config.corpus.root = dir.join(&config.corpus.root);
            }
        }

        config.validate()?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Load `docref.toml` from `dir` if present, defaults otherwise
    ///
    /// Default paths stay relative to the working directory.
    pub fn discover(dir: &Path) -> Result<Self, ConfigError> {
        let path = paths::config_file(dir);
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid("timeout_secs must be greater than 0".into()));
        }
        if self.corpus.extension.is_empty() || self.corpus.extension.contains('/') {
            return Err(ConfigError::Invalid(format!(
                "corpus.extension must be a bare extension, got {:?}",
                self.corpus.extension
            )));
        }
        if self.fixers.command.is_empty() {
            return Err(ConfigError::Invalid("fixers.command must not be empty".into()));
        }
        if self.future_imports.interpreter.is_empty() {
            return Err(ConfigError::Invalid(
                "future_imports.interpreter must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Oracle timeout
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The fixer listing command
    pub fn fixer_command(&self) -> Result<CommandSpec, ConfigError> {
        CommandSpec::from_argv(&self.fixers.command)
            .ok_or_else(|| ConfigError::Invalid("fixers.command must not be empty".into()))
    }

    /// The interpreter command, without the statement
    pub fn interpreter(&self) -> Result<CommandSpec, ConfigError> {
        CommandSpec::from_argv(&self.future_imports.interpreter).ok_or_else(|| {
            ConfigError::Invalid("future_imports.interpreter must not be empty".into())
        })
    }
}
