//! Subprocess-backed oracles

use std::time::Duration;

use super::runner::{self, OracleError};
use super::CommandSpec;
use crate::core::ports::{FixerCatalog, StatementRunner};

/// Runs the modernization tool's "list fixers" command
#[derive(Debug, Clone)]
pub struct CommandFixerCatalog {
    command: CommandSpec,
    timeout: Duration,
}

impl CommandFixerCatalog {
    /// Create a catalog that runs `command`
    #[must_use]
    pub const fn new(command: CommandSpec, timeout: Duration) -> Self {
        Self { command, timeout }
    }

    /// Run the listing command and return its ASCII stdout
    pub fn fetch(&self) -> Result<String, OracleError> {
        let output = runner::run(&self.command, self.timeout)?;

        if !output.success() {
            return Err(OracleError::Failed {
                command: self.command.to_string(),
                exit_code: output.exit_code,
                stderr: output.stderr_string(),
            });
        }
        if !output.stdout.is_ascii() {
            return Err(OracleError::NonAscii {
                command: self.command.to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl FixerCatalog for CommandFixerCatalog {
    fn listing(&self) -> anyhow::Result<String> {
        Ok(self.fetch()?)
    }
}

/// Runs each statement as `<interpreter...> <statement>`
#[derive(Debug, Clone)]
pub struct InterpreterRunner {
    interpreter: CommandSpec,
    timeout: Duration,
}

impl InterpreterRunner {
    /// Create a runner; the statement is appended to `interpreter`'s argv
    #[must_use]
    pub const fn new(interpreter: CommandSpec, timeout: Duration) -> Self {
        Self {
            interpreter,
            timeout,
        }
    }

    /// Execute one statement and return its exit code
    pub fn execute(&self, statement: &str) -> Result<Option<i32>, OracleError> {
        let spec = self.interpreter.clone().arg(statement);
        let output = runner::run(&spec, self.timeout)?;
        if !output.success() {
            log::debug!("`{spec}` failed: {}", output.stderr_string().trim());
        }
        Ok(output.exit_code)
    }
}

impl StatementRunner for InterpreterRunner {
    fn run(&self, statement: &str) -> anyhow::Result<Option<i32>> {
        Ok(self.execute(statement)?)
    }
}
