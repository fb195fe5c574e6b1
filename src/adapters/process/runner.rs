//! Blocking process execution with a deadline

use std::process::Stdio;
use std::time::Duration;

use thiserror::Error;

use super::CommandSpec;

/// Errors raised while running an oracle process
#[derive(Debug, Error)]
pub enum OracleError {
    /// The program could not be started
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        /// Command line, for display
        command: String,
        /// Underlying error
        source: std::io::Error,
    },

    /// The program did not finish in time and was killed
    #[error("`{command}` timed out after {} seconds", .timeout.as_secs())]
    Timeout {
        /// Command line, for display
        command: String,
        /// The deadline that was exceeded
        timeout: Duration,
    },

    /// The program exited unsuccessfully
    #[error("`{command}` exited with {}: {}", exit_label(.exit_code), .stderr.trim())]
    Failed {
        /// Command line, for display
        command: String,
        /// Exit code, `None` when killed by a signal
        exit_code: Option<i32>,
        /// Captured standard error
        stderr: String,
    },

    /// The program printed something other than ASCII
    #[error("`{command}` printed non-ASCII output")]
    NonAscii {
        /// Command line, for display
        command: String,
    },

    /// The async runtime driving the child could not be built
    #[error("failed to start process runtime: {source}")]
    Runtime {
        /// Underlying error
        source: std::io::Error,
    },

    /// Waiting on the child failed
    #[error("error waiting for `{command}`: {source}")]
    Wait {
        /// Command line, for display
        command: String,
        /// Underlying error
        source: std::io::Error,
    },
}

#[allow(clippy::ref_option)]
fn exit_label(exit_code: &Option<i32>) -> String {
    exit_code.map_or_else(|| "a signal".to_string(), |code| format!("status {code}"))
}

/// Output from a finished process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Standard output from the process
    pub stdout: Vec<u8>,
    /// Standard error from the process
    pub stderr: Vec<u8>,
    /// Exit code from the process (None if terminated by signal)
    pub exit_code: Option<i32>,
}

impl ProcessOutput {
    /// Check if the process exited with code 0
    #[must_use]
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Get stderr as a string, lossy conversion
    #[must_use]
    pub fn stderr_string(&self) -> String {
        String::from_utf8_lossy(&self.stderr).into_owned()
    }
}

/// Run `spec` to completion, killing it once `timeout` has passed
///
/// Stdin is closed; stdout and stderr are captured. The deadline covers
/// reading both pipes to EOF, so a background process that inherited them
/// cannot hold the run open.
pub fn run(spec: &CommandSpec, timeout: Duration) -> Result<ProcessOutput, OracleError> {
    log::debug!("running `{spec}` (timeout {}s)", timeout.as_secs());

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_io()
        .enable_time()
        .build()
        .map_err(|source| OracleError::Runtime { source })?;

    runtime.block_on(run_async(spec, timeout))
}

async fn run_async(spec: &CommandSpec, timeout: Duration) -> Result<ProcessOutput, OracleError> {
    let child = spec
        .to_tokio_command()
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|source| OracleError::Spawn {
            command: spec.to_string(),
            source,
        })?;

    // Dropping the future on timeout drops the child, which kills it
    match tokio::time::timeout(timeout, child.wait_with_output()).await {
        Ok(Ok(output)) => Ok(ProcessOutput {
            stdout: output.stdout,
            stderr: output.stderr,
            exit_code: output.status.code(),
        }),
        Ok(Err(source)) => Err(OracleError::Wait {
            command: spec.to_string(),
            source,
        }),
        Err(_) => Err(OracleError::Timeout {
            command: spec.to_string(),
            timeout,
        }),
    }
}
