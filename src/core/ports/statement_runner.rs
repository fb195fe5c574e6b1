//! Statement oracle port
//!
//! Defines the interface to the interpreter that executes single
//! statements.

/// Executes one statement as a standalone program
#[cfg_attr(test, mockall::automock)]
pub trait StatementRunner {
    /// Run `statement` in a fresh interpreter and return its exit code
    ///
    /// `Ok(None)` means the interpreter was terminated by a signal.
    /// `Err` is reserved for failures to run the interpreter at all
    /// (missing binary, timeout).
    fn run(&self, statement: &str) -> anyhow::Result<Option<i32>>;
}
