//! Fixer oracle port
//!
//! Defines the interface to the modernization tool that knows which
//! fixers exist.

/// Source of the fixer listing
///
/// Implementations run the tool's "list fixers" command and hand back its
/// standard output untouched. Parsing and schema checks live in
/// [`crate::core::services::fixers`].
#[cfg_attr(test, mockall::automock)]
pub trait FixerCatalog {
    /// Raw listing: a header line followed by one fixer name per line
    ///
    /// A non-zero exit of the underlying tool is an error.
    fn listing(&self) -> anyhow::Result<String>;
}
