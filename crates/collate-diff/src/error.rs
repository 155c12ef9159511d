//! Error types for the diff crate.
//!
//! The diff engines themselves are total; only the export parser can fail.

/// Errors that can occur when working with diff renderings.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    /// An export line matched none of the known prefixes.
    #[error("malformed export at line {line}: expected a ' ', '+ ', or '- ' prefix")]
    MalformedExport { line: usize },
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
