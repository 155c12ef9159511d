//! Error types for the session crate.
//!
//! These cover the calling-layer policies around the engine; the engine
//! itself never fails.

/// Errors surfaced to the hosting UI.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// A compare was requested while a buffer is empty or whitespace-only.
    #[error("both editors must contain text before comparing")]
    EmptyInput,

    /// An export was requested but there is nothing to write.
    #[error("nothing to export for {target}")]
    NothingToExport { target: &'static str },

    /// Serializing an export payload failed.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Convenience alias for session results.
pub type SessionResult<T> = Result<T, SessionError>;
