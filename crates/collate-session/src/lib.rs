//! Host-facing session layer for the Collate comparison tools.
//!
//! Wraps the diff engine with the state a comparison UI drives: two text
//! buffers, compare policy, view preference, and export payload assembly.
//! Nothing here renders; popups, themes, and layout stay with the host.

pub mod error;
pub mod export;
pub mod session;

pub use error::{SessionError, SessionResult};
pub use export::{export_segments, Export, ExportKind};
pub use session::{ClearTarget, CompareSession, Side, ViewMode};

// Re-export key types
pub use collate_diff::{DiffKind, DiffRecord, LineDiff, Segment};
