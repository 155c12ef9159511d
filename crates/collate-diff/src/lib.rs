//! Diff engine for the Collate comparison tools.
//!
//! Aligns two texts line by line with a bounded-lookahead heuristic,
//! classifies every line, and exposes the row models and export format the
//! hosting UI consumes. A character-level segment path delegates to the
//! `similar` crate.
//!
//! # Key Types
//!
//! - [`LineDiff`] / [`DiffRecord`] / [`DiffKind`] -- Line-level diff records
//! - [`Segment`] -- Character-level diff runs (delegated to `similar`)
//! - [`SideBySideRow`] / [`UnifiedRow`] -- Rendering row models
//! - [`ExportLine`] -- Parsed plain-text export

pub mod error;
pub mod line_diff;
pub mod render;
pub mod segment_diff;

pub use error::{DiffError, DiffResult};
pub use line_diff::{diff_lines, diff_text, DiffKind, DiffRecord, LineDiff, LOOKAHEAD_WINDOW};
pub use render::{
    export_text, parse_export, side_by_side, unified, ExportLine, RowCell, SideBySideRow,
    UnifiedRow,
};
pub use segment_diff::{diff_segments, has_changes, Segment};
