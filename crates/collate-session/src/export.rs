//! Export payload assembly: named downloads for buffers and diff results.
//!
//! Produces `{filename, content}` pairs for the host's download path; the
//! host owns the actual file delivery.

use collate_diff::{export_text, Segment};
use tracing::info;

use crate::error::{SessionError, SessionResult};
use crate::session::{CompareSession, Side};

/// What to export.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportKind {
    /// The left buffer, verbatim.
    LeftText,
    /// The right buffer, verbatim.
    RightText,
    /// The last line diff in the plain-text export format.
    DiffText,
}

/// A named export payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Export {
    pub filename: &'static str,
    pub content: String,
}

impl CompareSession {
    /// Assemble an export payload.
    ///
    /// An empty or whitespace-only payload is rejected; with no stored diff
    /// result, [`ExportKind::DiffText`] is one.
    pub fn export(&self, kind: ExportKind) -> SessionResult<Export> {
        let (filename, content) = match kind {
            ExportKind::LeftText => ("left-text.txt", self.text(Side::Left).to_string()),
            ExportKind::RightText => ("right-text.txt", self.text(Side::Right).to_string()),
            ExportKind::DiffText => (
                "diff-result.txt",
                self.result().map(export_text).unwrap_or_default(),
            ),
        };
        if content.trim().is_empty() {
            return Err(SessionError::NothingToExport { target: filename });
        }
        info!(filename, bytes = content.len(), "export assembled");
        Ok(Export { filename, content })
    }
}

/// Serialize a segment diff as a pretty-printed JSON payload.
pub fn export_segments(segments: &[Segment]) -> SessionResult<Export> {
    if segments.is_empty() {
        return Err(SessionError::NothingToExport {
            target: "diff-result.json",
        });
    }
    let content = serde_json::to_string_pretty(segments)?;
    info!(bytes = content.len(), "segment export assembled");
    Ok(Export {
        filename: "diff-result.json",
        content,
    })
}
