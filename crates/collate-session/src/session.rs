//! Comparison session: buffers, compare policy, and view preference.
//!
//! The session is the non-visual state the UI drives. It owns the two text
//! buffers, the last computed diff, and the preferred layout, and it applies
//! the calling-layer policies the engine deliberately does not: newline
//! normalization and the blank-input check. Presentation stays with the host.

use collate_diff::{diff_lines, diff_segments, LineDiff, Segment};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{SessionError, SessionResult};

/// Which buffer an operation targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Which buffers a clear operation targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClearTarget {
    Left,
    Right,
    Both,
}

/// How the host intends to lay out the diff. Carried as data only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    #[default]
    SideBySide,
    Inline,
}

/// A text comparison session.
#[derive(Debug, Default)]
pub struct CompareSession {
    left: String,
    right: String,
    view: ViewMode,
    result: Option<LineDiff>,
}

impl CompareSession {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the content of one buffer.
    pub fn set_text(&mut self, side: Side, text: impl Into<String>) {
        let text = text.into();
        debug!(?side, bytes = text.len(), "buffer replaced");
        match side {
            Side::Left => self.left = text,
            Side::Right => self.right = text,
        }
    }

    /// Current content of one buffer.
    pub fn text(&self, side: Side) -> &str {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// The preferred layout.
    pub fn view(&self) -> ViewMode {
        self.view
    }

    /// Set the preferred layout.
    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    /// The last computed diff, if any.
    pub fn result(&self) -> Option<&LineDiff> {
        self.result.as_ref()
    }

    /// Exchange the two buffers. The last diff result is kept.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.left, &mut self.right);
        debug!("buffers swapped");
    }

    /// Clear one or both buffers. Clearing both also drops the last result.
    pub fn clear(&mut self, target: ClearTarget) {
        if matches!(target, ClearTarget::Left | ClearTarget::Both) {
            self.left.clear();
        }
        if matches!(target, ClearTarget::Right | ClearTarget::Both) {
            self.right.clear();
        }
        if matches!(target, ClearTarget::Both) {
            self.result = None;
        }
        debug!(?target, "buffers cleared");
    }

    /// Compare the two buffers line by line.
    ///
    /// CRLF sequences are normalized to LF before splitting. Fails when
    /// either buffer is empty or whitespace-only; that check is session
    /// policy, the engine itself accepts any input.
    pub fn compare(&mut self) -> SessionResult<&LineDiff> {
        self.check_nonblank()?;

        let left = normalize(&self.left);
        let right = normalize(&self.right);
        let left_lines: Vec<&str> = left.split('\n').collect();
        let right_lines: Vec<&str> = right.split('\n').collect();

        let diff = diff_lines(&left_lines, &right_lines);
        debug!(
            records = diff.len(),
            additions = diff.additions(),
            removals = diff.removals(),
            modifications = diff.modifications(),
            "line diff computed"
        );
        Ok(self.result.insert(diff))
    }

    /// Compare the two buffers character by character.
    ///
    /// Same blank-input policy as [`compare`](Self::compare); the result is
    /// returned rather than stored.
    pub fn compare_segments(&self) -> SessionResult<Vec<Segment>> {
        self.check_nonblank()?;
        let segments = diff_segments(&self.left, &self.right);
        debug!(segments = segments.len(), "segment diff computed");
        Ok(segments)
    }

    fn check_nonblank(&self) -> SessionResult<()> {
        if self.left.trim().is_empty() || self.right.trim().is_empty() {
            return Err(SessionError::EmptyInput);
        }
        Ok(())
    }
}

fn normalize(text: &str) -> String {
    text.replace("\r\n", "\n")
}
