//! Line-level diff: greedy alignment of two line sequences.
//!
//! A single left-to-right pass with two cursors. After a mismatch the engine
//! searches a bounded window ahead on either side for a resynchronization
//! point; lines skipped to reach it are classified as added or removed, and a
//! mismatch with no match in the window becomes a single modified line.
//! Heuristic rather than minimum-edit-distance, but deterministic and linear.

use serde::{Deserialize, Serialize};

/// How far ahead either side is searched to resynchronize after a mismatch.
pub const LOOKAHEAD_WINDOW: usize = 5;

/// Classification of a single diff record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiffKind {
    /// Present in both sequences with identical content.
    Unchanged,
    /// Present only in the right sequence.
    Added,
    /// Present only in the left sequence.
    Removed,
    /// Present in both sequences with different content.
    Modified,
}

/// One classified row of a line comparison.
///
/// Line numbers are 1-based indices into the respective input sequence. A
/// side with no number has no content on that side, so Added/Removed carry
/// exactly one side and Unchanged/Modified carry both.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiffRecord {
    /// A line present in both sequences with identical content.
    Unchanged {
        content: String,
        left_line: usize,
        right_line: usize,
    },
    /// A line present only in the right sequence.
    Added { content: String, right_line: usize },
    /// A line present only in the left sequence.
    Removed { content: String, left_line: usize },
    /// A position where both sides have content but it differs.
    Modified {
        left_content: String,
        right_content: String,
        left_line: usize,
        right_line: usize,
    },
}

impl DiffRecord {
    /// The record's classification.
    pub fn kind(&self) -> DiffKind {
        match self {
            DiffRecord::Unchanged { .. } => DiffKind::Unchanged,
            DiffRecord::Added { .. } => DiffKind::Added,
            DiffRecord::Removed { .. } => DiffKind::Removed,
            DiffRecord::Modified { .. } => DiffKind::Modified,
        }
    }

    /// Content on the left side, if the record has one.
    pub fn left_content(&self) -> Option<&str> {
        match self {
            DiffRecord::Unchanged { content, .. } | DiffRecord::Removed { content, .. } => {
                Some(content)
            }
            DiffRecord::Modified { left_content, .. } => Some(left_content),
            DiffRecord::Added { .. } => None,
        }
    }

    /// Content on the right side, if the record has one.
    pub fn right_content(&self) -> Option<&str> {
        match self {
            DiffRecord::Unchanged { content, .. } | DiffRecord::Added { content, .. } => {
                Some(content)
            }
            DiffRecord::Modified { right_content, .. } => Some(right_content),
            DiffRecord::Removed { .. } => None,
        }
    }

    /// 1-based line number in the left sequence, if the record has one.
    pub fn left_line(&self) -> Option<usize> {
        match self {
            DiffRecord::Unchanged { left_line, .. }
            | DiffRecord::Removed { left_line, .. }
            | DiffRecord::Modified { left_line, .. } => Some(*left_line),
            DiffRecord::Added { .. } => None,
        }
    }

    /// 1-based line number in the right sequence, if the record has one.
    pub fn right_line(&self) -> Option<usize> {
        match self {
            DiffRecord::Unchanged { right_line, .. }
            | DiffRecord::Added { right_line, .. }
            | DiffRecord::Modified { right_line, .. } => Some(*right_line),
            DiffRecord::Removed { .. } => None,
        }
    }
}

/// The result of comparing two line sequences.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineDiff {
    /// The classified records in output order.
    pub records: Vec<DiffRecord>,
}

impl LineDiff {
    /// Create an empty diff.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if there are no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Number of added lines.
    pub fn additions(&self) -> usize {
        self.records
            .iter()
            .filter(|r| matches!(r, DiffRecord::Added { .. }))
            .count()
    }

    /// Number of removed lines.
    pub fn removals(&self) -> usize {
        self.records
            .iter()
            .filter(|r| matches!(r, DiffRecord::Removed { .. }))
            .count()
    }

    /// Number of modified lines.
    pub fn modifications(&self) -> usize {
        self.records
            .iter()
            .filter(|r| matches!(r, DiffRecord::Modified { .. }))
            .count()
    }

    /// Number of unchanged lines.
    pub fn unchanged(&self) -> usize {
        self.records
            .iter()
            .filter(|r| matches!(r, DiffRecord::Unchanged { .. }))
            .count()
    }

    /// Returns `true` if any record is not `Unchanged`.
    pub fn has_changes(&self) -> bool {
        self.records
            .iter()
            .any(|r| r.kind() != DiffKind::Unchanged)
    }
}

/// Compare two line sequences and classify every line.
///
/// Total over all inputs; two empty sequences produce an empty diff. On a
/// mismatch the engine first searches up to [`LOOKAHEAD_WINDOW`] lines ahead
/// on the right for the current left line (an addition run), then the same
/// distance ahead on the left for the current right line (a removal run).
/// The removal interpretation overrides only at a strictly smaller distance;
/// on equal distance the addition interpretation stands. A mismatch with no
/// match in either window is reported as one modified line.
pub fn diff_lines(left: &[&str], right: &[&str]) -> LineDiff {
    let mut records = Vec::new();
    let mut i = 0; // left cursor
    let mut j = 0; // right cursor

    while i < left.len() || j < right.len() {
        if i < left.len() && j < right.len() {
            if left[i] == right[j] {
                records.push(DiffRecord::Unchanged {
                    content: left[i].to_string(),
                    left_line: i + 1,
                    right_line: j + 1,
                });
                i += 1;
                j += 1;
                continue;
            }

            // Resynchronization search. Candidate indices stay strictly in
            // range, so a miss near the tail falls through to the drain arms.
            let mut right_ahead = 0;
            let mut found = false;
            for k in 1..=LOOKAHEAD_WINDOW {
                if j + k >= right.len() {
                    break;
                }
                if left[i] == right[j + k] {
                    right_ahead = k;
                    found = true;
                    break;
                }
            }

            let mut left_ahead = 0;
            for m in 1..=LOOKAHEAD_WINDOW {
                if i + m >= left.len() {
                    break;
                }
                if left[i + m] == right[j] {
                    left_ahead = m;
                    // Override the right-side match only at a strictly
                    // smaller distance.
                    if !found || left_ahead < right_ahead {
                        found = true;
                        right_ahead = 0;
                    }
                    break;
                }
            }

            if found && right_ahead > 0 {
                for x in 0..right_ahead {
                    records.push(DiffRecord::Added {
                        content: right[j + x].to_string(),
                        right_line: j + x + 1,
                    });
                }
                // The left cursor stays put: it matches the new right head.
                j += right_ahead;
            } else if found && left_ahead > 0 {
                for x in 0..left_ahead {
                    records.push(DiffRecord::Removed {
                        content: left[i + x].to_string(),
                        left_line: i + x + 1,
                    });
                }
                i += left_ahead;
            } else {
                records.push(DiffRecord::Modified {
                    left_content: left[i].to_string(),
                    right_content: right[j].to_string(),
                    left_line: i + 1,
                    right_line: j + 1,
                });
                i += 1;
                j += 1;
            }
        } else if i < left.len() {
            records.push(DiffRecord::Removed {
                content: left[i].to_string(),
                left_line: i + 1,
            });
            i += 1;
        } else {
            records.push(DiffRecord::Added {
                content: right[j].to_string(),
                right_line: j + 1,
            });
            j += 1;
        }
    }

    LineDiff { records }
}

/// Split both inputs on `'\n'` and compare the resulting line sequences.
///
/// Newline normalization (CRLF handling) is owned by the caller.
pub fn diff_text(old: &str, new: &str) -> LineDiff {
    let left: Vec<&str> = old.split('\n').collect();
    let right: Vec<&str> = new.split('\n').collect();
    diff_lines(&left, &right)
}
