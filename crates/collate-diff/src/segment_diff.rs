//! Character-level segment diff for the semantic text path.
//!
//! Delegates to the `similar` crate (Myers) and coalesces the per-character
//! changes into runs of equal, inserted, and deleted text. The alignment
//! itself is the library's; this module only shapes its output.

use serde::{Deserialize, Serialize};
use similar::{Algorithm, ChangeTag, TextDiff};

/// A run of text classified against the two inputs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Segment {
    /// Text present in both inputs.
    Equal(String),
    /// Text present only in the new input.
    Insert(String),
    /// Text present only in the old input.
    Delete(String),
}

impl Segment {
    /// The text carried by this segment.
    pub fn text(&self) -> &str {
        match self {
            Segment::Equal(t) | Segment::Insert(t) | Segment::Delete(t) => t,
        }
    }

    /// Returns `true` for an `Equal` segment.
    pub fn is_equal(&self) -> bool {
        matches!(self, Segment::Equal(_))
    }
}

/// Compute a character-level diff of two strings as coalesced segments.
///
/// Adjacent changes with the same tag merge into one segment, so the result
/// reads as alternating runs rather than per-character noise. Identical
/// inputs produce a single `Equal` segment; two empty inputs produce none.
pub fn diff_segments(old: &str, new: &str) -> Vec<Segment> {
    let diff = TextDiff::configure()
        .algorithm(Algorithm::Myers)
        .diff_chars(old, new);

    let mut segments: Vec<Segment> = Vec::new();
    for change in diff.iter_all_changes() {
        let text = change.value();
        match (segments.last_mut(), change.tag()) {
            (Some(Segment::Equal(run)), ChangeTag::Equal)
            | (Some(Segment::Insert(run)), ChangeTag::Insert)
            | (Some(Segment::Delete(run)), ChangeTag::Delete) => run.push_str(text),
            (_, ChangeTag::Equal) => segments.push(Segment::Equal(text.to_string())),
            (_, ChangeTag::Insert) => segments.push(Segment::Insert(text.to_string())),
            (_, ChangeTag::Delete) => segments.push(Segment::Delete(text.to_string())),
        }
    }
    segments
}

/// Returns `true` if any segment is an insertion or deletion.
pub fn has_changes(segments: &[Segment]) -> bool {
    segments.iter().any(|s| !s.is_equal())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn old_text(segments: &[Segment]) -> String {
        segments
            .iter()
            .filter(|s| !matches!(s, Segment::Insert(_)))
            .map(Segment::text)
            .collect()
    }

    fn new_text(segments: &[Segment]) -> String {
        segments
            .iter()
            .filter(|s| !matches!(s, Segment::Delete(_)))
            .map(Segment::text)
            .collect()
    }

    #[test]
    fn identical_inputs_single_equal_segment() {
        let segments = diff_segments("hello world", "hello world");
        assert_eq!(segments, vec![Segment::Equal("hello world".into())]);
        assert!(!has_changes(&segments));
    }

    #[test]
    fn empty_inputs_no_segments() {
        assert!(diff_segments("", "").is_empty());
    }

    #[test]
    fn pure_insertion() {
        let segments = diff_segments("", "abc");
        assert_eq!(segments, vec![Segment::Insert("abc".into())]);
        assert!(has_changes(&segments));
    }

    #[test]
    fn pure_deletion() {
        let segments = diff_segments("abc", "");
        assert_eq!(segments, vec![Segment::Delete("abc".into())]);
    }

    #[test]
    fn adjacent_changes_coalesce() {
        let segments = diff_segments("aaXXbb", "aaYYbb");

        // Runs, not per-character segments.
        assert!(segments.iter().all(|s| !s.text().is_empty()));
        assert!(segments.contains(&Segment::Delete("XX".into())));
        assert!(segments.contains(&Segment::Insert("YY".into())));
    }

    #[test]
    fn segments_reassemble_both_inputs() {
        let cases = [
            ("", ""),
            ("same", "same"),
            ("{\"a\":1}", "{\"a\":2}"),
            ("line one\nline two", "line one\nline 2"),
            ("abc", "xyz"),
        ];
        for (old, new) in cases {
            let segments = diff_segments(old, new);
            assert_eq!(old_text(&segments), old, "old side for {:?}", (old, new));
            assert_eq!(new_text(&segments), new, "new side for {:?}", (old, new));
        }
    }

    #[test]
    fn serde_roundtrip() {
        let segments = diff_segments("abc", "abd");
        let json = serde_json::to_string(&segments).unwrap();
        let parsed: Vec<Segment> = serde_json::from_str(&json).unwrap();
        assert_eq!(segments, parsed);
    }
}
