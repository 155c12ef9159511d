//! Pure data renderings of a line diff.
//!
//! Produces the row models behind the side-by-side and unified views plus the
//! plain-text export format and its parser. Nothing here draws; the host owns
//! presentation.

use serde::{Deserialize, Serialize};

use crate::error::{DiffError, DiffResult};
use crate::line_diff::{DiffKind, DiffRecord, LineDiff};

/// One cell of a side-by-side row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowCell {
    /// 1-based line number in the owning sequence.
    pub line: usize,
    /// The line content.
    pub content: String,
}

/// One row of the side-by-side rendering.
///
/// An empty side means the row has no counterpart in that sequence (the left
/// side of an added line, the right side of a removed one).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideBySideRow {
    /// Classification of the underlying record.
    pub kind: DiffKind,
    pub left: Option<RowCell>,
    pub right: Option<RowCell>,
}

/// One row of the unified rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnifiedRow {
    /// Row marker: `' '` unchanged, `'+'` added, `'-'` removed, `'~'` the
    /// left half of a modified pair.
    pub marker: char,
    pub left_line: Option<usize>,
    pub right_line: Option<usize>,
    pub content: String,
}

/// One line of a parsed plain-text export.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExportLine {
    Unchanged(String),
    Added(String),
    Removed(String),
}

/// Build the side-by-side row model, one row per record.
pub fn side_by_side(diff: &LineDiff) -> Vec<SideBySideRow> {
    diff.records
        .iter()
        .map(|record| SideBySideRow {
            kind: record.kind(),
            left: record
                .left_line()
                .zip(record.left_content())
                .map(|(line, content)| RowCell {
                    line,
                    content: content.to_string(),
                }),
            right: record
                .right_line()
                .zip(record.right_content())
                .map(|(line, content)| RowCell {
                    line,
                    content: content.to_string(),
                }),
        })
        .collect()
}

/// Build the unified row model.
///
/// A modified record becomes two rows: a `'~'` row with the left content
/// followed by a `'+'` row carrying the right content.
pub fn unified(diff: &LineDiff) -> Vec<UnifiedRow> {
    let mut rows = Vec::new();
    for record in &diff.records {
        match record {
            DiffRecord::Unchanged {
                content,
                left_line,
                right_line,
            } => rows.push(UnifiedRow {
                marker: ' ',
                left_line: Some(*left_line),
                right_line: Some(*right_line),
                content: content.clone(),
            }),
            DiffRecord::Added {
                content,
                right_line,
            } => rows.push(UnifiedRow {
                marker: '+',
                left_line: None,
                right_line: Some(*right_line),
                content: content.clone(),
            }),
            DiffRecord::Removed { content, left_line } => rows.push(UnifiedRow {
                marker: '-',
                left_line: Some(*left_line),
                right_line: None,
                content: content.clone(),
            }),
            DiffRecord::Modified {
                left_content,
                right_content,
                left_line,
                right_line,
            } => {
                rows.push(UnifiedRow {
                    marker: '~',
                    left_line: Some(*left_line),
                    right_line: Some(*right_line),
                    content: left_content.clone(),
                });
                rows.push(UnifiedRow {
                    marker: '+',
                    left_line: None,
                    right_line: Some(*right_line),
                    content: right_content.clone(),
                });
            }
        }
    }
    rows
}

/// Render a diff in the plain-text export format.
///
/// Unchanged lines carry a single leading space, added and removed lines a
/// `"+ "` / `"- "` prefix, and a modified line exports as its removed side
/// followed by its added side. Records are newline-joined.
pub fn export_text(diff: &LineDiff) -> String {
    diff.records
        .iter()
        .map(|record| match record {
            DiffRecord::Unchanged { content, .. } => format!(" {content}"),
            DiffRecord::Added { content, .. } => format!("+ {content}"),
            DiffRecord::Removed { content, .. } => format!("- {content}"),
            DiffRecord::Modified {
                left_content,
                right_content,
                ..
            } => format!("- {left_content}\n+ {right_content}"),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse a plain-text export back into its per-line classification.
///
/// Empty input parses to no lines. Prefixes are checked longest-first, so an
/// unchanged line whose content starts with `'+'` or `'-'` stays unambiguous
/// behind its leading space. A line with no known prefix is rejected; a
/// modified record reads back as a removed/added pair, which is all the
/// format encodes.
pub fn parse_export(text: &str) -> DiffResult<Vec<ExportLine>> {
    if text.is_empty() {
        return Ok(Vec::new());
    }
    text.split('\n')
        .enumerate()
        .map(|(idx, raw)| {
            if let Some(rest) = raw.strip_prefix("+ ") {
                Ok(ExportLine::Added(rest.to_string()))
            } else if let Some(rest) = raw.strip_prefix("- ") {
                Ok(ExportLine::Removed(rest.to_string()))
            } else if let Some(rest) = raw.strip_prefix(' ') {
                Ok(ExportLine::Unchanged(rest.to_string()))
            } else {
                Err(DiffError::MalformedExport { line: idx + 1 })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line_diff::diff_lines;

    #[test]
    fn side_by_side_one_row_per_record() {
        let diff = diff_lines(&["a", "b"], &["a", "c"]);
        let rows = side_by_side(&diff);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].kind, DiffKind::Unchanged);
        assert_eq!(rows[1].kind, DiffKind::Modified);
        assert_eq!(
            rows[1].left,
            Some(RowCell {
                line: 2,
                content: "b".into()
            })
        );
        assert_eq!(
            rows[1].right,
            Some(RowCell {
                line: 2,
                content: "c".into()
            })
        );
    }

    #[test]
    fn side_by_side_added_leaves_left_empty() {
        let diff = diff_lines(&["a"], &["x", "a"]);
        let rows = side_by_side(&diff);

        assert_eq!(rows[0].kind, DiffKind::Added);
        assert!(rows[0].left.is_none());
        assert_eq!(
            rows[0].right,
            Some(RowCell {
                line: 1,
                content: "x".into()
            })
        );
    }

    #[test]
    fn unified_modified_emits_two_rows() {
        let diff = diff_lines(&["a", "b"], &["a", "c"]);
        let rows = unified(&diff);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].marker, ' ');
        assert_eq!(rows[1].marker, '~');
        assert_eq!(rows[1].content, "b");
        assert_eq!(rows[2].marker, '+');
        assert_eq!(rows[2].content, "c");
        assert!(rows[2].left_line.is_none());
        assert_eq!(rows[2].right_line, Some(2));
    }

    #[test]
    fn unified_markers_by_kind() {
        let diff = diff_lines(&["a", "gone"], &["a", "new", "extra"]);
        let markers: Vec<char> = unified(&diff).iter().map(|r| r.marker).collect();

        // a unchanged; gone/new pair off as modified; extra drains as added.
        assert_eq!(markers, vec![' ', '~', '+', '+']);
    }

    #[test]
    fn export_format_is_exact() {
        let diff = diff_lines(&["same", "old"], &["same", "new", "tail"]);
        let text = export_text(&diff);

        assert_eq!(text, " same\n- old\n+ new\n+ tail");
    }

    #[test]
    fn export_empty_diff_is_empty() {
        let diff = diff_lines(&[], &[]);
        assert_eq!(export_text(&diff), "");
    }

    #[test]
    fn export_blank_unchanged_line_is_single_space() {
        let diff = diff_lines(&[""], &[""]);
        assert_eq!(export_text(&diff), " ");
    }

    #[test]
    fn parse_export_roundtrip() {
        let diff = diff_lines(
            &["ctx", "removed", "changed"],
            &["ctx", "changed2", "added"],
        );
        let parsed = parse_export(&export_text(&diff)).unwrap();

        let added: Vec<&str> = parsed
            .iter()
            .filter_map(|l| match l {
                ExportLine::Added(s) => Some(s.as_str()),
                _ => None,
            })
            .collect();
        let removed: Vec<&str> = parsed
            .iter()
            .filter_map(|l| match l {
                ExportLine::Removed(s) => Some(s.as_str()),
                _ => None,
            })
            .collect();

        // Modified records read back as removed/added pairs.
        assert_eq!(removed, vec!["removed", "changed"]);
        assert_eq!(added, vec!["changed2", "added"]);
        assert!(matches!(&parsed[0], ExportLine::Unchanged(s) if s == "ctx"));
    }

    #[test]
    fn parse_export_prefix_precedence() {
        // Content beginning with "+ " or "- " hides behind the unchanged
        // space prefix.
        let parsed = parse_export(" + not added\n - not removed").unwrap();
        assert_eq!(
            parsed,
            vec![
                ExportLine::Unchanged("+ not added".into()),
                ExportLine::Unchanged("- not removed".into()),
            ]
        );
    }

    #[test]
    fn parse_export_empty_input() {
        assert_eq!(parse_export("").unwrap(), Vec::new());
    }

    #[test]
    fn parse_export_rejects_unknown_prefix() {
        let err = parse_export(" ok\nbogus").unwrap_err();
        assert!(matches!(err, DiffError::MalformedExport { line: 2 }));
    }

    #[test]
    fn parse_export_rejects_empty_line() {
        // A well-formed export never contains a fully empty line.
        let err = parse_export(" a\n\n b").unwrap_err();
        assert!(matches!(err, DiffError::MalformedExport { line: 2 }));
    }
}
