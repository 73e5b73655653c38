//! Line-oriented deletion planning.
//!
//! Deleting a tag pair usually leaves its lines holding nothing but indentation. The planner
//! groups deletion ranges per line and promotes such lines to whole-line deletions, so the
//! result reads like a person removed the tags by hand.

use crate::document::Document;
use crate::edit::EditPlan;
use crate::position::{Position, Range};
use crate::range_set::RangeSet;
use std::collections::BTreeMap;

/// Deletions on one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDeletion {
    /// Zero-based line index.
    pub line: usize,
    /// Ascending, non-overlapping ranges confined to `line`. Ignored when `full_delete` is set.
    pub ranges: Vec<Range>,
    /// Remove the whole line, terminator included.
    pub full_delete: bool,
}

#[derive(Default)]
struct LineEntry {
    ranges: RangeSet,
    full_delete: bool,
}

/// Group `ranges` into per-line deletions, ascending by line.
///
/// - Empty ranges are skipped.
/// - A multi-line range deletes from its start to the end of the first line and from the start
///   of the last line to its end; every line in between is deleted outright.
/// - A line whose remaining text trims to nothing (or to a lone `;`) is deleted outright.
pub fn plan_line_deletions<D: Document + ?Sized>(
    document: &D,
    ranges: &[Range],
) -> Vec<LineDeletion> {
    let mut lines: BTreeMap<usize, LineEntry> = BTreeMap::new();

    for range in ranges.iter().filter(|r| !r.is_empty()) {
        let start = range.start();
        let end = range.end();
        if range.is_single_line() {
            lines.entry(start.line).or_default().ranges.insert(*range);
            continue;
        }

        let head = Range::new(start, Position::new(start.line, document.line_len(start.line)));
        let tail = Range::new(Position::new(end.line, 0), end);
        lines.entry(start.line).or_default().ranges.insert(head);
        lines.entry(end.line).or_default().ranges.insert(tail);

        for line in start.line + 1..end.line {
            lines.insert(
                line,
                LineEntry {
                    ranges: RangeSet::new(),
                    full_delete: true,
                },
            );
        }
    }

    lines
        .into_iter()
        .map(|(line, entry)| {
            let full_delete = entry.full_delete || {
                let text = document.line_text(line);
                let residue = delete_ranges_from_line(&text, entry.ranges.as_slice());
                matches!(residue.trim(), "" | ";")
            };
            LineDeletion {
                line,
                ranges: entry.ranges.into_vec(),
                full_delete,
            }
        })
        .collect()
}

/// Remove single-line `ranges` (ascending, non-overlapping) from `text` by character index.
pub fn delete_ranges_from_line(text: &str, ranges: &[Range]) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    for range in ranges.iter().rev() {
        let start = range.start().character.min(chars.len());
        let end = range.end().character.min(chars.len()).max(start);
        chars.drain(start..end);
    }
    chars.into_iter().collect()
}

/// Turn a deletion plan into edits.
///
/// A full line is removed with its terminator; the last line of the document has no terminator,
/// so the preceding one goes instead. Ranges that end up overlapping or touching are pooled into
/// one deletion.
pub fn line_deletion_edits<D: Document + ?Sized>(
    document: &D,
    deletions: &[LineDeletion],
) -> EditPlan {
    let mut pooled = RangeSet::new();
    let mut full_lines: Vec<usize> = Vec::new();

    for deletion in deletions {
        if deletion.full_delete {
            full_lines.push(deletion.line);
        } else {
            pooled.extend(deletion.ranges.iter().copied());
        }
    }
    full_lines.sort_unstable();
    full_lines.dedup();

    // Consecutive full lines are removed as one run.
    let last_line = document.line_count().saturating_sub(1);
    let mut index = 0;
    while index < full_lines.len() {
        let first = full_lines[index];
        let mut last = first;
        while index + 1 < full_lines.len() && full_lines[index + 1] == last + 1 {
            index += 1;
            last += 1;
        }
        index += 1;

        let range = if last < last_line {
            Range::from_coords(first, 0, last + 1, 0)
        } else if first > 0 {
            Range::new(
                Position::new(first - 1, document.line_len(first - 1)),
                Position::new(last, document.line_len(last)),
            )
        } else {
            Range::from_coords(0, 0, last, document.line_len(last))
        };
        pooled.insert(range);
    }

    let mut plan = EditPlan::new();
    for range in pooled.iter() {
        plan.delete(*range);
    }
    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TextDocument;

    #[test]
    fn test_semicolon_residue_promotes_line() {
        let doc = TextDocument::new("  foo(bar);");
        let plan = plan_line_deletions(&doc, &[Range::from_coords(0, 2, 0, 10)]);
        assert!(plan[0].full_delete);
    }

    #[test]
    fn test_ranges_merge_within_line() {
        let doc = TextDocument::new("abcdefgh");
        let plan = plan_line_deletions(
            &doc,
            &[
                Range::from_coords(0, 4, 0, 6),
                Range::from_coords(0, 1, 0, 3),
                Range::from_coords(0, 2, 0, 5),
            ],
        );
        assert_eq!(plan[0].ranges, vec![Range::from_coords(0, 1, 0, 6)]);
        assert!(!plan[0].full_delete);
    }

    #[test]
    fn test_delete_ranges_from_line_unicode() {
        let ranges = [Range::from_coords(0, 0, 0, 3), Range::from_coords(0, 5, 0, 9)];
        assert_eq!(delete_ranges_from_line("<b>世界</b>!", &ranges), "世界!");
    }

    #[test]
    fn test_full_line_edits() {
        let doc = TextDocument::new("<div>\n  x\n</div>");
        let deletions = vec![
            LineDeletion {
                line: 0,
                ranges: vec![],
                full_delete: true,
            },
            LineDeletion {
                line: 2,
                ranges: vec![],
                full_delete: true,
            },
        ];
        let mut doc2 = doc.clone();
        doc2.apply(&line_deletion_edits(&doc, &deletions)).unwrap();
        assert_eq!(doc2.get_text(), "  x");
    }

    #[test]
    fn test_trailing_full_lines_do_not_overlap() {
        let doc = TextDocument::new("a\n<div>\n</div>");
        let deletions = plan_line_deletions(
            &doc,
            &[Range::from_coords(1, 0, 1, 5), Range::from_coords(2, 0, 2, 6)],
        );
        let mut doc2 = doc.clone();
        doc2.apply(&line_deletion_edits(&doc, &deletions)).unwrap();
        assert_eq!(doc2.get_text(), "a");
    }

    #[test]
    fn test_only_line_is_emptied() {
        let doc = TextDocument::new("<br/>");
        let deletions = plan_line_deletions(&doc, &[Range::from_coords(0, 0, 0, 5)]);
        let mut doc2 = doc.clone();
        doc2.apply(&line_deletion_edits(&doc, &deletions)).unwrap();
        assert_eq!(doc2.get_text(), "");
    }
}
