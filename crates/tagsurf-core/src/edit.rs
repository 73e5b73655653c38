//! Edit plans.
//!
//! The scanning core never mutates text. Commands describe what should change as an
//! [`EditPlan`]: an unordered batch of `delete` / `insert` / `replace` operations expressed in
//! positions of the *pre-edit* document. A plan is applied as a single atomic change by
//! [`crate::TextDocument::apply`] (or by a host editor's own edit builder).

use crate::document::Document;
use crate::error::EditError;
use crate::position::{Position, Range};

/// A single text edit in pre-edit coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    /// Range to replace (empty for a pure insertion).
    pub range: Range,
    /// Replacement text (empty for a pure deletion).
    pub new_text: String,
}

impl TextEdit {
    /// Returns `true` if the edit changes nothing.
    pub fn is_noop(&self) -> bool {
        self.range.is_empty() && self.new_text.is_empty()
    }
}

/// A [`TextEdit`] resolved to character offsets.
///
/// Semantics:
/// - `start..end` is a half-open character range in the document **before** the plan is
///   applied.
/// - Resolved edits are sorted by `start` and never overlap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEdit {
    /// Inclusive start character offset.
    pub start: usize,
    /// Exclusive end character offset.
    pub end: usize,
    /// Inserted text.
    pub text: String,
}

impl ResolvedEdit {
    /// Length of the inserted text in characters.
    pub fn inserted_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Net change in document length caused by this edit.
    pub fn delta(&self) -> isize {
        self.inserted_len() as isize - (self.end - self.start) as isize
    }
}

/// A batch of edits applied as one atomic change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditPlan {
    edits: Vec<TextEdit>,
}

impl EditPlan {
    /// Create an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Delete the text in `range`.
    pub fn delete(&mut self, range: Range) {
        self.push(TextEdit {
            range,
            new_text: String::new(),
        });
    }

    /// Insert `text` at `position`.
    pub fn insert(&mut self, position: Position, text: impl Into<String>) {
        self.push(TextEdit {
            range: Range::empty(position),
            new_text: text.into(),
        });
    }

    /// Replace the text in `range` with `text`.
    pub fn replace(&mut self, range: Range, text: impl Into<String>) {
        self.push(TextEdit {
            range,
            new_text: text.into(),
        });
    }

    /// Append every edit of `other`.
    pub fn extend(&mut self, other: EditPlan) {
        self.edits.extend(other.edits);
    }

    /// Edits in insertion order.
    pub fn edits(&self) -> &[TextEdit] {
        &self.edits
    }

    /// Returns `true` if the plan changes nothing.
    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Number of edits.
    pub fn len(&self) -> usize {
        self.edits.len()
    }

    fn push(&mut self, edit: TextEdit) {
        if !edit.is_noop() {
            self.edits.push(edit);
        }
    }

    /// Resolve the plan against `document`: validate positions, convert to character offsets,
    /// sort, and reject overlaps.
    ///
    /// Two insertions at the same offset are allowed and keep their plan order. An insertion
    /// exactly at the boundary of a deletion is allowed as well.
    pub fn resolve<D: Document + ?Sized>(
        &self,
        document: &D,
    ) -> Result<Vec<ResolvedEdit>, EditError> {
        let mut resolved: Vec<(Range, ResolvedEdit)> = Vec::with_capacity(self.edits.len());
        for edit in &self.edits {
            for position in [edit.range.start(), edit.range.end()] {
                if position.line >= document.line_count()
                    || position.character > document.line_len(position.line)
                {
                    return Err(EditError::out_of_bounds(position));
                }
            }
            resolved.push((
                edit.range,
                ResolvedEdit {
                    start: document.offset_at(edit.range.start()),
                    end: document.offset_at(edit.range.end()),
                    text: edit.new_text.clone(),
                },
            ));
        }

        // Insertions sort before a deletion starting at the same offset; the sort is stable so
        // same-offset insertions keep plan order.
        resolved.sort_by_key(|(_, edit)| (edit.start, edit.end));

        for pair in resolved.windows(2) {
            let (first_range, first) = &pair[0];
            let (second_range, second) = &pair[1];
            if second.start < first.end {
                return Err(EditError::OverlappingEdits {
                    first: *first_range,
                    second: *second_range,
                });
            }
        }

        Ok(resolved.into_iter().map(|(_, edit)| edit).collect())
    }
}

/// Which side of an insertion a mapped offset sticks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bias {
    /// Stay in front of text inserted exactly at the offset.
    Left,
    /// Move past text inserted exactly at the offset.
    Right,
}

/// Map a pre-edit character offset through resolved edits to its post-edit offset.
///
/// Offsets inside a replaced span collapse to the start of the replacement.
pub fn map_offset(edits: &[ResolvedEdit], offset: usize, bias: Bias) -> usize {
    let mut shift: isize = 0;
    for edit in edits {
        let after = match bias {
            Bias::Left => edit.start >= offset,
            Bias::Right => edit.start > offset,
        };
        if after {
            break;
        }
        if offset < edit.end {
            return edit.start.saturating_add_signed(shift);
        }
        shift += edit.delta();
    }
    offset.saturating_add_signed(shift)
}
