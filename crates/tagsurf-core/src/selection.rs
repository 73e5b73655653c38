//! Selections and their classification.

use crate::document::Document;
use crate::position::{Position, Range};

/// Selection direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionDirection {
    /// Anchor before (or at) the active end.
    Forward,
    /// Active end before the anchor.
    Backward,
}

/// A selection: the anchor stays put, the active end is where the caret is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Fixed end.
    pub anchor: Position,
    /// Caret end.
    pub active: Position,
}

impl Selection {
    /// Create a selection.
    pub fn new(anchor: Position, active: Position) -> Self {
        Self { anchor, active }
    }

    /// An empty selection at `position`.
    pub fn caret(position: Position) -> Self {
        Self::new(position, position)
    }

    /// The covered range, normalized.
    pub fn range(&self) -> Range {
        Range::new(self.anchor, self.active)
    }

    /// Returns `true` if anchor and active end coincide.
    pub fn is_empty(&self) -> bool {
        self.anchor == self.active
    }

    /// Direction of the selection.
    pub fn direction(&self) -> SelectionDirection {
        if self.anchor <= self.active {
            SelectionDirection::Forward
        } else {
            SelectionDirection::Backward
        }
    }

    /// Returns `true` if the caret sits before the anchor.
    pub fn is_reversed(&self) -> bool {
        self.direction() == SelectionDirection::Backward
    }

    /// Move the active end. An empty selection moves as a whole.
    pub fn moved_to(&self, position: Position) -> Self {
        if self.is_empty() {
            Self::caret(position)
        } else {
            Self::new(self.anchor, position)
        }
    }
}

/// Shape of a selected range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionKind {
    /// Nothing selected.
    None,
    /// Part of one line.
    Inline,
    /// One complete line.
    FullLine,
    /// Several complete lines.
    MultiFullLine,
    /// Several lines, starting or ending mid-line.
    MultiInline,
}

impl SelectionKind {
    /// Classify `range` against `document`.
    ///
    /// A range is "full" when it starts at column 0 and ends at the end of its last line.
    pub fn classify<D: Document + ?Sized>(range: Range, document: &D) -> Self {
        if range.is_empty() {
            return Self::None;
        }

        let start = range.start();
        let end = range.end();
        let full = start.character == 0 && end.character == document.line_len(end.line);
        match (range.is_single_line(), full) {
            (true, true) => Self::FullLine,
            (true, false) => Self::Inline,
            (false, true) => Self::MultiFullLine,
            (false, false) => Self::MultiInline,
        }
    }

    /// Returns `true` for the whole-line kinds.
    pub fn is_block(self) -> bool {
        matches!(self, Self::FullLine | Self::MultiFullLine)
    }

    /// Returns `true` for the kinds spanning several lines.
    pub fn is_multi_line(self) -> bool {
        matches!(self, Self::MultiFullLine | Self::MultiInline)
    }
}

/// Pull a multi-line range ending at column 0 back to the end of the previous line.
///
/// Dragging a selection over whole lines with the mouse leaves the caret at the start of the
/// next line.
pub fn trim_trailing_line_start<D: Document + ?Sized>(range: Range, document: &D) -> Range {
    let end = range.end();
    if range.is_single_line() || end.character != 0 {
        return range;
    }
    let previous = end.line - 1;
    range.with_end(Position::new(previous, document.line_len(previous)))
}

/// Sort selections by position and merge those that overlap.
///
/// Selections that merely touch are kept apart; exact duplicates are dropped.
pub fn normalize_selections(mut selections: Vec<Selection>) -> Vec<Selection> {
    selections.sort_by(|a, b| {
        let (a, b) = (a.range(), b.range());
        a.start().cmp(&b.start()).then_with(|| a.end().cmp(&b.end()))
    });

    let mut merged: Vec<Selection> = Vec::with_capacity(selections.len());
    for selection in selections {
        let Some(last) = merged.last_mut() else {
            merged.push(selection);
            continue;
        };

        let (last_range, range) = (last.range(), selection.range());
        if range.start() < last_range.end() {
            let union = last_range.union(&range);
            *last = Selection::new(union.start(), union.end());
        } else if range != last_range {
            merged.push(selection);
        }
    }
    merged
}
