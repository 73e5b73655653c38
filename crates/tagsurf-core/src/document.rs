//! Read-only document access.
//!
//! Every scanner in this crate talks to text through the [`Document`] trait, so hosts can plug
//! in their own buffer type. [`TextDocument`] is the bundled implementation, backed by a
//! [`ropey::Rope`] for O(log N) line and offset conversions.
//!
//! All offsets are **character offsets** (Unicode scalar values), matching
//! [`Position::character`].

use crate::edit::{EditPlan, ResolvedEdit};
use crate::error::EditError;
use crate::line_ending::LineEnding;
use crate::position::{Position, Range};
use ropey::Rope;
use std::borrow::Cow;

/// A line-addressed, read-only view of a text buffer.
///
/// Implementations must behave as an immutable snapshot for the duration of any call into this
/// crate.
pub trait Document {
    /// Number of lines. An empty document has one (empty) line.
    fn line_count(&self) -> usize;

    /// Text of `line` without its terminator. Out-of-range lines are empty.
    fn line_text(&self, line: usize) -> Cow<'_, str>;

    /// Text covered by `range`, with `'\n'` between lines.
    fn text(&self, range: Range) -> String;

    /// Character offset of `position`, clamped to the document.
    fn offset_at(&self, position: Position) -> usize;

    /// Position of a character offset, clamped to the document.
    fn position_at(&self, offset: usize) -> Position;

    /// Length of `line` in characters.
    fn line_len(&self, line: usize) -> usize {
        self.line_text(line).chars().count()
    }

    /// Character under `position`, if any.
    fn char_at(&self, position: Position) -> Option<char> {
        self.line_text(position.line).chars().nth(position.character)
    }
}

/// Rope-backed [`Document`] implementation.
#[derive(Debug, Clone)]
pub struct TextDocument {
    rope: Rope,
    line_ending: LineEnding,
}

impl TextDocument {
    /// Build a document from text. CRLF is normalized to LF.
    pub fn new(text: &str) -> Self {
        let (text, line_ending) = LineEnding::split(text);
        Self {
            rope: Rope::from_str(&text),
            line_ending,
        }
    }

    /// Get complete (LF-normalized) text.
    pub fn get_text(&self) -> String {
        self.rope.to_string()
    }

    /// Get the text converted back to the line ending it was loaded with.
    pub fn to_saved_text(&self) -> String {
        self.line_ending.restore(&self.get_text()).into_owned()
    }

    /// Line ending detected on load.
    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Get total character count
    pub fn char_count(&self) -> usize {
        self.rope.len_chars()
    }

    /// Returns `true` if `position` addresses an existing line and a character slot within it
    /// (the slot just past the last character included).
    pub fn is_valid_position(&self, position: Position) -> bool {
        position.line < self.line_count() && position.character <= self.line_len(position.line)
    }

    /// Apply every edit in `plan` as one atomic change.
    ///
    /// All edits are validated and resolved against the current text before anything is
    /// mutated; an invalid or overlapping plan leaves the document untouched.
    pub fn apply(&mut self, plan: &EditPlan) -> Result<Vec<ResolvedEdit>, EditError> {
        let resolved = plan.resolve(self)?;

        // Descending start offsets keep earlier offsets stable while mutating.
        for edit in resolved.iter().rev() {
            if edit.start < edit.end {
                self.rope.remove(edit.start..edit.end);
            }
            if !edit.text.is_empty() {
                self.rope.insert(edit.start, &edit.text);
            }
        }

        tracing::debug!(edits = resolved.len(), "applied edit plan");
        Ok(resolved)
    }

    fn line_end_char(&self, line: usize) -> usize {
        if line + 1 < self.rope.len_lines() {
            self.rope.line_to_char(line + 1) - 1 // -1 for newline
        } else {
            self.rope.len_chars()
        }
    }
}

impl Default for TextDocument {
    fn default() -> Self {
        Self::new("")
    }
}

impl Document for TextDocument {
    fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    fn line_text(&self, line: usize) -> Cow<'_, str> {
        if line >= self.rope.len_lines() {
            return Cow::Borrowed("");
        }
        let start = self.rope.line_to_char(line);
        let end = self.line_end_char(line);
        self.rope.slice(start..end).into()
    }

    fn text(&self, range: Range) -> String {
        let start = self.offset_at(range.start());
        let end = self.offset_at(range.end());
        self.rope.slice(start..end).to_string()
    }

    fn offset_at(&self, position: Position) -> usize {
        if position.line >= self.rope.len_lines() {
            return self.rope.len_chars();
        }

        let line_start_char = self.rope.line_to_char(position.line);
        let line_len = self.line_end_char(position.line) - line_start_char;
        line_start_char + position.character.min(line_len)
    }

    fn position_at(&self, offset: usize) -> Position {
        let offset = offset.min(self.rope.len_chars());
        let line = self.rope.char_to_line(offset);
        Position::new(line, offset - self.rope.line_to_char(line))
    }

    fn line_len(&self, line: usize) -> usize {
        if line >= self.rope.len_lines() {
            return 0;
        }
        self.line_end_char(line) - self.rope.line_to_char(line)
    }
}

/// Characters of one line, collected for index-based scanning.
pub(crate) fn line_chars<D: Document + ?Sized>(document: &D, line: usize) -> Vec<char> {
    document.line_text(line).chars().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_has_one_line() {
        let doc = TextDocument::default();
        assert_eq!(doc.line_count(), 1);
        assert_eq!(doc.line_text(0), "");
        assert_eq!(doc.char_count(), 0);
    }

    #[test]
    fn test_line_text_excludes_newline() {
        let doc = TextDocument::new("Line 1\nLine 2\nLine 3");
        assert_eq!(doc.line_count(), 3);
        assert_eq!(doc.line_text(1), "Line 2");
        assert_eq!(doc.line_text(7), "");
        assert_eq!(doc.line_len(2), 6);
    }

    #[test]
    fn test_offset_position_conversion() {
        let doc = TextDocument::new("ABC\nDEF\nGHI");

        assert_eq!(doc.offset_at(Position::new(0, 2)), 2);
        assert_eq!(doc.offset_at(Position::new(1, 0)), 4);
        assert_eq!(doc.offset_at(Position::new(1, 99)), 7);
        assert_eq!(doc.position_at(8), Position::new(2, 0));
        assert_eq!(doc.position_at(3), Position::new(0, 3));
        assert_eq!(doc.position_at(500), Position::new(2, 3));
    }

    #[test]
    fn test_text_of_range() {
        let doc = TextDocument::new("<div>\n  <p>x</p>\n</div>");
        assert_eq!(doc.text(Range::from_coords(0, 0, 1, 5)), "<div>\n  <p>");
    }

    #[test]
    fn test_utf8_cjk() {
        let doc = TextDocument::new("你好\n<b>世界</b>");
        assert_eq!(doc.line_len(0), 2);
        assert_eq!(doc.char_at(Position::new(1, 3)), Some('世'));
        assert_eq!(doc.offset_at(Position::new(1, 0)), 3);
    }

    #[test]
    fn test_crlf_is_normalized() {
        let doc = TextDocument::new("a\r\nb");
        assert_eq!(doc.line_text(0), "a");
        assert_eq!(doc.get_text(), "a\nb");
        assert_eq!(doc.to_saved_text(), "a\r\nb");
    }
}
