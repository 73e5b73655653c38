//! Positions and ranges in a line-addressed document.
//!
//! Both types are small `Copy` values. Nothing here mutates in place: `translate`, `union` and
//! `intersection` all return fresh values.

use std::cmp::Ordering;

/// Position coordinates (line and character)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// Zero-based logical line index.
    pub line: usize,
    /// Zero-based character (Unicode scalar value) index within the line.
    pub character: usize,
}

impl Position {
    /// Create a new position.
    pub const fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }

    /// Returns a position shifted by the given deltas, saturating at zero.
    pub fn translate(self, line_delta: isize, character_delta: isize) -> Self {
        Self {
            line: self.line.saturating_add_signed(line_delta),
            character: self.character.saturating_add_signed(character_delta),
        }
    }

    /// Returns the same line with a different character index.
    pub fn with_character(self, character: usize) -> Self {
        Self {
            line: self.line,
            character,
        }
    }

    /// Returns `true` if `self` sorts strictly before `other`.
    pub fn is_before(&self, other: &Position) -> bool {
        self < other
    }

    /// Returns `true` if `self` sorts strictly after `other`.
    pub fn is_after(&self, other: &Position) -> bool {
        self > other
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.line
            .cmp(&other.line)
            .then_with(|| self.character.cmp(&other.character))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A half-open range `[start, end)` between two positions.
///
/// `start <= end` always holds; the constructors reorder a reversed pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Range {
    start: Position,
    end: Position,
}

impl Range {
    /// Create a range from two positions in any order.
    pub fn new(a: Position, b: Position) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// Create a range from raw coordinates.
    pub fn from_coords(
        start_line: usize,
        start_character: usize,
        end_line: usize,
        end_character: usize,
    ) -> Self {
        Self::new(
            Position::new(start_line, start_character),
            Position::new(end_line, end_character),
        )
    }

    /// An empty range at `position`.
    pub fn empty(position: Position) -> Self {
        Self {
            start: position,
            end: position,
        }
    }

    /// Inclusive start.
    pub fn start(&self) -> Position {
        self.start
    }

    /// Exclusive end.
    pub fn end(&self) -> Position {
        self.end
    }

    /// Returns `true` if the range covers no characters.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if start and end are on the same line.
    pub fn is_single_line(&self) -> bool {
        self.start.line == self.end.line
    }

    /// Returns `true` if `position` lies within `[start, end]`.
    pub fn contains_position(&self, position: Position) -> bool {
        self.start <= position && position <= self.end
    }

    /// Returns `true` if `other` lies entirely within `self`.
    pub fn contains(&self, other: &Range) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// The overlap of two ranges.
    ///
    /// Ranges that merely touch (`a.end == b.start`) intersect in an empty range; disjoint
    /// ranges return `None`.
    pub fn intersection(&self, other: &Range) -> Option<Range> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (start <= end).then_some(Range { start, end })
    }

    /// Returns `true` if [`Range::intersection`] is `Some`.
    pub fn intersects(&self, other: &Range) -> bool {
        self.intersection(other).is_some()
    }

    /// The smallest range covering both.
    pub fn union(&self, other: &Range) -> Range {
        Range {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Returns a copy with a different end, reordered if necessary.
    pub fn with_end(&self, end: Position) -> Range {
        Range::new(self.start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_ordering() {
        assert!(Position::new(0, 5).is_before(&Position::new(1, 0)));
        assert!(Position::new(2, 1).is_after(&Position::new(2, 0)));
        assert_eq!(
            Position::new(3, 3).cmp(&Position::new(3, 3)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_translate_saturates() {
        assert_eq!(Position::new(1, 4).translate(0, 1), Position::new(1, 5));
        assert_eq!(Position::new(1, 0).translate(-3, -1), Position::new(0, 0));
    }

    #[test]
    fn test_range_normalizes() {
        let r = Range::from_coords(0, 16, 0, 0);
        assert_eq!(r.start(), Position::new(0, 0));
        assert_eq!(r.end(), Position::new(0, 16));
    }

    #[test]
    fn test_intersection_and_union() {
        let a = Range::from_coords(0, 0, 0, 5);
        let b = Range::from_coords(0, 3, 0, 8);
        let c = Range::from_coords(0, 6, 0, 10);

        assert_eq!(a.intersection(&b), Some(Range::from_coords(0, 3, 0, 5)));
        assert_eq!(a.intersection(&c), None);
        assert_eq!(a.union(&c), Range::from_coords(0, 0, 0, 10));

        // Touching ranges intersect in an empty range.
        let d = Range::from_coords(0, 5, 0, 7);
        assert_eq!(a.intersection(&d), Some(Range::from_coords(0, 5, 0, 5)));
    }

    #[test]
    fn test_containment() {
        let outer = Range::from_coords(0, 0, 2, 0);
        assert!(outer.contains(&Range::from_coords(1, 0, 1, 4)));
        assert!(!outer.contains(&Range::from_coords(1, 0, 2, 1)));
        assert!(outer.contains_position(Position::new(2, 0)));
        assert!(!outer.is_single_line());
    }
}
