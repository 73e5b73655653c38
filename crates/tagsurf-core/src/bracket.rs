//! Bracket matching.
//!
//! A bracket is matched by walking away from it one character at a time while counting nesting.
//! The forward walk skips over quoted literals; the backward walk does not, since a closing quote
//! cannot be told apart from an opening one when reading right to left.

use crate::document::{Document, line_chars};
use crate::position::{Position, Range};

/// The four bracket pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bracket {
    /// `(` `)`
    Paren,
    /// `[` `]`
    Square,
    /// `{` `}`
    Curly,
    /// `<` `>`
    Angle,
}

impl Bracket {
    /// Opening character.
    pub fn open(self) -> char {
        match self {
            Self::Paren => '(',
            Self::Square => '[',
            Self::Curly => '{',
            Self::Angle => '<',
        }
    }

    /// Closing character.
    pub fn close(self) -> char {
        match self {
            Self::Paren => ')',
            Self::Square => ']',
            Self::Curly => '}',
            Self::Angle => '>',
        }
    }
}

/// Which side of a pair a bracket character is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketKind {
    /// `( [ { <`
    Opening,
    /// `) ] } >`
    Closing,
}

/// A bracket character found in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BracketLoc {
    /// Bracket pair.
    pub bracket: Bracket,
    /// Position of the character.
    pub position: Position,
    /// Side of the pair.
    pub kind: BracketKind,
}

impl BracketLoc {
    /// The character at `position`.
    pub fn character(&self) -> char {
        match self.kind {
            BracketKind::Opening => self.bracket.open(),
            BracketKind::Closing => self.bracket.close(),
        }
    }

    /// The character this bracket pairs with.
    pub fn partner_character(&self) -> char {
        match self.kind {
            BracketKind::Opening => self.bracket.close(),
            BracketKind::Closing => self.bracket.open(),
        }
    }
}

/// Classify `character` found at `position`.
pub fn classify(character: char, position: Position) -> Option<BracketLoc> {
    let (bracket, kind) = match character {
        '(' => (Bracket::Paren, BracketKind::Opening),
        '[' => (Bracket::Square, BracketKind::Opening),
        '{' => (Bracket::Curly, BracketKind::Opening),
        '<' => (Bracket::Angle, BracketKind::Opening),
        ')' => (Bracket::Paren, BracketKind::Closing),
        ']' => (Bracket::Square, BracketKind::Closing),
        '}' => (Bracket::Curly, BracketKind::Closing),
        '>' => (Bracket::Angle, BracketKind::Closing),
        _ => return None,
    };
    Some(BracketLoc {
        bracket,
        position,
        kind,
    })
}

fn is_quote(ch: char) -> bool {
    matches!(ch, '"' | '\'' | '`')
}

/// Find the partner of `loc`, scanning the rest of the document.
pub fn find_partner<D: Document + ?Sized>(document: &D, loc: BracketLoc) -> Option<Position> {
    let found = match loc.kind {
        BracketKind::Opening => scan_forward(document, loc),
        BracketKind::Closing => scan_backward(document, loc),
    };
    if found.is_none() {
        tracing::debug!(bracket = %loc.character(), position = ?loc.position, "no matching bracket");
    }
    found
}

fn scan_forward<D: Document + ?Sized>(document: &D, loc: BracketLoc) -> Option<Position> {
    let own = loc.character();
    let partner = loc.partner_character();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;

    for line in loc.position.line..document.line_count() {
        let chars = line_chars(document, line);
        let mut i = if line == loc.position.line {
            loc.position.character + 1
        } else {
            0
        };

        while i < chars.len() {
            let ch = chars[i];
            if let Some(open_quote) = quote {
                if ch == '\\' {
                    i += 2;
                    continue;
                }
                if ch == open_quote {
                    quote = None;
                }
            } else if is_quote(ch) && (i == 0 || chars[i - 1] != '\\') {
                quote = Some(ch);
            } else if ch == own {
                depth += 1;
            } else if ch == partner {
                if depth == 0 {
                    return Some(Position::new(line, i));
                }
                depth -= 1;
            }
            i += 1;
        }
    }
    None
}

fn scan_backward<D: Document + ?Sized>(document: &D, loc: BracketLoc) -> Option<Position> {
    let own = loc.character();
    let partner = loc.partner_character();
    let mut depth = 0usize;

    for line in (0..=loc.position.line).rev() {
        let chars = line_chars(document, line);
        let end = if line == loc.position.line {
            loc.position.character.min(chars.len())
        } else {
            chars.len()
        };

        for i in (0..end).rev() {
            let ch = chars[i];
            if ch == own {
                depth += 1;
            } else if ch == partner {
                if depth == 0 {
                    return Some(Position::new(line, i));
                }
                depth -= 1;
            }
        }
    }
    None
}

/// Every bracket character inside `range`, in document order.
pub fn find_all_in_range<D: Document + ?Sized>(document: &D, range: Range) -> Vec<BracketLoc> {
    let base = document.offset_at(range.start());
    document
        .text(range)
        .chars()
        .enumerate()
        .filter_map(|(i, ch)| classify(ch, document.position_at(base + i)))
        .collect()
}
