//! Class attribute location.

use crate::document::{Document, line_chars};
use crate::position::Position;
use crate::tag::{Tag, TagKind, TagScanner};
use regex::Regex;
use std::sync::LazyLock;

static CLASS_ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|\s)(?:class|className)\s*=\s*").expect("valid class attribute regex")
});

/// What a [`ClassNamePosition`] points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassNameKind {
    /// Right after the tag name; the tag has no class attribute yet.
    EndOfName,
    /// The end of an existing class list, ready for typing another class.
    EndOfClassList,
}

/// Caret target for editing a tag's classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassNamePosition {
    /// Target position.
    pub position: Position,
    /// What `position` points at.
    pub kind: ClassNameKind,
}

impl TagScanner {
    /// Where the class list of `tag` ends, or where a class attribute should be inserted.
    ///
    /// - `class="a b"` / `className='a b'`: the closing quote.
    /// - `className={cn("a", b)}`: before the helper call's final `)`, or before the quote right
    ///   in front of it.
    /// - no class attribute: right after the tag name.
    pub fn class_name_position<D: Document + ?Sized>(
        &self,
        document: &D,
        tag: &Tag,
    ) -> ClassNamePosition {
        let start = tag.range.start();
        let end = tag.range.end();

        for line in start.line..=end.line {
            let chars = line_chars(document, line);
            let from = if line == start.line { start.character } else { 0 };
            let to = if line == end.line {
                end.character.min(chars.len())
            } else {
                chars.len()
            };
            if from >= to {
                continue;
            }

            let segment: String = chars[from..to].iter().collect();
            let Some(found) = CLASS_ATTRIBUTE.find(&segment) else {
                continue;
            };
            let value_start = from + segment[..found.end()].chars().count();
            if let Some(character) = class_list_end(&chars[..to], value_start) {
                return ClassNamePosition {
                    position: Position::new(line, character),
                    kind: ClassNameKind::EndOfClassList,
                };
            }
        }

        let name_offset = 1 + usize::from(tag.kind == TagKind::Closing) + tag.name.chars().count();
        ClassNamePosition {
            position: start.translate(0, name_offset as isize),
            kind: ClassNameKind::EndOfName,
        }
    }
}

/// End of the attribute value starting at `value_start`.
fn class_list_end(chars: &[char], value_start: usize) -> Option<usize> {
    match *chars.get(value_start)? {
        quote @ ('"' | '\'') => chars[value_start + 1..]
            .iter()
            .position(|&c| c == quote)
            .map(|i| value_start + 1 + i),
        '{' => {
            let close = matching_brace(chars, value_start)?;
            let before = last_non_whitespace(chars, value_start + 1, close);
            match before {
                Some(paren) if chars[paren] == ')' => Some(
                    last_non_whitespace(chars, value_start + 1, paren)
                        .filter(|&q| matches!(chars[q], '"' | '\'' | '`'))
                        .unwrap_or(paren),
                ),
                Some(quote) if matches!(chars[quote], '"' | '\'' | '`') => Some(quote),
                _ => Some(close),
            }
        }
        _ => {
            let len = chars[value_start..]
                .iter()
                .take_while(|&&c| !c.is_whitespace() && !matches!(c, '>' | '/'))
                .count();
            Some(value_start + len)
        }
    }
}

fn matching_brace(chars: &[char], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, &ch) in chars.iter().enumerate().skip(open + 1) {
        match ch {
            '{' => depth += 1,
            '}' if depth == 0 => return Some(i),
            '}' => depth -= 1,
            _ => {}
        }
    }
    None
}

/// Index of the last non-whitespace character in `chars[from..to]`.
fn last_non_whitespace(chars: &[char], from: usize, to: usize) -> Option<usize> {
    (from..to).rev().find(|&i| !chars[i].is_whitespace())
}
