//! Markup tag scanning.
//!
//! Tags are found lexically, by walking characters around a position and counting `<` / `>`
//! nesting. No syntax tree is built and nothing is cached: every query reads the document
//! again, bounded by the line windows in [`ScanLimits`].
//!
//! # Queries
//!
//! | Method | Answers |
//! |---|---|
//! | [`TagScanner::find_enclosing`] | Which tag is the cursor on? |
//! | [`TagScanner::find_partner`] | Where is the other half of this tag? |
//! | [`TagScanner::surrounding_tag`] | Which element is the cursor inside? |
//! | [`TagScanner::tags_in_range`] | Which tags lie completely inside a range? |
//! | [`TagScanner::class_name_position`] | Where should the caret go to edit the class list? |

use crate::config::ScanLimits;
use crate::document::{Document, line_chars};
use crate::position::{Position, Range};
use regex::Regex;
use std::sync::LazyLock;

static TAG_HEAD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^<\s*(/)?\s*([A-Za-z][\w:.\-]*)").expect("valid tag head regex")
});

/// Tag kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    /// `<name ...>`
    Opening,
    /// `</name>`
    Closing,
    /// `<name ... />`
    SelfClosing,
}

/// A tag found in a document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag {
    /// Tag name. Empty for fragments (`<>` / `</>`).
    pub name: String,
    /// Tag kind.
    pub kind: TagKind,
    /// From `<` up to one past `>`.
    pub range: Range,
}

impl Tag {
    /// Create a tag.
    pub fn new(name: impl Into<String>, kind: TagKind, range: Range) -> Self {
        Self {
            name: name.into(),
            kind,
            range,
        }
    }

    /// Returns `true` for `<name ... />`.
    pub fn is_self_closing(&self) -> bool {
        self.kind == TagKind::SelfClosing
    }
}

/// Parse the full text of a tag span (`<` through `>`).
///
/// Returns `None` for spans that are not tags, such as comments and doctype declarations.
pub fn parse_tag(text: &str, range: Range) -> Option<Tag> {
    match text {
        "<>" => return Some(Tag::new("", TagKind::Opening, range)),
        "</>" => return Some(Tag::new("", TagKind::Closing, range)),
        _ => {}
    }

    let captures = TAG_HEAD.captures(text)?;
    let name = captures.get(2)?.as_str();
    let kind = if captures.get(1).is_some() {
        TagKind::Closing
    } else if text.trim_end().ends_with("/>") {
        TagKind::SelfClosing
    } else {
        TagKind::Opening
    };
    Some(Tag::new(name, kind, range))
}

fn is_name_char(ch: char) -> bool {
    ch.is_alphanumeric() || matches!(ch, '-' | '_' | ':' | '.')
}

/// A tag head read after `<` while scanning forward.
#[derive(Debug)]
struct PendingTag {
    start: Position,
    closing: bool,
    name: String,
}

/// Finds and pairs tags.
#[derive(Debug, Clone, Copy, Default)]
pub struct TagScanner {
    limits: ScanLimits,
}

impl TagScanner {
    /// Scanner with the default windows.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scanner with custom windows.
    pub fn with_limits(limits: ScanLimits) -> Self {
        Self { limits }
    }

    /// Current windows.
    pub fn limits(&self) -> ScanLimits {
        self.limits
    }

    /// The tag under `position`.
    ///
    /// A cursor directly after a tag's `>` still counts as touching that tag, so character 5 of
    /// `<div>Hello</div>` yields the opening `div`.
    pub fn find_enclosing<D: Document + ?Sized>(
        &self,
        document: &D,
        position: Position,
    ) -> Option<Tag> {
        if let Some(tag) = self.enclosing_at(document, position) {
            return Some(tag);
        }

        if position.character > 0 {
            let previous = position.translate(0, -1);
            if document.char_at(previous) == Some('>') {
                return self.enclosing_at(document, previous);
            }
        }
        None
    }

    fn enclosing_at<D: Document + ?Sized>(&self, document: &D, position: Position) -> Option<Tag> {
        let start = self.find_open_angle(document, position)?;
        let end = self.find_close_angle(document, start)?;
        if end < position {
            return None;
        }

        let range = Range::new(start, end.translate(0, 1));
        parse_tag(&document.text(range), range)
    }

    /// Backward from `position` (inclusive) to the nearest unmatched `<`.
    fn find_open_angle<D: Document + ?Sized>(
        &self,
        document: &D,
        position: Position,
    ) -> Option<Position> {
        let first_line = position.line.saturating_sub(self.limits.enclosing_lines);
        let mut depth = 0usize;

        for line in (first_line..=position.line).rev() {
            let chars = line_chars(document, line);
            let end = if line == position.line {
                (position.character + 1).min(chars.len())
            } else {
                chars.len()
            };

            for i in (0..end).rev() {
                match chars[i] {
                    '>' if !(line == position.line && i == position.character) => depth += 1,
                    '<' if depth == 0 => return Some(Position::new(line, i)),
                    '<' => depth -= 1,
                    _ => {}
                }
            }
        }

        tracing::trace!(?position, "no unmatched '<' within the enclosing window");
        None
    }

    /// Forward from the `<` at `start` to its balancing `>`.
    fn find_close_angle<D: Document + ?Sized>(
        &self,
        document: &D,
        start: Position,
    ) -> Option<Position> {
        let last_line = start
            .line
            .saturating_add(self.limits.enclosing_lines)
            .min(document.line_count());
        let mut depth = 0usize;

        for line in start.line..last_line {
            let chars = line_chars(document, line);
            let begin = if line == start.line {
                start.character + 1
            } else {
                0
            };

            for (i, &ch) in chars.iter().enumerate().skip(begin) {
                match ch {
                    '<' => depth += 1,
                    '>' if depth == 0 => return Some(Position::new(line, i)),
                    '>' => depth -= 1,
                    _ => {}
                }
            }
        }

        tracing::trace!(?start, "no balancing '>' within the enclosing window");
        None
    }

    /// The other half of `tag`. Self-closing tags have none.
    ///
    /// The scan is purely lexical: same-name tags inside comments take part in the nesting
    /// count.
    pub fn find_partner<D: Document + ?Sized>(&self, document: &D, tag: &Tag) -> Option<Tag> {
        let partner = match tag.kind {
            TagKind::Opening => self.find_closing(document, tag),
            TagKind::Closing => self.find_opening(document, tag),
            TagKind::SelfClosing => return None,
        };
        if partner.is_none() {
            tracing::debug!(name = %tag.name, range = ?tag.range, "no matching tag");
        }
        partner
    }

    fn find_closing<D: Document + ?Sized>(&self, document: &D, tag: &Tag) -> Option<Tag> {
        let from = tag.range.end();
        let last_line = from
            .line
            .saturating_add(self.limits.paired_lines)
            .min(document.line_count());

        let mut depth = 0usize;
        let mut reading: Option<PendingTag> = None;
        let mut pending: Option<PendingTag> = None;
        let mut last_significant: Option<char> = None;

        for line in from.line..last_line {
            let chars = line_chars(document, line);
            let begin = if line == from.line { from.character } else { 0 };

            for (i, &ch) in chars.iter().enumerate().skip(begin) {
                if let Some(mut head) = reading.take() {
                    if ch == '/' && head.name.is_empty() && !head.closing {
                        head.closing = true;
                        reading = Some(head);
                        continue;
                    }
                    if is_name_char(ch) {
                        head.name.push(ch);
                        reading = Some(head);
                        continue;
                    }

                    let terminated = ch.is_whitespace() || ch == '>' || ch == '/';
                    if terminated && (!head.name.is_empty() || ch == '>') {
                        pending = Some(head);
                    }
                }

                match ch {
                    '<' => {
                        pending = None;
                        reading = Some(PendingTag {
                            start: Position::new(line, i),
                            closing: false,
                            name: String::new(),
                        });
                    }
                    '>' => {
                        if let Some(head) = pending.take().filter(|h| h.name == tag.name) {
                            if head.closing {
                                if depth == 0 {
                                    let range = Range::new(head.start, Position::new(line, i + 1));
                                    return Some(Tag::new(head.name, TagKind::Closing, range));
                                }
                                depth -= 1;
                            } else if last_significant != Some('/') {
                                depth += 1;
                            }
                        }
                    }
                    _ => {}
                }

                if !ch.is_whitespace() {
                    last_significant = Some(ch);
                }
            }

            // End of line ends a name.
            if let Some(head) = reading.take().filter(|h| !h.name.is_empty()) {
                pending = Some(head);
            }
        }

        tracing::trace!(name = %tag.name, "closing tag search reached the end of its window");
        None
    }

    fn find_opening<D: Document + ?Sized>(&self, document: &D, tag: &Tag) -> Option<Tag> {
        let from = tag.range.start();
        let first_line = from.line.saturating_sub(self.limits.paired_lines);

        let mut depth = 0usize;
        // Most recent `>` seen, and whether it closes a self-closing tag.
        let mut last_close: Option<(Position, bool)> = None;

        for line in (first_line..=from.line).rev() {
            let chars = line_chars(document, line);
            let end = if line == from.line {
                from.character.min(chars.len())
            } else {
                chars.len()
            };

            for i in (0..end).rev() {
                match chars[i] {
                    '>' => {
                        let self_closing = chars[..i]
                            .iter()
                            .rev()
                            .find(|c| !c.is_whitespace())
                            .is_some_and(|&c| c == '/');
                        last_close = Some((Position::new(line, i), self_closing));
                    }
                    '<' => {
                        let Some((closing, name)) = read_tag_head(&chars[i + 1..]) else {
                            continue;
                        };
                        let close = last_close.take();
                        if name != tag.name {
                            continue;
                        }

                        if closing {
                            depth += 1;
                            continue;
                        }
                        let Some((close_pos, self_closing)) = close else {
                            continue;
                        };
                        if self_closing {
                            continue;
                        }
                        if depth == 0 {
                            let range = Range::new(Position::new(line, i), close_pos.translate(0, 1));
                            return Some(Tag::new(name, TagKind::Opening, range));
                        }
                        depth -= 1;
                    }
                    _ => {}
                }
            }
        }

        tracing::trace!(name = %tag.name, "opening tag search reached the end of its window");
        None
    }

    /// The innermost element whose tags surround `position`.
    ///
    /// A cursor on a tag yields that tag. Otherwise the nearest unclosed opening tag before the
    /// cursor is returned, skipping self-closing tags and anything inside `<!-- -->`.
    pub fn surrounding_tag<D: Document + ?Sized>(
        &self,
        document: &D,
        position: Position,
    ) -> Option<Tag> {
        if let Some(tag) = self.find_enclosing(document, position) {
            if position < tag.range.end() {
                return Some(tag);
            }
        }

        let first_line = position.line.saturating_sub(self.limits.surrounding_lines);
        let mut depth = 1usize;
        let mut in_comment = false;

        for line in (first_line..=position.line).rev() {
            let chars = line_chars(document, line);
            let end = if line == position.line {
                position.character.min(chars.len())
            } else {
                chars.len()
            };

            for i in (0..end).rev() {
                let next = chars.get(i + 1).copied();
                match chars[i] {
                    '<' if in_comment => {
                        if chars[i + 1..].starts_with(&['!', '-', '-']) {
                            in_comment = false;
                        }
                    }
                    _ if in_comment => {}
                    '>' if i >= 2 && chars[i - 2..i] == ['-', '-'] => in_comment = true,
                    // `/>` ends a self-closing tag, but `</>` closes a fragment.
                    '>' if i >= 1 && chars[i - 1] == '/' && !(i >= 2 && chars[i - 2] == '<') => {
                        depth += 1
                    }
                    '<' if next == Some('/') => depth += 1,
                    '<' if next.is_some_and(|c| c.is_ascii_alphabetic() || c == '>') => {
                        depth -= 1;
                        if depth == 0 {
                            return self.find_enclosing(document, Position::new(line, i));
                        }
                    }
                    _ => {}
                }
            }
        }

        tracing::debug!(?position, "no surrounding tag");
        None
    }

    /// Every tag lying completely inside `range`, in document order.
    ///
    /// A `<...>` span that is not a tag (a comment, say) is skipped without skipping what is
    /// inside it.
    pub fn tags_in_range<D: Document + ?Sized>(&self, document: &D, range: Range) -> Vec<Tag> {
        let base = document.offset_at(range.start());
        let chars: Vec<char> = document.text(range).chars().collect();
        let closes = match_angles(&chars);
        let mut tags = Vec::new();

        let mut i = 0;
        while i < chars.len() {
            let Some(end) = closes[i] else {
                i += 1;
                continue;
            };

            let span: String = chars[i..=end].iter().collect();
            let tag_range = Range::new(
                document.position_at(base + i),
                document.position_at(base + end + 1),
            );
            match parse_tag(&span, tag_range) {
                Some(tag) => {
                    tags.push(tag);
                    i = end + 1;
                }
                None => i += 1,
            }
        }
        tags
    }
}

/// For each `<`, the index of the `>` that balances it. `None` everywhere else.
fn match_angles(chars: &[char]) -> Vec<Option<usize>> {
    let mut closes = vec![None; chars.len()];
    let mut open = Vec::new();
    for (j, &ch) in chars.iter().enumerate() {
        match ch {
            '<' => open.push(j),
            '>' => {
                if let Some(i) = open.pop() {
                    closes[i] = Some(j);
                }
            }
            _ => {}
        }
    }
    closes
}

/// Read `[/]name` right after a `<`. The name must end at whitespace, `>`, `/` or end of line.
fn read_tag_head(rest: &[char]) -> Option<(bool, String)> {
    let closing = rest.first() == Some(&'/');
    let rest = if closing { &rest[1..] } else { rest };

    let name: String = rest.iter().take_while(|c| is_name_char(**c)).collect();
    let terminator = rest.get(name.chars().count()).copied();
    let valid = match terminator {
        None => !name.is_empty(),
        Some('>') => true,
        Some(c) => !name.is_empty() && (c.is_whitespace() || c == '/'),
    };
    valid.then_some((closing, name))
}
