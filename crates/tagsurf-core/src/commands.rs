//! Command Interface Layer
//!
//! Wraps the scanners and planners in a unified command pattern, so a frontend only has to
//! forward the current selections and apply what comes back.
//!
//! # Overview
//!
//! [`CommandExecutor`] owns a [`TextDocument`], the current selections, a [`TagConfig`] and the
//! document's [`MarkupDialect`]. Every command reads the document once, computes its whole
//! change as a single [`EditPlan`], applies it atomically, and maps the carets through it.
//!
//! # Example
//!
//! ```rust
//! use tagsurf_core::{Command, CommandExecutor, Position, Selection};
//! use tagsurf_lang::MarkupDialect;
//!
//! let mut executor = CommandExecutor::new("<div>Hello</div>", MarkupDialect::Html);
//! executor.set_selections(vec![Selection::caret(Position::new(0, 7))]);
//!
//! executor.execute(Command::DeleteSurroundingTagPair).unwrap();
//! assert_eq!(executor.document().get_text(), "Hello");
//! ```

use crate::bracket;
use crate::class_name::ClassNameKind;
use crate::config::TagConfig;
use crate::deletion::{line_deletion_edits, plan_line_deletions};
use crate::document::{Document, TextDocument};
use crate::edit::{Bias, EditPlan, ResolvedEdit, map_offset};
use crate::error::CommandError;
use crate::position::{Position, Range};
use crate::range_set::RangeSet;
use crate::selection::{Selection, SelectionKind, normalize_selections, trim_trailing_line_start};
use crate::tag::{TagKind, TagScanner};
use crate::wrap::{leading_indentation, wrap_content};
use std::collections::BTreeSet;
use std::fmt;
use tagsurf_lang::MarkupDialect;

/// Unified command enum
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Jump from a bracket or tag to its partner.
    JumpToMatchingPair,
    /// Wrap every selection in a tag.
    SurroundWithTag {
        /// Tag to use instead of the configured defaults.
        tag_name: Option<String>,
    },
    /// Insert `<name />` at every caret.
    InsertSelfClosingTag,
    /// Remove the tag pair around the primary caret.
    DeleteSurroundingTagPair,
    /// Delete the selections together with the partners of every tag and bracket inside them.
    DeleteSelectionWithPairs,
    /// Put the caret where the class list of the surrounding tag can be edited.
    FocusClassName,
}

/// Why a command found nothing to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFound {
    /// No tag surrounds the caret.
    SurroundingTag,
    /// The tag or bracket has no partner.
    MatchingPair,
}

impl fmt::Display for NotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotFound::SurroundingTag => write!(f, "No surrounding tag found."),
            NotFound::MatchingPair => write!(f, "No matching pair found for the current tag."),
        }
    }
}

/// Command execution result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// Only the selections changed.
    Moved,
    /// The document was edited.
    Applied {
        /// Number of edits applied.
        edits: usize,
        /// The host should start renaming the inserted tag.
        rename_requested: bool,
    },
    /// Nothing was changed.
    NotFound(NotFound),
}

/// Where a caret ends up once the edit plan has been applied. Offsets are pre-edit.
enum CaretTarget {
    /// Keep a selection, mapping both ends.
    Keep { anchor: usize, active: usize },
    /// A caret at `offset`, moved `advance` characters into the text inserted there.
    At { offset: usize, advance: usize },
}

/// Command executor
///
/// # Example
///
/// ```rust
/// use tagsurf_core::{Command, CommandExecutor, CommandResult, Position, Selection};
/// use tagsurf_lang::MarkupDialect;
///
/// let mut executor = CommandExecutor::new("<p>(a)</p>", MarkupDialect::Html);
/// executor.set_selections(vec![Selection::caret(Position::new(0, 3))]);
///
/// let result = executor.execute(Command::JumpToMatchingPair).unwrap();
/// assert_eq!(result, CommandResult::Moved);
/// assert_eq!(executor.selections()[0].active, Position::new(0, 5));
/// ```
pub struct CommandExecutor {
    document: TextDocument,
    /// The first selection is the primary one.
    selections: Vec<Selection>,
    config: TagConfig,
    dialect: MarkupDialect,
    scanner: TagScanner,
}

impl CommandExecutor {
    /// Create a new command executor with default settings and a caret at the start.
    pub fn new(text: &str, dialect: MarkupDialect) -> Self {
        Self::with_config(text, dialect, TagConfig::default())
    }

    /// Create a new command executor with custom settings.
    pub fn with_config(text: &str, dialect: MarkupDialect, config: TagConfig) -> Self {
        Self {
            document: TextDocument::new(text),
            selections: vec![Selection::caret(Position::default())],
            scanner: TagScanner::with_limits(config.limits),
            config,
            dialect,
        }
    }

    /// The document.
    pub fn document(&self) -> &TextDocument {
        &self.document
    }

    /// Current selections, primary first.
    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }

    /// Replace the selections. The first one becomes primary.
    pub fn set_selections(&mut self, selections: Vec<Selection>) {
        self.selections = selections;
    }

    /// Current settings.
    pub fn config(&self) -> &TagConfig {
        &self.config
    }

    /// Replace the settings.
    pub fn set_config(&mut self, config: TagConfig) {
        self.scanner = TagScanner::with_limits(config.limits);
        self.config = config;
    }

    /// The document's dialect.
    pub fn dialect(&self) -> MarkupDialect {
        self.dialect
    }

    /// Execute command
    pub fn execute(&mut self, command: Command) -> Result<CommandResult, CommandError> {
        if self.selections.is_empty() {
            return Err(CommandError::NoSelection);
        }

        tracing::debug!(?command, selections = self.selections.len(), "executing command");

        let result = match command {
            Command::JumpToMatchingPair => self.jump_to_matching_pair(),
            Command::SurroundWithTag { tag_name } => self.surround_with_tag(tag_name),
            Command::InsertSelfClosingTag => self.insert_self_closing_tag(),
            Command::DeleteSurroundingTagPair => self.delete_surrounding_tag_pair(),
            Command::DeleteSelectionWithPairs => self.delete_selection_with_pairs(),
            Command::FocusClassName => self.focus_class_name(),
        }?;

        if let CommandResult::NotFound(reason) = &result {
            tracing::debug!(%reason, "command found nothing to do");
        }
        Ok(result)
    }

    /// Batch execute commands
    pub fn execute_batch(
        &mut self,
        commands: Vec<Command>,
    ) -> Result<Vec<CommandResult>, CommandError> {
        let mut results = Vec::new();

        for command in commands {
            let result = self.execute(command)?;
            results.push(result);
        }

        Ok(results)
    }

    fn jump_to_matching_pair(&mut self) -> Result<CommandResult, CommandError> {
        let mut moved = false;
        let mut selections = Vec::with_capacity(self.selections.len());

        for selection in &self.selections {
            match self.jump_target(selection) {
                Some(target) => {
                    selections.push(selection.moved_to(target));
                    moved = true;
                }
                None => selections.push(*selection),
            }
        }

        if !moved {
            return Ok(CommandResult::NotFound(NotFound::MatchingPair));
        }
        self.selections = selections;
        Ok(CommandResult::Moved)
    }

    /// Brackets win at the caret; tags win at the end of the line.
    fn jump_target(&self, selection: &Selection) -> Option<Position> {
        let kind = SelectionKind::classify(selection.range(), &self.document);
        if !kind.is_block() {
            let cursor = selection.active;
            if let Some(target) = self.bracket_jump(cursor).or_else(|| self.tag_jump(cursor)) {
                return Some(target);
            }
        }

        let line = selection.active.line;
        let last = self.document.line_len(line).checked_sub(1)?;
        let mut cursor = Position::new(line, last);
        if self.document.char_at(cursor) == Some(';') && last > 0 {
            cursor = cursor.translate(0, -1);
        }
        self.tag_jump(cursor).or_else(|| self.bracket_jump(cursor))
    }

    fn bracket_jump(&self, cursor: Position) -> Option<Position> {
        let loc = bracket::classify(self.document.char_at(cursor)?, cursor)?;
        bracket::find_partner(&self.document, loc)
    }

    fn tag_jump(&self, cursor: Position) -> Option<Position> {
        let tag = self.scanner.find_enclosing(&self.document, cursor)?;
        let partner = self.scanner.find_partner(&self.document, &tag)?;
        Some(partner.range.start().translate(0, 1))
    }

    fn surround_with_tag(
        &mut self,
        tag_name: Option<String>,
    ) -> Result<CommandResult, CommandError> {
        let doc = &self.document;
        let indent = self.config.indent.as_text();
        let mut plan = EditPlan::new();
        let mut carets = Vec::with_capacity(self.selections.len());

        for selection in &self.selections {
            let range = trim_trailing_line_start(selection.range(), doc);
            let kind = SelectionKind::classify(range, doc);
            let name = tag_name.clone().unwrap_or_else(|| match kind {
                SelectionKind::Inline => self.config.default_inline_tag.clone(),
                _ => self.config.default_block_tag.clone(),
            });

            let content = doc.text(range);
            let (wrapped, advance) = match kind {
                SelectionKind::Inline | SelectionKind::MultiInline => {
                    (wrap_content(&content, &name, true, &indent), 1)
                }
                SelectionKind::FullLine | SelectionKind::MultiFullLine => {
                    let existing = leading_indentation(&content).chars().count();
                    (wrap_content(&content, &name, false, &indent), existing + 1)
                }
                SelectionKind::None => {
                    let advance = name.chars().count() + 2;
                    (wrap_content("", &name, true, &indent), advance)
                }
            };

            plan.replace(range, wrapped);
            carets.push(CaretTarget::At {
                offset: doc.offset_at(range.start()),
                advance,
            });
        }

        let edits = self.apply(&plan, carets)?;
        Ok(CommandResult::Applied {
            edits,
            rename_requested: self.config.auto_rename,
        })
    }

    fn insert_self_closing_tag(&mut self) -> Result<CommandResult, CommandError> {
        let name = self.config.default_self_closing_tag.clone();
        let mut plan = EditPlan::new();
        let mut carets = Vec::with_capacity(self.selections.len());

        for selection in &self.selections {
            plan.insert(selection.active, format!("<{name} />"));
            carets.push(CaretTarget::At {
                offset: self.document.offset_at(selection.active),
                advance: 1 + name.chars().count(),
            });
        }

        let edits = self.apply(&plan, carets)?;
        Ok(CommandResult::Applied {
            edits,
            rename_requested: self.config.auto_rename,
        })
    }

    fn delete_surrounding_tag_pair(&mut self) -> Result<CommandResult, CommandError> {
        let doc = &self.document;
        let active = self.selections[0].active;

        let Some(tag) = self.scanner.surrounding_tag(doc, active) else {
            return Ok(CommandResult::NotFound(NotFound::SurroundingTag));
        };
        let mut ranges = vec![tag.range];
        if !tag.is_self_closing() {
            let Some(partner) = self.scanner.find_partner(doc, &tag) else {
                return Ok(CommandResult::NotFound(NotFound::MatchingPair));
            };
            ranges.push(partner.range);
        }

        let deletions = plan_line_deletions(doc, &ranges);
        let plan = line_deletion_edits(doc, &deletions);
        let carets = self.selections.iter().map(|s| self.keep(s)).collect();

        let edits = self.apply(&plan, carets)?;
        Ok(CommandResult::Applied {
            edits,
            rename_requested: false,
        })
    }

    fn delete_selection_with_pairs(&mut self) -> Result<CommandResult, CommandError> {
        let doc = &self.document;
        let mut deleted = RangeSet::new();
        let mut line_deletions = Vec::new();
        let mut caret = None;

        for selection in &self.selections {
            let mut effective = if selection.is_empty() {
                let at = selection.active;
                let end = (at.character + 1).min(doc.line_len(at.line));
                Range::new(at, at.with_character(end.max(at.character)))
            } else {
                selection.range()
            };

            let tags = self.scanner.tags_in_range(doc, effective);
            let tag_partners = tags
                .iter()
                .filter_map(|tag| self.scanner.find_partner(doc, tag))
                .map(|partner| partner.range);
            let bracket_partners = bracket::find_all_in_range(doc, effective)
                .into_iter()
                .filter_map(|loc| bracket::find_partner(doc, loc))
                .map(|p| Range::new(p, p.translate(0, 1)));
            let partners: RangeSet = tag_partners.chain(bracket_partners).collect();

            let mut pair_ranges = Vec::new();
            for range in partners.into_vec() {
                if effective.contains(&range) {
                    continue;
                }
                if effective.intersects(&range) {
                    effective = effective.union(&range);
                    continue;
                }
                pair_ranges.push(range);
            }

            if SelectionKind::classify(effective, doc).is_block() {
                effective = swallow_line_break(doc, effective);
            }

            line_deletions.extend(plan_line_deletions(doc, &pair_ranges));
            deleted.insert(effective);
            caret.get_or_insert(effective.start());
        }

        let line_plan = line_deletion_edits(doc, &line_deletions);
        deleted.extend(line_plan.edits().iter().map(|edit| edit.range));

        let mut plan = EditPlan::new();
        for range in &deleted {
            plan.delete(*range);
        }

        let caret = caret.unwrap_or_default();
        let carets = vec![CaretTarget::At {
            offset: doc.offset_at(caret),
            advance: 0,
        }];
        let edits = self.apply(&plan, carets)?;
        Ok(CommandResult::Applied {
            edits,
            rename_requested: false,
        })
    }

    fn focus_class_name(&mut self) -> Result<CommandResult, CommandError> {
        let Some(attribute) = self.dialect.empty_class_attribute() else {
            return Err(CommandError::UnsupportedDialect);
        };
        let attribute_len = attribute.chars().count();

        let doc = &self.document;
        let mut plan = EditPlan::new();
        let mut inserted_at = BTreeSet::new();
        let mut carets = Vec::with_capacity(self.selections.len());
        let mut found = false;

        for selection in &self.selections {
            let tag = self
                .scanner
                .surrounding_tag(doc, selection.active)
                .and_then(|tag| match tag.kind {
                    TagKind::Closing => self.scanner.find_partner(doc, &tag),
                    _ => Some(tag),
                });
            let Some(tag) = tag else {
                carets.push(self.keep(selection));
                continue;
            };
            found = true;

            let target = self.scanner.class_name_position(doc, &tag);
            let offset = doc.offset_at(target.position);
            match target.kind {
                ClassNameKind::EndOfName => {
                    if inserted_at.insert(offset) {
                        plan.insert(target.position, attribute.clone());
                    }
                    carets.push(CaretTarget::At {
                        offset,
                        advance: attribute_len - 1,
                    });
                }
                ClassNameKind::EndOfClassList => {
                    carets.push(CaretTarget::At { offset, advance: 0 });
                }
            }
        }

        if !found {
            return Ok(CommandResult::NotFound(NotFound::SurroundingTag));
        }
        let edits = self.apply(&plan, carets)?;
        if edits == 0 {
            return Ok(CommandResult::Moved);
        }
        Ok(CommandResult::Applied {
            edits,
            rename_requested: false,
        })
    }

    fn keep(&self, selection: &Selection) -> CaretTarget {
        CaretTarget::Keep {
            anchor: self.document.offset_at(selection.anchor),
            active: self.document.offset_at(selection.active),
        }
    }

    /// Apply `plan` and place the carets. Returns the number of edits.
    fn apply(&mut self, plan: &EditPlan, carets: Vec<CaretTarget>) -> Result<usize, CommandError> {
        let edits = self.document.apply(plan)?;

        let selections = carets
            .into_iter()
            .map(|target| match target {
                CaretTarget::Keep { anchor, active } => Selection::new(
                    self.position_after(&edits, anchor, 0),
                    self.position_after(&edits, active, 0),
                ),
                CaretTarget::At { offset, advance } => {
                    Selection::caret(self.position_after(&edits, offset, advance))
                }
            })
            .collect();
        self.selections = normalize_selections(selections);

        Ok(edits.len())
    }

    fn position_after(&self, edits: &[ResolvedEdit], offset: usize, advance: usize) -> Position {
        self.document
            .position_at(map_offset(edits, offset, Bias::Left) + advance)
    }
}

/// Extend a whole-line range over the line break that follows it, or the one before it on the
/// last line.
fn swallow_line_break<D: Document + ?Sized>(document: &D, range: Range) -> Range {
    let end = range.end();
    if end.line + 1 < document.line_count() {
        return range.with_end(Position::new(end.line + 1, 0));
    }
    match range.start().line.checked_sub(1) {
        Some(previous) => Range::new(Position::new(previous, document.line_len(previous)), end),
        None => range,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn executor(text: &str, selections: Vec<Selection>) -> CommandExecutor {
        let mut ex = CommandExecutor::new(text, MarkupDialect::Html);
        ex.set_selections(selections);
        ex
    }

    #[test]
    fn test_no_selection_is_an_error() {
        let mut ex = executor("<div></div>", vec![]);
        assert_eq!(
            ex.execute(Command::JumpToMatchingPair).unwrap_err(),
            CommandError::NoSelection
        );
    }

    #[test]
    fn test_batch_runs_commands_in_order() {
        let mut ex = executor("x", vec![Selection::caret(Position::new(0, 0))]);
        let results = ex
            .execute_batch(vec![Command::InsertSelfClosingTag, Command::JumpToMatchingPair])
            .unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(
            results[0],
            CommandResult::Applied {
                edits: 1,
                rename_requested: false
            }
        );
        assert_eq!(ex.document().get_text(), "<div />x");
    }

    #[test]
    fn test_jump_from_line_end_skips_semicolon() {
        let mut ex = executor(
            "const a = foo(1, 2);",
            vec![Selection::new(Position::new(0, 0), Position::new(0, 20))],
        );
        assert_eq!(ex.execute(Command::JumpToMatchingPair).unwrap(), CommandResult::Moved);
        assert_eq!(
            ex.selections()[0],
            Selection::new(Position::new(0, 0), Position::new(0, 13))
        );
    }

    #[test]
    fn test_swallow_line_break_on_last_line() {
        let doc = TextDocument::new("a\nb");
        assert_eq!(
            swallow_line_break(&doc, Range::from_coords(1, 0, 1, 1)),
            Range::from_coords(0, 1, 1, 1)
        );
        assert_eq!(
            swallow_line_break(&doc, Range::from_coords(0, 0, 0, 1)),
            Range::from_coords(0, 0, 1, 0)
        );
    }

    #[test]
    fn test_not_found_messages() {
        assert_eq!(NotFound::SurroundingTag.to_string(), "No surrounding tag found.");
    }
}
