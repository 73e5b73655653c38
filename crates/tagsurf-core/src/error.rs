//! Error types.
//!
//! Scanners never fail: "no match" is an `Option`/empty `Vec`. Errors only exist where text is
//! mutated, where configuration is parsed, and where commands meet an unsupported setup.

use crate::position::{Position, Range};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Errors produced while resolving or applying an [`crate::EditPlan`].
pub enum EditError {
    #[error("edits overlap: {first:?} and {second:?}")]
    /// Two edits in the same plan touch the same characters.
    OverlappingEdits {
        /// The earlier edit range.
        first: Range,
        /// The later edit range.
        second: Range,
    },

    #[error("position out of bounds: line {line}, character {character}")]
    /// An edit references a line or character past the end of the document.
    PositionOutOfBounds {
        /// Logical line index.
        line: usize,
        /// Character index within the line.
        character: usize,
    },
}

impl EditError {
    pub(crate) fn out_of_bounds(position: Position) -> Self {
        Self::PositionOutOfBounds {
            line: position.line,
            character: position.character,
        }
    }
}

#[derive(Debug, Error)]
/// Errors produced while loading a [`crate::TagConfig`].
pub enum ConfigError {
    #[error("JSON parse error: {0}")]
    /// JSON parsing failed.
    Json(#[from] serde_json::Error),

    #[error("indentation must be at least one space, got {0}")]
    /// `indent` was `{"spaces": 0}`.
    InvalidIndent(usize),

    #[error("tag name for '{0}' must not be empty")]
    /// A default tag name setting was blank.
    EmptyTagName(&'static str),

    #[error("scan window '{0}' must cover at least one line")]
    /// A scan limit was zero.
    EmptyScanWindow(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Errors produced by [`crate::CommandExecutor::execute`].
pub enum CommandError {
    #[error(transparent)]
    /// The computed edit could not be applied.
    Edit(#[from] EditError),

    #[error("class attributes are not supported for this file type")]
    /// The document dialect has no class attribute spelling.
    UnsupportedDialect,

    #[error("the editor has no selection")]
    /// The selection list was empty.
    NoSelection,
}
