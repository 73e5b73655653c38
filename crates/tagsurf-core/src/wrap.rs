//! Wrapping content in a tag.
//!
//! The generative counterpart to the scanners: given selected text, produce the text that
//! replaces it.

use serde::{Deserialize, Serialize};

/// One level of indentation, as configured by the host editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IndentUnit {
    /// `n` spaces per level.
    Spaces(usize),
    /// One tab character per level.
    Tab,
}

impl IndentUnit {
    /// Derive the unit from the usual editor options (`insertSpaces`, `tabSize`).
    pub fn from_editor_options(insert_spaces: bool, tab_size: usize) -> Self {
        if insert_spaces {
            Self::Spaces(tab_size)
        } else {
            Self::Tab
        }
    }

    /// The literal text of one indentation level.
    pub fn as_text(self) -> String {
        match self {
            Self::Spaces(n) => " ".repeat(n),
            Self::Tab => "\t".to_string(),
        }
    }
}

impl Default for IndentUnit {
    fn default() -> Self {
        Self::Spaces(2)
    }
}

/// Leading whitespace of the first line of `content`.
pub fn leading_indentation(content: &str) -> &str {
    let first_line = content.split('\n').next().unwrap_or_default();
    let trimmed = first_line.trim_start();
    &first_line[..first_line.len() - trimmed.len()]
}

/// Prefix every line of `content` with `indentation`.
pub fn indent_content(content: &str, indentation: &str) -> String {
    content
        .split('\n')
        .map(|line| format!("{indentation}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Wrap `content` in `<tag_name>` / `</tag_name>`.
///
/// - Inline: `<tag>content</tag>`, verbatim.
/// - Block: the first line's indentation is kept for the tags and every content line is pushed
///   one `indent_unit` deeper:
///
/// ```text
/// existing<tag>
/// existing + unit + line 1
/// ...
/// existing</tag>
/// ```
pub fn wrap_content(content: &str, tag_name: &str, inline: bool, indent_unit: &str) -> String {
    if inline {
        return format!("<{tag_name}>{content}</{tag_name}>");
    }

    let existing = leading_indentation(content);
    let indented = indent_content(content, indent_unit);
    format!("{existing}<{tag_name}>\n{indented}\n{existing}</{tag_name}>")
}
