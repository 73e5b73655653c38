#![warn(missing_docs)]
//! `tagsurf-lang` - markup dialect helpers for `tagsurf-core`.
//!
//! This crate intentionally stays lightweight and does **not** depend on any parser or
//! highlighting system. It answers the few language questions the tag commands need: which
//! markup flavour a file uses and how that flavour spells its class attribute.

use std::path::Path;

/// The markup flavour of a document, as far as tag commands are concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkupDialect {
    /// Plain HTML (`class="..."`).
    Html,
    /// JSX / TSX (`className="..."`).
    Jsx,
    /// Anything else. Tag scanning still works, but class attribute editing is unsupported.
    #[default]
    Other,
}

impl MarkupDialect {
    /// Detect the dialect from a file extension (without the leading dot).
    pub fn from_extension(extension: &str) -> Self {
        match extension.to_ascii_lowercase().as_str() {
            "html" | "htm" => Self::Html,
            "jsx" | "tsx" => Self::Jsx,
            _ => Self::Other,
        }
    }

    /// Detect the dialect from a file path.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or_default()
    }

    /// The attribute name used for CSS classes, if the dialect has one.
    pub fn class_attribute(self) -> Option<&'static str> {
        match self {
            Self::Html => Some("class"),
            Self::Jsx => Some("className"),
            Self::Other => None,
        }
    }

    /// Text inserted after a tag name to create an empty class attribute, e.g. ` class=""`.
    pub fn empty_class_attribute(self) -> Option<String> {
        self.class_attribute().map(|name| format!(" {name}=\"\""))
    }

    /// Returns `true` if class attribute editing is supported for this dialect.
    pub fn supports_class_attribute(self) -> bool {
        self.class_attribute().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_dialect_from_path() {
        assert_eq!(MarkupDialect::from_path("index.html"), MarkupDialect::Html);
        assert_eq!(MarkupDialect::from_path("src/App.TSX"), MarkupDialect::Jsx);
        assert_eq!(MarkupDialect::from_path("src/button.jsx"), MarkupDialect::Jsx);
        assert_eq!(MarkupDialect::from_path("main.rs"), MarkupDialect::Other);
        assert_eq!(MarkupDialect::from_path("Makefile"), MarkupDialect::Other);
    }

    #[test]
    fn empty_class_attribute_per_dialect() {
        assert_eq!(
            MarkupDialect::Html.empty_class_attribute().as_deref(),
            Some(" class=\"\"")
        );
        assert_eq!(
            MarkupDialect::Jsx.empty_class_attribute().as_deref(),
            Some(" className=\"\"")
        );
        assert!(MarkupDialect::Other.empty_class_attribute().is_none());
    }
}
