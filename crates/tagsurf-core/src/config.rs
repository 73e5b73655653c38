//! User-facing settings.
//!
//! The host reads its own settings store and hands the values in as a [`TagConfig`]; nothing in
//! this crate looks configuration up by itself.

use crate::error::ConfigError;
use crate::wrap::IndentUnit;
use serde::{Deserialize, Serialize};

/// Line windows that bound every backward/forward tag scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScanLimits {
    /// Lines searched around the cursor when looking for the enclosing `<` / `>`.
    pub enclosing_lines: usize,
    /// Lines searched for a tag's partner.
    pub paired_lines: usize,
    /// Lines searched backward for an ancestor tag.
    pub surrounding_lines: usize,
}

impl Default for ScanLimits {
    fn default() -> Self {
        Self {
            enclosing_lines: 100,
            paired_lines: 1000,
            surrounding_lines: 1000,
        }
    }
}

impl ScanLimits {
    fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("enclosingLines", self.enclosing_lines),
            ("pairedLines", self.paired_lines),
            ("surroundingLines", self.surrounding_lines),
        ] {
            if value == 0 {
                return Err(ConfigError::EmptyScanWindow(name));
            }
        }
        Ok(())
    }
}

/// Command settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TagConfig {
    /// Tag used when wrapping an inline selection.
    pub default_inline_tag: String,
    /// Tag used when wrapping whole lines.
    pub default_block_tag: String,
    /// Tag inserted by the self-closing tag command.
    pub default_self_closing_tag: String,
    /// Ask the host to start a rename on the new tag after wrapping.
    pub auto_rename: bool,
    /// Indentation added inside block wraps.
    pub indent: IndentUnit,
    /// Scan windows.
    pub limits: ScanLimits,
}

impl Default for TagConfig {
    fn default() -> Self {
        Self {
            default_inline_tag: "span".to_string(),
            default_block_tag: "div".to_string(),
            default_self_closing_tag: "div".to_string(),
            auto_rename: false,
            indent: IndentUnit::default(),
            limits: ScanLimits::default(),
        }
    }
}

impl TagConfig {
    /// Parse settings from JSON. Missing keys take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: TagConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every field for values the commands cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("defaultInlineTag", &self.default_inline_tag),
            ("defaultBlockTag", &self.default_block_tag),
            ("defaultSelfClosingTag", &self.default_self_closing_tag),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyTagName(name));
            }
        }
        if let IndentUnit::Spaces(0) = self.indent {
            return Err(ConfigError::InvalidIndent(0));
        }
        self.limits.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TagConfig::default();
        assert_eq!(config.default_inline_tag, "span");
        assert_eq!(config.default_block_tag, "div");
        assert_eq!(config.default_self_closing_tag, "div");
        assert!(!config.auto_rename);
        assert_eq!(config.indent, IndentUnit::Spaces(2));
        assert_eq!(config.limits.enclosing_lines, 100);
        assert_eq!(config.limits.paired_lines, 1000);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = TagConfig::from_json_str(
            r#"{ "defaultBlockTag": "section", "autoRename": true, "indent": "tab" }"#,
        )
        .unwrap();
        assert_eq!(config.default_block_tag, "section");
        assert_eq!(config.default_inline_tag, "span");
        assert!(config.auto_rename);
        assert_eq!(config.indent, IndentUnit::Tab);
    }

    #[test]
    fn test_limits_from_json() {
        let config =
            TagConfig::from_json_str(r#"{ "limits": { "pairedLines": 50 }, "indent": { "spaces": 4 } }"#)
                .unwrap();
        assert_eq!(config.limits.paired_lines, 50);
        assert_eq!(config.limits.enclosing_lines, 100);
        assert_eq!(config.indent, IndentUnit::Spaces(4));
    }

    #[test]
    fn test_validation_errors() {
        assert!(matches!(
            TagConfig::from_json_str(r#"{ "defaultInlineTag": "  " }"#),
            Err(ConfigError::EmptyTagName("defaultInlineTag"))
        ));
        assert!(matches!(
            TagConfig::from_json_str(r#"{ "indent": { "spaces": 0 } }"#),
            Err(ConfigError::InvalidIndent(0))
        ));
        assert!(matches!(
            TagConfig::from_json_str(r#"{ "limits": { "enclosingLines": 0 } }"#),
            Err(ConfigError::EmptyScanWindow("enclosingLines"))
        ));
        assert!(matches!(
            TagConfig::from_json_str("not json"),
            Err(ConfigError::Json(_))
        ));
    }
}
