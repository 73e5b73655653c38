//! Line terminators.
//!
//! Scanners only ever see `'\n'`. A [`crate::TextDocument`] strips `"\r\n"` on load and
//! remembers that it did, so the text can be written back the way it came in.

use std::borrow::Cow;

/// Line terminator of a loaded text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// `'\n'`
    #[default]
    Lf,
    /// `"\r\n"`
    Crlf,
}

impl LineEnding {
    /// The terminator itself.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::Crlf => "\r\n",
        }
    }

    /// Split `text` into LF-only text and the terminator it used.
    ///
    /// A single `"\r\n"` anywhere marks the whole text as CRLF.
    pub fn split(text: &str) -> (Cow<'_, str>, Self) {
        if text.contains("\r\n") {
            (Cow::Owned(text.replace("\r\n", "\n")), Self::Crlf)
        } else {
            (Cow::Borrowed(text), Self::Lf)
        }
    }

    /// Put this terminator back into LF-only `text`.
    pub fn restore(self, text: &str) -> Cow<'_, str> {
        match self {
            Self::Lf => Cow::Borrowed(text),
            Self::Crlf => Cow::Owned(text.replace('\n', self.as_str())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_and_restore() {
        let source = "<div>\r\n  x\r\n</div>";
        let (text, ending) = LineEnding::split(source);
        assert_eq!(ending, LineEnding::Crlf);
        assert_eq!(text, "<div>\n  x\n</div>");
        assert_eq!(ending.restore(&text), source);
    }

    #[test]
    fn test_lf_text_is_borrowed() {
        let (text, ending) = LineEnding::split("a\nb");
        assert_eq!(ending, LineEnding::Lf);
        assert!(matches!(text, Cow::Borrowed(_)));
        assert!(matches!(ending.restore("a\nb"), Cow::Borrowed(_)));
    }
}
