//! Markup token tags.
//!
//! One tag per recognizer. The tag selects the scanner in
//! [`scan`](crate::scan) and [`SourceBuffer::scan_at`](crate::SourceBuffer::scan_at).

use std::fmt;

/// Kind of markup token a scanner recognizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MarkupTag {
    /// `|[` -- opens a code block.
    OpenCodeBlock = 0,
    /// `]|` -- closes a code block.
    CloseCodeBlock = 1,
    /// `<!-- language="NAME" -->` -- tags the language of a code block.
    LanguageComment = 2,
}

impl MarkupTag {
    /// Every tag, in the order the token walk tries them.
    pub const ALL: [MarkupTag; 3] = [
        MarkupTag::OpenCodeBlock,
        MarkupTag::CloseCodeBlock,
        MarkupTag::LanguageComment,
    ];

    /// Short selector name: `open`, `close`, `language`.
    pub const fn short_name(self) -> &'static str {
        match self {
            MarkupTag::OpenCodeBlock => "open",
            MarkupTag::CloseCodeBlock => "close",
            MarkupTag::LanguageComment => "language",
        }
    }

    /// Parse a selector name as produced by [`short_name`](Self::short_name).
    pub fn from_short_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.short_name() == name)
    }
}

impl fmt::Display for MarkupTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MarkupTag::OpenCodeBlock => "OpenCodeBlock",
            MarkupTag::CloseCodeBlock => "CloseCodeBlock",
            MarkupTag::LanguageComment => "LanguageComment",
        };
        f.write_str(name)
    }
}
