//! Spanned markup tokens.

use std::fmt;

use gtkdoc_lexer_core::MarkupTag;

use crate::Span;

/// What a token covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkupKind {
    /// Documentation text with no markup in it.
    Text,
    /// `|[`
    OpenCodeBlock,
    /// `]|`
    CloseCodeBlock,
    /// `<!-- language="NAME" -->`
    LanguageComment,
}

impl MarkupKind {
    /// Returns `true` for every kind except [`Text`](Self::Text).
    pub const fn is_markup(self) -> bool {
        !matches!(self, MarkupKind::Text)
    }
}

impl From<MarkupTag> for MarkupKind {
    fn from(tag: MarkupTag) -> Self {
        match tag {
            MarkupTag::OpenCodeBlock => MarkupKind::OpenCodeBlock,
            MarkupTag::CloseCodeBlock => MarkupKind::CloseCodeBlock,
            MarkupTag::LanguageComment => MarkupKind::LanguageComment,
        }
    }
}

impl fmt::Display for MarkupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkupKind::Text => f.write_str("Text"),
            MarkupKind::OpenCodeBlock => f.write_str("OpenCodeBlock"),
            MarkupKind::CloseCodeBlock => f.write_str("CloseCodeBlock"),
            MarkupKind::LanguageComment => f.write_str("LanguageComment"),
        }
    }
}

/// A token and the source bytes it covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MarkupToken {
    pub kind: MarkupKind,
    pub span: Span,
}

impl MarkupToken {
    pub const fn new(kind: MarkupKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Source text of this token.
    ///
    /// Token boundaries always fall on ASCII bytes or the ends of the source,
    /// so the slice is valid for any token produced from `source`.
    pub fn text<'src>(&self, source: &'src str) -> Option<&'src str> {
        source.get(self.span.to_range())
    }
}

/// The raw `NAME` of a language annotation token.
///
/// Returns `None` for any other kind of token, or when `token` does not
/// belong to `source`. No unescaping or normalization is applied.
pub fn language_name<'src>(source: &'src str, token: &MarkupToken) -> Option<&'src str> {
    if token.kind != MarkupKind::LanguageComment {
        return None;
    }
    let text = token.text(source)?;
    // The prefix `<!-- language=` holds no quote and the name cannot hold
    // one, so the first and last quotes delimit the name.
    let open = text.find('"')?;
    let close = text.rfind('"')?;
    text.get(open + 1..close)
}
