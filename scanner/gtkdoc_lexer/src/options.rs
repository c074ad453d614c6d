//! Lexing options.

/// Knobs for the token walk. The defaults match how gtk-doc comments are
/// written in practice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LexOptions {
    /// Recognize `<!-- language="..." -->` anywhere in the text.
    ///
    /// When `false`, an annotation is only recognized directly after `|[`;
    /// elsewhere the comment is plain text.
    pub annotations_anywhere: bool,

    /// Only accept an annotation that is followed by optional spaces or
    /// tabs and then a line break (`\n` or `\r`).
    ///
    /// The token still ends right after `-->`; the line break belongs to the
    /// code block body. An annotation at the very end of the input has no
    /// line break and is rejected.
    pub require_line_end: bool,
}
