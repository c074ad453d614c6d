//! `gtkdoc-scan tokens <file> [options]`

use std::fmt::Write as _;

use gtkdoc_lexer::{language_name, lex_with_options, LexOptions, MarkupKind};

use super::read_file;
use crate::CliError;

const USAGE: &str = "gtkdoc-scan tokens <file> [--annotations-anywhere] [--require-line-end]";

/// Parse `tokens` arguments into a path and lexing options.
fn parse_args(args: &[String]) -> Result<(&str, LexOptions), CliError> {
    let mut options = LexOptions::default();
    let mut path = None;

    for arg in args {
        match arg.as_str() {
            "--annotations-anywhere" => options.annotations_anywhere = true,
            "--require-line-end" => options.require_line_end = true,
            flag if flag.starts_with('-') => return Err(CliError::UnknownFlag(flag.to_string())),
            file if path.is_none() => path = Some(file),
            _ => return Err(CliError::Usage(USAGE)),
        }
    }

    let path = path.ok_or(CliError::Usage(USAGE))?;
    Ok((path, options))
}

/// List every markup token of a file, one per line.
pub fn tokens_command(args: &[String]) -> Result<String, CliError> {
    let (path, options) = parse_args(args)?;
    let content = read_file(path)?;
    tracing::debug!(path, ?options, "lexing file");

    let tokens = lex_with_options(&content, &options);
    let markup: Vec<_> = tokens.iter().filter(|t| t.kind.is_markup()).collect();

    let mut out = String::new();
    for token in &markup {
        let _ = write!(out, "{} @ {}", token.kind, token.span);
        if token.kind == MarkupKind::LanguageComment {
            if let Some(name) = language_name(&content, token) {
                let _ = write!(out, " language={name:?}");
            }
        }
        out.push('\n');
    }
    let _ = writeln!(out, "{} markup tokens in '{path}'", markup.len());
    Ok(out)
}
