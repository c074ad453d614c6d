//! `gtkdoc-scan at <scanner> <file> <offset>`

use gtkdoc_lexer_core::{scan_at, MarkupTag};

use super::read_bytes;
use crate::CliError;

const USAGE: &str = "gtkdoc-scan at <open|close|language> <file> <offset>";

/// Run a single scanner at a byte offset of a file and report how many
/// bytes it consumed. The file is scanned as raw bytes.
pub fn scan_at_command(args: &[String]) -> Result<String, CliError> {
    let [scanner, path, offset] = args else {
        return Err(CliError::Usage(USAGE));
    };
    let tag = MarkupTag::from_short_name(scanner)
        .ok_or_else(|| CliError::UnknownScanner(scanner.clone()))?;
    let offset: usize = offset
        .parse()
        .map_err(|_| CliError::InvalidOffset(offset.clone()))?;

    let bytes = read_bytes(path)?;
    let len = scan_at(tag, &bytes, offset);
    tracing::debug!(%tag, offset, len, "scanned");

    if len == 0 {
        return Ok(format!("{} at {offset}: no match\n", tag.short_name()));
    }
    let matched = bytes
        .get(offset..offset + len)
        .map(String::from_utf8_lossy)
        .unwrap_or_default();
    Ok(format!(
        "{} at {offset}: {len} bytes {matched:?}\n",
        tag.short_name()
    ))
}
