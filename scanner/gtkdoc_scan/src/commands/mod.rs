//! Command implementations for the `gtkdoc-scan` binary.
//!
//! Every command takes its arguments (after the command name) and returns
//! the text to print, so `main` owns all process-level concerns.

mod scan_at;
mod tokens;

pub use scan_at::scan_at_command;
pub use tokens::tokens_command;

use crate::CliError;

/// Top-level usage text.
pub const USAGE: &str = "\
Usage: gtkdoc-scan <command> [args]

Commands:
  tokens <file> [options]             List the markup tokens in <file>
  at <scanner> <file> <offset>        Run one scanner at a byte offset
  help                                Show this message

Options for `tokens`:
  --annotations-anywhere   Recognize language annotations outside `|[`
  --require-line-end       Only accept annotations followed by a line break

Scanners: open (`|[`), close (`]|`), language (`<!-- language=\"...\" -->`)

Set RUST_LOG (e.g. RUST_LOG=gtkdoc_lexer=trace) for tracing output.
";

/// Dispatch `args` (program name already stripped) to a command.
pub fn run(args: &[String]) -> Result<String, CliError> {
    let Some((command, rest)) = args.split_first() else {
        return Ok(USAGE.to_string());
    };
    match command.as_str() {
        "tokens" => tokens_command(rest),
        "at" => scan_at_command(rest),
        "help" | "--help" | "-h" => Ok(USAGE.to_string()),
        other => Err(CliError::UnknownCommand(other.to_string())),
    }
}

/// Read `path` as text.
pub(crate) fn read_file(path: &str) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_string(),
        source,
    })
}

/// Read `path` as raw bytes; no UTF-8 requirement.
pub(crate) fn read_bytes(path: &str) -> Result<Vec<u8>, CliError> {
    std::fs::read(path).map_err(|source| CliError::Read {
        path: path.to_string(),
        source,
    })
}
