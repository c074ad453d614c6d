//! Errors reported by the command-line driver.
//!
//! The scanners themselves never fail; everything here is about turning
//! user input (arguments, files) into something the scanners can run on.

use std::io;

/// A command-line failure. `main` prints it and exits with status 1.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Missing or malformed arguments; the payload is the usage line to show.
    #[error("missing arguments\nUsage: {0}")]
    Usage(&'static str),

    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("unknown scanner '{0}'\nValid scanners: open, close, language")]
    UnknownScanner(String),

    #[error("invalid offset '{0}': expected a byte offset")]
    InvalidOffset(String),

    #[error("unknown flag '{0}'")]
    UnknownFlag(String),

    #[error("{}", describe_read(.path, .source))]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
}

fn describe_read(path: &str, err: &io::Error) -> String {
    match err.kind() {
        io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {err}"),
    }
}
