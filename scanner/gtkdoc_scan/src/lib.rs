//! `gtkdoc-scan`: inspect gtk-doc code-block markup from the command line.
//!
//! The binary is a thin shell over [`commands::run`]; everything it prints
//! comes back from a command as a `String` so the commands can be tested
//! without spawning a process.

use std::sync::Once;

pub mod commands;
mod error;

pub use commands::run;
pub use error::CliError;

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber when `RUST_LOG` is set.
///
/// Safe to call more than once; only the first call has any effect.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}
