//! Diagnostic logging on stderr.

use std::io::{self, IsTerminal};

use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set. Otherwise this crate logs at debug level when
/// `debug` is on and everything else stays at warn. Stdout is left untouched
/// since it carries the path to open.
pub fn init(debug: bool) {
    let default_directive = if debug { "warn,alternate=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
