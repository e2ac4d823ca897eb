//! Tracing subscriber setup for the binary.

use tracing_subscriber::EnvFilter;

/// Maps the `-v` count to a default filter directive.
#[must_use]
pub const fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Installs a stderr `fmt` subscriber.
///
/// `RUST_LOG` takes precedence over the verbosity flag. Installing twice is
/// a no-op.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
