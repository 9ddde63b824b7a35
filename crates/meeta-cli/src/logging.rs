//! Tracing setup.
//!
//! stdout carries protocol frames, so every log line goes to stderr.

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

/// Picks the default filter directive when `RUST_LOG` is not set.
///
/// Logging is off unless asked for, so the error channel stays quiet
/// for MCP clients that surface it.
pub fn default_directive(verbose: u8, debug: bool) -> &'static str {
    match (verbose, debug) {
        (v, _) if v >= 2 => "trace",
        (1, _) | (_, true) => "debug",
        _ => "off",
    }
}

/// Installs the global subscriber.
pub fn init(verbose: u8, debug: bool, log_format: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, debug)));

    match log_format {
        "json" => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .init(),
        _ => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .init(),
    };
}
