//! Transport-layer error types.

use thiserror::Error;

/// Errors from the stdio transport layer.
///
/// Only I/O failures on the process's own streams end up here; framing and
/// translation problems are recovered from or answered in-band.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Failed to read from stdin.
    #[error("read error: {0}")]
    Read(String),
    /// Failed to write to stdout.
    #[error("write error: {0}")]
    Write(String),
}
