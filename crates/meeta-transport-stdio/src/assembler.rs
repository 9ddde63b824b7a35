//! Reassembly of JSON values from line-oriented input.
//!
//! A message may arrive on one line or spread over several (pretty-printed
//! or chunked). Lines are appended to a buffer until the whole buffer
//! parses as one JSON value. Completion is detected by a successful parse,
//! never by a declared length, so `Content-Length` style header lines are
//! skipped rather than interpreted.

use serde_json::Value;
use tracing::{debug, trace};

use meeta_protocol::is_header_line;

/// Ceiling, in characters, for text buffered without a successful parse.
pub const MAX_BUFFER_CHARS: usize = 10_000;

/// Accumulates input lines into complete JSON values.
///
/// Owned by the server loop; all state is the single text buffer.
#[derive(Debug, Default)]
pub struct FrameAssembler {
    buffer: String,
    chars: usize,
}

impl FrameAssembler {
    /// Creates an empty assembler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one line (newline already stripped).
    ///
    /// Returns the parsed value once the buffered text forms a complete
    /// JSON document. Unparseable text stays buffered until it exceeds
    /// [`MAX_BUFFER_CHARS`], at which point it is discarded silently.
    pub fn push_line(&mut self, line: &str) -> Option<Value> {
        if line.is_empty() {
            return None;
        }
        if is_header_line(line) {
            trace!(line, "skipping header line");
            return None;
        }

        self.buffer.push_str(line);
        self.chars += line.chars().count();

        match serde_json::from_str::<Value>(&self.buffer) {
            Ok(value) => {
                self.clear();
                Some(value)
            }
            Err(e) => {
                if self.chars > MAX_BUFFER_CHARS {
                    debug!(chars = self.chars, "buffer overflow, resetting");
                    self.clear();
                } else {
                    trace!(error = %e, chars = self.chars, "message incomplete, buffering");
                }
                None
            }
        }
    }

    /// Number of characters currently buffered.
    pub fn buffered_chars(&self) -> usize {
        self.chars
    }

    /// Returns `true` when nothing is buffered.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    fn clear(&mut self) {
        self.buffer.clear();
        self.chars = 0;
    }
}
