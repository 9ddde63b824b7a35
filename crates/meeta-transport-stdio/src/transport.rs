//! Line-oriented input and framed output over stdin/stdout.
//!
//! Input is read one newline-terminated line at a time (`\n` or `\r\n`).
//! Invalid UTF-8 is replaced with U+FFFD rather than rejected; only real
//! I/O failures surface as errors. Output messages are written as
//! `Content-Length` frames, one complete frame per write followed by a
//! flush.

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, trace};

use meeta_protocol::encode_frame;

use crate::error::TransportError;

/// Reads lines from stdin, writes framed responses to stdout.
///
/// Generic over reader/writer for testability.
pub struct StdioTransport<R, W> {
    reader: BufReader<R>,
    pending: Vec<u8>,
    writer: W,
}

impl<R, W> StdioTransport<R, W>
where
    R: tokio::io::AsyncRead + Unpin,
    W: tokio::io::AsyncWrite + Unpin,
{
    /// Creates a new transport with the given reader and writer.
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader: BufReader::new(reader),
            pending: Vec::new(),
            writer,
        }
    }

    /// Reads the next line with its terminator stripped.
    ///
    /// Returns `None` on EOF. Cancel safe: bytes read before the future is
    /// dropped stay in `pending` and are completed by the next call.
    pub async fn read_line(&mut self) -> Result<Option<String>, TransportError> {
        let n = self
            .reader
            .read_until(b'\n', &mut self.pending)
            .await
            .map_err(|e| TransportError::Read(e.to_string()))?;

        if n == 0 && self.pending.is_empty() {
            return Ok(None);
        }

        let mut bytes = std::mem::take(&mut self.pending);
        if bytes.last() == Some(&b'\n') {
            bytes.pop();
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }
        }

        let line = match String::from_utf8(bytes) {
            Ok(line) => line,
            Err(e) => {
                debug!(error = %e, "invalid UTF-8 on stdin, decoding lossily");
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };
        trace!(len = line.len(), "read line");
        Ok(Some(line))
    }

    /// Writes one serialized JSON message as a `Content-Length` frame.
    pub async fn write_frame(&mut self, body: &str) -> Result<(), TransportError> {
        trace!(len = body.len(), "writing frame");

        self.writer
            .write_all(encode_frame(body).as_bytes())
            .await
            .map_err(|e| TransportError::Write(e.to_string()))?;

        self.writer
            .flush()
            .await
            .map_err(|e| TransportError::Write(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[tokio::test]
    async fn read_single_line() {
        let input = b"{\"jsonrpc\":\"2.0\"}\n";
        let reader = Cursor::new(input.to_vec());
        let mut transport = StdioTransport::new(reader, Vec::new());

        let line = transport.read_line().await.expect("read");
        assert_eq!(line, Some("{\"jsonrpc\":\"2.0\"}".to_string()));
    }

    #[tokio::test]
    async fn read_eof_returns_none() {
        let reader = Cursor::new(Vec::<u8>::new());
        let mut transport = StdioTransport::new(reader, Vec::new());

        let line = transport.read_line().await.expect("read");
        assert_eq!(line, None);
    }

    #[tokio::test]
    async fn read_strips_crlf_and_keeps_blank_lines() {
        let input = b"Content-Length: 2\r\n\r\n{}";
        let reader = Cursor::new(input.to_vec());
        let mut transport = StdioTransport::new(reader, Vec::new());

        let l1 = transport.read_line().await.expect("r1");
        let l2 = transport.read_line().await.expect("r2");
        let l3 = transport.read_line().await.expect("r3");
        let l4 = transport.read_line().await.expect("r4");

        assert_eq!(l1, Some("Content-Length: 2".to_string()));
        assert_eq!(l2, Some(String::new()));
        assert_eq!(l3, Some("{}".to_string()));
        assert_eq!(l4, None);
    }

    #[tokio::test]
    async fn invalid_utf8_is_replaced_not_fatal() {
        let input = b"{\"s\":\"\xff\"}\n{}\n".to_vec();
        let mut transport = StdioTransport::new(Cursor::new(input), Vec::new());

        let l1 = transport.read_line().await.expect("r1");
        let l2 = transport.read_line().await.expect("r2");

        assert_eq!(l1, Some("{\"s\":\"\u{FFFD}\"}".to_string()));
        assert_eq!(l2, Some("{}".to_string()));
    }

    #[tokio::test]
    async fn last_line_without_newline_is_returned() {
        let mut transport = StdioTransport::new(Cursor::new(b"abc".to_vec()), Vec::new());
        assert_eq!(transport.read_line().await.expect("r1"), Some("abc".to_string()));
        assert_eq!(transport.read_line().await.expect("r2"), None);
    }

    #[tokio::test]
    async fn write_frame_prefixes_byte_length() {
        let reader = Cursor::new(Vec::<u8>::new());
        let mut transport = StdioTransport::new(reader, Vec::new());

        transport.write_frame("{\"t\":\"é\"}").await.expect("write");

        let output = String::from_utf8(transport.writer.clone()).expect("utf8");
        assert_eq!(output, "Content-Length: 10\r\n\r\n{\"t\":\"é\"}");
    }
}
