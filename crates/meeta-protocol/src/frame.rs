//! `Content-Length` framing for messages written to stdout.
//!
//! Responses are written as `Content-Length: <n>\r\n\r\n<json>` where
//! `<n>` is the UTF-8 byte length of the body. Incoming header lines of
//! the same shape carry nothing the line assembler needs.

/// Header carrying the body length.
pub const CONTENT_LENGTH: &str = "Content-Length";

/// Header carrying the body media type.
pub const CONTENT_TYPE: &str = "Content-Type";

/// Wraps a serialized JSON body in a `Content-Length` frame.
pub fn encode_frame(body: &str) -> String {
    format!("{CONTENT_LENGTH}: {}\r\n\r\n{body}", body.len())
}

/// Returns `true` if `line` is a recognised transport header
/// (`Content-Length:` or `Content-Type:`, ASCII case-insensitive).
pub fn is_header_line(line: &str) -> bool {
    let Some((name, _)) = line.split_once(':') else {
        return false;
    };
    let name = name.trim_end();
    name.eq_ignore_ascii_case(CONTENT_LENGTH) || name.eq_ignore_ascii_case(CONTENT_TYPE)
}
