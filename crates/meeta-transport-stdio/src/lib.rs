//! # meeta-transport-stdio
//!
//! Stdio transport adapter for the Meeta MCP proxy.
//!
//! Assembles JSON values from newline-delimited input that may span
//! several lines, writes `Content-Length` framed responses, and runs the
//! server loop that ties both to an `McpHandler`.

pub mod assembler;
pub mod error;
pub mod server;
pub mod transport;

pub use assembler::{FrameAssembler, MAX_BUFFER_CHARS};
pub use error::TransportError;
// McpHandler lives in meeta-mcp (APPLICATION layer); re-exported for convenience.
pub use meeta_mcp::{JsonRpcOutput, McpHandler};
pub use server::McpServer;
pub use transport::StdioTransport;
