//! # meeta-protocol
//!
//! MCP protocol and JSON-RPC 2.0 type definitions.
//! This crate defines the wire format spoken on stdio, the envelope
//! sent to the remote HTTP endpoint, and the `Content-Length` framing
//! used for responses.

pub mod envelope;
pub mod frame;
pub mod jsonrpc;
pub mod mcp;

pub use envelope::OutboundEnvelope;
pub use frame::{encode_frame, is_header_line};
pub use jsonrpc::*;
pub use mcp::methods;
