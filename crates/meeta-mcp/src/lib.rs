//! # meeta-mcp
//!
//! MCP method translation (APPLICATION layer).
//!
//! Provides `McpHandler` and `JsonRpcOutput` for turning parsed JSON-RPC
//! messages into responses, either synthesized locally or derived from a
//! single call to the remote HTTP endpoint.

pub mod classify;
mod dispatch;
pub mod handler;

pub use classify::{classify, Incoming};
pub use handler::{JsonRpcOutput, McpHandler};
