//! Outbound HTTP adapter for the Meeta MCP proxy.
//! POSTs JSON envelopes to the configured endpoint and parses the JSON reply.

mod client;
mod error;

pub use client::{HttpUpstream, Upstream, USER_AGENT};
pub use error::UpstreamError;
