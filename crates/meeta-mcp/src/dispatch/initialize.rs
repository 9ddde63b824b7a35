//! Handles the `initialize` MCP method.

use meeta_protocol::mcp::initialize::{
    InitializeResult, ResourceCapability, ServerCapabilities, ServerInfo, ToolCapability,
    PROTOCOL_VERSION,
};
use meeta_protocol::RequestId;

use super::success;
use crate::handler::JsonRpcOutput;

/// Server name reported in `serverInfo`.
pub(crate) const SERVER_NAME: &str = "meeta-mcp-proxy";

/// Answers `initialize` locally. Client params are not inspected and the
/// remote endpoint is never contacted.
pub(crate) fn handle_initialize(id: RequestId) -> JsonRpcOutput {
    let result = InitializeResult {
        protocol_version: PROTOCOL_VERSION.to_string(),
        server_info: ServerInfo {
            name: SERVER_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        capabilities: ServerCapabilities {
            tools: Some(ToolCapability {}),
            resources: Some(ResourceCapability {}),
        },
    };

    success(id, result)
}
