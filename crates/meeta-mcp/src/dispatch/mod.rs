//! MCP method dispatch functions.
//!
//! Each sub-module handles one MCP method as a free function,
//! keeping `McpHandler` itself thin (struct + routing only).

pub(crate) mod initialize;
pub(crate) mod passthrough;
pub(crate) mod tools_call;
pub(crate) mod tools_list;

use serde::Serialize;
use tracing::warn;

use meeta_protocol::{error_codes, JsonRpcErrorResponse, JsonRpcResponse, RequestId};
use meeta_upstream::UpstreamError;

use crate::handler::JsonRpcOutput;

/// Message used for every failed outbound call.
pub(crate) const INTERNAL_ERROR_MESSAGE: &str = "Internal error";

/// Converts a failed outbound call into a JSON-RPC internal error,
/// attaching the failure text as `data`.
pub(crate) fn upstream_failure(id: RequestId, err: UpstreamError) -> JsonRpcOutput {
    warn!(error = %err, "remote call failed");
    JsonRpcOutput::Error(
        JsonRpcErrorResponse::error(id, error_codes::INTERNAL_ERROR, INTERNAL_ERROR_MESSAGE)
            .with_data(err.to_string()),
    )
}

/// Wraps a typed result into a success response.
pub(crate) fn success<T: Serialize>(id: RequestId, result: T) -> JsonRpcOutput {
    match serde_json::to_value(result) {
        Ok(v) => JsonRpcOutput::Success(JsonRpcResponse::success(id, v)),
        Err(e) => JsonRpcOutput::Error(JsonRpcErrorResponse::error(
            id,
            error_codes::INTERNAL_ERROR,
            e.to_string(),
        )),
    }
}
