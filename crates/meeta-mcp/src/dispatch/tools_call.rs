//! Handles the `tools/call` MCP method.

use serde_json::Value;

use meeta_protocol::mcp::tools::{ToolContent, ToolsCallParams, ToolsCallResult};
use meeta_protocol::{error_codes, methods, JsonRpcErrorResponse, OutboundEnvelope, RequestId};
use meeta_upstream::Upstream;

use super::{success, upstream_failure};
use crate::handler::JsonRpcOutput;

/// Handles the `tools/call` request.
///
/// Params are validated before anything is sent: the outbound envelope's
/// params are exactly `{name, arguments}` from the request.
pub(crate) async fn handle_tools_call(
    id: RequestId,
    params: &Option<Value>,
    upstream: &dyn Upstream,
) -> JsonRpcOutput {
    // 1. Parse params
    let call_params = match params {
        Some(p @ Value::Object(_)) => match serde_json::from_value::<ToolsCallParams>(p.clone()) {
            Ok(cp) => cp,
            Err(e) => {
                return JsonRpcOutput::Error(JsonRpcErrorResponse::error(
                    id,
                    error_codes::INVALID_PARAMS,
                    format!("invalid tools/call params: {e}"),
                ));
            }
        },
        _ => {
            return JsonRpcOutput::Error(JsonRpcErrorResponse::error(
                id,
                error_codes::INVALID_PARAMS,
                "tools/call requires params object",
            ));
        }
    };

    // 2. Forward
    tracing::debug!(tool = %call_params.name, "forwarding tool call");
    let ToolsCallParams { name, arguments } = call_params;
    let body = OutboundEnvelope::new(
        methods::TOOLS_CALL,
        serde_json::json!({ "name": name, "arguments": arguments }),
    )
    .into_value();

    let reply = match upstream.call(&body).await {
        Ok(r) => r,
        Err(e) => return upstream_failure(id, e),
    };

    // 3. Wrap the reply as a single text block
    let text = match render_text(reply) {
        Ok(t) => t,
        Err(e) => {
            return JsonRpcOutput::Error(JsonRpcErrorResponse::error(
                id,
                error_codes::INTERNAL_ERROR,
                e.to_string(),
            ))
        }
    };

    success(
        id,
        ToolsCallResult {
            content: vec![ToolContent::Text { text }],
        },
    )
}

/// Plain strings pass through; anything else is pretty-printed JSON.
pub(crate) fn render_text(reply: Value) -> Result<String, serde_json::Error> {
    match reply {
        Value::String(s) => Ok(s),
        other => serde_json::to_string_pretty(&other),
    }
}
