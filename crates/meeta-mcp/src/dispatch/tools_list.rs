//! Handles the `tools/list` MCP method.

use serde_json::{json, Value};

use meeta_protocol::mcp::tools::ToolsListResult;
use meeta_protocol::{methods, OutboundEnvelope, RequestId};
use meeta_upstream::Upstream;

use super::{success, upstream_failure};
use crate::handler::JsonRpcOutput;

/// Forwards `{method: "tools/list", params: {}}` and relays the remote
/// `tools` member.
pub(crate) async fn handle_tools_list(id: RequestId, upstream: &dyn Upstream) -> JsonRpcOutput {
    let body = OutboundEnvelope::new(methods::TOOLS_LIST, json!({})).into_value();
    let reply = match upstream.call(&body).await {
        Ok(r) => r,
        Err(e) => return upstream_failure(id, e),
    };

    success(
        id,
        ToolsListResult {
            tools: extract_tools(reply),
        },
    )
}

/// Takes the `tools` member of the remote reply. An absent member or an
/// empty-ish one (`null`, `false`, `0`, `""`) becomes an empty list.
pub(crate) fn extract_tools(reply: Value) -> Value {
    match reply {
        Value::Object(mut obj) => match obj.remove("tools") {
            Some(tools) if !is_empty_ish(&tools) => tools,
            _ => Value::Array(Vec::new()),
        },
        _ => Value::Array(Vec::new()),
    }
}

fn is_empty_ish(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_tools_present() {
        let tools = extract_tools(json!({"tools": [{"name": "echo"}], "extra": 1}));
        assert_eq!(tools, json!([{"name": "echo"}]));
    }

    #[test]
    fn extract_tools_absent_defaults_to_empty() {
        assert_eq!(extract_tools(json!({"other": true})), json!([]));
    }

    #[test]
    fn extract_tools_null_defaults_to_empty() {
        assert_eq!(extract_tools(json!({"tools": null})), json!([]));
    }

    #[test]
    fn extract_tools_falsy_values_default_to_empty() {
        for falsy in [json!(false), json!(0), json!(0.0), json!("")] {
            assert_eq!(extract_tools(json!({"tools": falsy})), json!([]));
        }
    }

    #[test]
    fn extract_tools_keeps_other_scalars_and_empty_arrays() {
        assert_eq!(extract_tools(json!({"tools": []})), json!([]));
        assert_eq!(extract_tools(json!({"tools": "x"})), json!("x"));
        assert_eq!(extract_tools(json!({"tools": true})), json!(true));
    }

    #[test]
    fn extract_tools_non_object_reply_defaults_to_empty() {
        assert_eq!(extract_tools(json!("oops")), json!([]));
        assert_eq!(extract_tools(json!([1, 2])), json!([]));
    }
}
