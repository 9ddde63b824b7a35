//! MCP tools/* method types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response for `tools/list`.
///
/// Tool definitions are owned by the remote endpoint and are relayed
/// without reinterpretation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsListResult {
    /// Available tools, as returned by the remote endpoint.
    pub tools: Value,
}

/// Request params for `tools/call`.
///
/// `arguments` is required: a missing member is rejected rather than
/// forwarded as a partial envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolsCallParams {
    /// Name of the tool to invoke.
    pub name: String,
    /// Arguments to pass, forwarded verbatim.
    pub arguments: Value,
}

/// Content item in a tool call response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ToolContent {
    /// Text content.
    Text { text: String },
}

/// Response for `tools/call`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsCallResult {
    /// Content items returned by the tool.
    pub content: Vec<ToolContent>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tools_call_params_serde() {
        let j = r#"{"name":"echo","arguments":{"x":1}}"#;
        let p: ToolsCallParams = serde_json::from_str(j).expect("de");
        assert_eq!(p.name, "echo");
        assert_eq!(p.arguments["x"], 1);
    }

    #[test]
    fn tools_call_params_require_arguments() {
        let j = r#"{"name":"echo"}"#;
        assert!(serde_json::from_str::<ToolsCallParams>(j).is_err());
    }

    #[test]
    fn tools_call_params_accept_null_arguments() {
        let j = r#"{"name":"echo","arguments":null}"#;
        let p: ToolsCallParams = serde_json::from_str(j).expect("de");
        assert!(p.arguments.is_null());
    }

    #[test]
    fn tool_content_text_variant() {
        let c = ToolContent::Text {
            text: "hello".into(),
        };
        let s = serde_json::to_string(&c).expect("ser");
        assert_eq!(s, r#"{"type":"text","text":"hello"}"#);
    }

    #[test]
    fn tools_list_result_wraps_raw_value() {
        let r = ToolsListResult {
            tools: json!([{"name": "echo"}]),
        };
        let s = serde_json::to_string(&r).expect("ser");
        assert_eq!(s, r#"{"tools":[{"name":"echo"}]}"#);
    }
}
