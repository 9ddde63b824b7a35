//! The JSON body POSTed to the remote MCP HTTP endpoint.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Outbound HTTP envelope: `{ "method": ..., "params": ... }`.
///
/// Built per forwarded request and dropped once the call completes.
/// Unknown methods bypass this type and forward the raw request object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutboundEnvelope {
    /// Remote method name.
    pub method: String,
    /// Method parameters.
    pub params: Value,
}

impl OutboundEnvelope {
    /// Creates a new envelope.
    pub fn new(method: impl Into<String>, params: Value) -> Self {
        Self {
            method: method.into(),
            params,
        }
    }

    /// Converts the envelope into the JSON body to POST.
    pub fn into_value(self) -> Value {
        let mut obj = Map::new();
        obj.insert("method".to_string(), Value::String(self.method));
        obj.insert("params".to_string(), self.params);
        Value::Object(obj)
    }
}
