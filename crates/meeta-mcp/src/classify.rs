//! Classification of assembled JSON values into JSON-RPC message kinds.
//!
//! The frame assembler hands over any value that parsed as JSON. This
//! module decides whether it is a request (answered), a notification
//! (never answered) or something that must be rejected as an invalid
//! request.

use serde_json::Value;

use meeta_protocol::{JsonRpcNotification, JsonRpcRequest, RequestId, JSONRPC_VERSION};

/// A classified incoming message.
#[derive(Debug, Clone)]
pub enum Incoming {
    /// A request carrying an `id`; exactly one response is owed.
    Request {
        /// Typed view of the request.
        request: JsonRpcRequest,
        /// The message exactly as received, for verbatim forwarding.
        raw: Value,
    },
    /// A message without an `id`.
    Notification(JsonRpcNotification),
    /// Not a valid JSON-RPC request.
    Invalid {
        /// The request ID when one could be recovered, otherwise `null`.
        id: RequestId,
        /// Why the message was rejected.
        reason: String,
    },
}

/// Classifies a parsed JSON value.
pub fn classify(raw: Value) -> Incoming {
    let Some(obj) = raw.as_object() else {
        return invalid(RequestId::Null, "request must be a JSON object");
    };

    let Some(id_value) = obj.get("id") else {
        return match serde_json::from_value::<JsonRpcNotification>(raw) {
            Ok(notif) if notif.jsonrpc == JSONRPC_VERSION => Incoming::Notification(notif),
            Ok(_) => invalid(RequestId::Null, "unsupported jsonrpc version"),
            Err(e) => invalid(RequestId::Null, format!("invalid request: {e}")),
        };
    };

    let Some(id) = RequestId::from_value(id_value) else {
        return invalid(RequestId::Null, "invalid id field");
    };

    match serde_json::from_value::<JsonRpcRequest>(raw.clone()) {
        Ok(request) if request.jsonrpc == JSONRPC_VERSION => Incoming::Request { request, raw },
        Ok(_) => invalid(id, "unsupported jsonrpc version"),
        Err(e) => invalid(id, format!("invalid request: {e}")),
    }
}

fn invalid(id: RequestId, reason: impl Into<String>) -> Incoming {
    Incoming::Invalid {
        id,
        reason: reason.into(),
    }
}
