//! MCP request handler: routes JSON-RPC messages to local answers or
//! to the remote endpoint.
//!
//! Every request produces exactly one `JsonRpcOutput`; failures of the
//! outbound call are folded into JSON-RPC error responses here and never
//! escape to the transport.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use meeta_protocol::{error_codes, methods, JsonRpcErrorResponse, JsonRpcRequest, JsonRpcResponse};
use meeta_upstream::Upstream;

use crate::classify::{classify, Incoming};
use crate::dispatch;

/// Output of a dispatched request: either success or error.
#[derive(Debug, Clone)]
pub enum JsonRpcOutput {
    /// Successful response.
    Success(JsonRpcResponse),
    /// Error response.
    Error(JsonRpcErrorResponse),
}

impl JsonRpcOutput {
    /// Serializes the output to a JSON string.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the result value cannot be encoded.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        match self {
            Self::Success(r) => serde_json::to_string(r),
            Self::Error(r) => serde_json::to_string(r),
        }
    }

    /// Returns `true` for error responses.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// Translates JSON-RPC messages into responses.
///
/// Cheap to clone; the upstream client is shared.
#[derive(Clone)]
pub struct McpHandler {
    upstream: Arc<dyn Upstream>,
}

impl McpHandler {
    /// Creates a handler that forwards to `upstream`.
    pub fn new(upstream: Arc<dyn Upstream>) -> Self {
        Self { upstream }
    }

    /// Handles one assembled JSON value.
    ///
    /// Returns `None` for notifications, which must not be answered.
    pub async fn handle_message(&self, message: Value) -> Option<JsonRpcOutput> {
        match classify(message) {
            Incoming::Request { request, raw } => Some(self.dispatch(&request, &raw).await),
            Incoming::Notification(notif) => {
                debug!(method = %notif.method, "received notification");
                None
            }
            Incoming::Invalid { id, reason } => {
                warn!(%reason, "rejecting invalid request");
                Some(JsonRpcOutput::Error(JsonRpcErrorResponse::error(
                    id,
                    error_codes::INVALID_REQUEST,
                    reason,
                )))
            }
        }
    }

    /// Dispatches a request by method name.
    ///
    /// `raw` is the request object exactly as received; methods without a
    /// dedicated mapping forward it unmodified.
    pub async fn dispatch(&self, request: &JsonRpcRequest, raw: &Value) -> JsonRpcOutput {
        debug!(method = %request.method, id = ?request.id, "received request");
        let id = request.id.clone();

        match request.method.as_str() {
            methods::INITIALIZE => dispatch::initialize::handle_initialize(id),
            methods::TOOLS_LIST => {
                dispatch::tools_list::handle_tools_list(id, self.upstream.as_ref()).await
            }
            methods::TOOLS_CALL => {
                dispatch::tools_call::handle_tools_call(id, &request.params, self.upstream.as_ref())
                    .await
            }
            _ => dispatch::passthrough::handle_passthrough(id, raw, self.upstream.as_ref()).await,
        }
    }
}
