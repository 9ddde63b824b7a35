//! Forwards methods without a dedicated mapping.

use serde_json::Value;

use meeta_protocol::{JsonRpcResponse, RequestId};
use meeta_upstream::Upstream;

use super::upstream_failure;
use crate::handler::JsonRpcOutput;

/// Sends the original request object unmodified and returns the remote
/// reply verbatim as the result.
pub(crate) async fn handle_passthrough(
    id: RequestId,
    raw: &Value,
    upstream: &dyn Upstream,
) -> JsonRpcOutput {
    match upstream.call(raw).await {
        Ok(reply) => JsonRpcOutput::Success(JsonRpcResponse::success(id, reply)),
        Err(e) => upstream_failure(id, e),
    }
}
