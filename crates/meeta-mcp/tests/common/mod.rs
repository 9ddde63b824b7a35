//! Shared fixtures for meeta-mcp integration tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use meeta_mcp::McpHandler;
use meeta_upstream::{Upstream, UpstreamError};

/// What the fake remote endpoint does when called.
#[derive(Debug, Clone)]
pub enum Reply {
    /// Resolve with this JSON body.
    Json(Value),
    /// Reject as a timeout.
    Timeout,
    /// Reject as a connection failure.
    Refused,
    /// Reject as an unparseable body.
    Garbage(String),
}

/// In-process `Upstream` that records every body it is sent.
pub struct FakeUpstream {
    reply: Reply,
    calls: Mutex<Vec<Value>>,
}

impl FakeUpstream {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: Mutex::new(Vec::new()),
        })
    }

    /// Bodies received so far, in call order.
    pub fn calls(&self) -> Vec<Value> {
        self.calls.lock().expect("lock").clone()
    }
}

#[async_trait]
impl Upstream for FakeUpstream {
    async fn call(&self, body: &Value) -> Result<Value, UpstreamError> {
        self.calls.lock().expect("lock").push(body.clone());
        match &self.reply {
            Reply::Json(v) => Ok(v.clone()),
            Reply::Timeout => Err(UpstreamError::Timeout),
            Reply::Refused => Err(UpstreamError::Transport(
                "error sending request: connection refused".to_string(),
            )),
            Reply::Garbage(body) => Err(UpstreamError::InvalidResponse { body: body.clone() }),
        }
    }
}

/// Builds a handler backed by a fake upstream with the given reply.
pub fn make_handler(reply: Reply) -> (McpHandler, Arc<FakeUpstream>) {
    let upstream = FakeUpstream::new(reply);
    (McpHandler::new(upstream.clone()), upstream)
}
