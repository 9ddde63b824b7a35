//! Shared fixtures for meeta-transport-stdio integration tests.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use meeta_mcp::McpHandler;
use meeta_transport_stdio::{McpServer, StdioTransport};
use meeta_upstream::{Upstream, UpstreamError};

/// Remote endpoint behaviour for a test run.
#[derive(Debug, Clone)]
pub enum Reply {
    /// Resolve immediately with this JSON body.
    Json(Value),
    /// Resolve with this JSON body after a delay.
    Slow(Duration, Value),
    /// Reject as a timeout.
    Timeout,
}

/// In-process `Upstream` recording every envelope it receives.
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
            Reply::Slow(delay, v) => {
                tokio::time::sleep(*delay).await;
                Ok(v.clone())
            }
            Reply::Timeout => Err(UpstreamError::Timeout),
        }
    }
}

/// Runs a server over `input` to completion and returns everything it
/// wrote, together with the fake upstream for call inspection.
pub async fn run_server(input: &str, reply: Reply) -> (String, Arc<FakeUpstream>) {
    run_server_bytes(input.as_bytes(), reply).await
}

/// Like [`run_server`], for input that need not be valid UTF-8.
pub async fn run_server_bytes(input: &[u8], reply: Reply) -> (String, Arc<FakeUpstream>) {
    let upstream = FakeUpstream::new(reply);
    let handler = McpHandler::new(upstream.clone());

    let mut output = Vec::new();
    let transport = StdioTransport::new(input, &mut output);
    let mut server = McpServer::new(transport, handler);
    server.run().await.expect("run");

    (String::from_utf8(output).expect("utf8"), upstream)
}

/// Splits concatenated `Content-Length` frames into their JSON bodies,
/// checking each declared length against the body's byte length.
pub fn split_frames(output: &str) -> Vec<Value> {
    let mut rest = output;
    let mut bodies = Vec::new();
    while !rest.is_empty() {
        let (header, tail) = rest.split_once("\r\n\r\n").expect("frame separator");
        let len: usize = header
            .strip_prefix("Content-Length: ")
            .expect("length header")
            .parse()
            .expect("numeric length");
        let (body, next) = tail.split_at(len);
        bodies.push(serde_json::from_str(body).expect("frame body is json"));
        rest = next;
    }
    bodies
}
