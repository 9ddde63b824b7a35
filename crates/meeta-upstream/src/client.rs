//! HTTP client that POSTs JSON envelopes to the remote MCP endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;
use tracing::{debug, trace};

use meeta_config::ProxyConfig;

use crate::error::UpstreamError;

/// `User-Agent` sent with every outbound request.
pub const USER_AGENT: &str = concat!("meeta-mcp-proxy/", env!("CARGO_PKG_VERSION"));

/// Abstract outbound call (port).
///
/// One call per forwarded request; no retries, no pooling guarantees.
#[async_trait]
pub trait Upstream: Send + Sync {
    /// POSTs `body` and returns the parsed JSON reply.
    async fn call(&self, body: &Value) -> Result<Value, UpstreamError>;
}

/// `reqwest`-backed implementation of [`Upstream`].
#[derive(Debug, Clone)]
pub struct HttpUpstream {
    client: Client,
    endpoint: Url,
}

impl HttpUpstream {
    /// Creates a client for `endpoint` with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns `UpstreamError::InvalidEndpoint` if the endpoint is not an
    /// absolute `http`/`https` URL, or `Transport` if the TLS backend
    /// cannot be initialised.
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, UpstreamError> {
        let endpoint = parse_endpoint(endpoint)?;
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client, endpoint })
    }

    /// Creates a client from the resolved proxy configuration.
    ///
    /// # Errors
    ///
    /// See [`HttpUpstream::new`].
    pub fn from_config(config: &ProxyConfig) -> Result<Self, UpstreamError> {
        Self::new(&config.endpoint, config.timeout())
    }

    /// The endpoint this client posts to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl Upstream for HttpUpstream {
    async fn call(&self, body: &Value) -> Result<Value, UpstreamError> {
        debug!(endpoint = %self.endpoint, payload = %body, "sending");

        let resp = self
            .client
            .post(self.endpoint.clone())
            .json(body)
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;
        trace!(%status, len = text.len(), "received response");

        serde_json::from_str(&text).map_err(|_| UpstreamError::InvalidResponse { body: text })
    }
}

/// Validates that `endpoint` is an absolute http(s) URL with a host.
fn parse_endpoint(endpoint: &str) -> Result<Url, UpstreamError> {
    let invalid = |reason: String| UpstreamError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason,
    };

    let url = Url::parse(endpoint).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(invalid(format!("unsupported scheme '{other}'"))),
    }
    if url.host_str().is_none() {
        return Err(invalid("missing host".to_string()));
    }
    Ok(url)
}
