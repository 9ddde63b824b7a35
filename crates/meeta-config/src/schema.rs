//! Configuration schema types.

use serde::{Deserialize, Deserializer, Serialize};
use std::time::Duration;

/// Endpoint used when neither the environment nor the command line names one.
pub const DEFAULT_ENDPOINT: &str =
    "https://izlh8w6043.execute-api.ap-northeast-1.amazonaws.com/dev/mcp";

/// Top-level proxy configuration.
///
/// Resolved once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyConfig {
    /// URL of the remote MCP HTTP endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Outbound request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Emit diagnostics on stderr.
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub debug: bool,
}

impl ProxyConfig {
    /// Returns a configuration pointing at `endpoint` with default settings.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    /// Returns the outbound timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            debug: false,
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}
fn default_timeout_secs() -> u64 {
    30
}

/// Only a literal `true` turns the flag on; any other value reads as off.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b,
        Flag::Text(s) => s == "true",
        Flag::Other(_) => false,
    })
}
