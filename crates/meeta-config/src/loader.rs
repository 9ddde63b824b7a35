//! Configuration loader (file + CLI + env merge).

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use thiserror::Error;

use crate::schema::{ProxyConfig, DEFAULT_ENDPOINT};

/// Environment variable overriding the endpoint URL.
pub const ENDPOINT_ENV: &str = "MEETA_MCP_ENDPOINT";
/// Environment variable overriding the outbound timeout.
pub const TIMEOUT_ENV: &str = "MEETA_TIMEOUT_SECS";
/// Environment variable enabling diagnostics when set to `true`.
pub const DEBUG_ENV: &str = "DEBUG";

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to load or merge configuration.
    #[error("configuration error: {0}")]
    Load(String),
}

/// Loads configuration by merging layers, lowest priority first:
/// 1. Default values
/// 2. Config file (if given)
/// 3. Endpoint passed on the command line (if given)
/// 4. Environment variables (`MEETA_MCP_ENDPOINT`, `MEETA_TIMEOUT_SECS`, `DEBUG`)
///
/// An empty endpoint, from the argument or the environment, counts as
/// unset and falls through to the next layer down.
pub fn load_config(
    config_path: Option<&str>,
    endpoint_arg: Option<&str>,
) -> Result<ProxyConfig, ConfigError> {
    let mut figment = Figment::from(Serialized::defaults(ProxyConfig::default()));

    if let Some(path) = config_path {
        figment = figment.merge(Toml::file(path));
    }

    if let Some(endpoint) = endpoint_arg.filter(|e| !e.is_empty()) {
        figment = figment.merge(Serialized::default("endpoint", endpoint));
    }

    figment = figment.merge(env_provider());

    figment
        .extract()
        .map_err(|e| ConfigError::Load(e.to_string()))
}

/// Builds the configuration for the `--test` connectivity check.
///
/// Only the explicit URL (or the built-in default) is used; environment
/// overrides do not apply to this path.
pub fn self_test_config(url: Option<&str>) -> ProxyConfig {
    ProxyConfig::with_endpoint(url.unwrap_or(DEFAULT_ENDPOINT))
}

fn env_provider() -> Env {
    Env::raw().filter_map(|key| {
        let key = key.as_str();
        if key.eq_ignore_ascii_case(ENDPOINT_ENV) {
            is_set(key).then(|| "endpoint".into())
        } else if key.eq_ignore_ascii_case(TIMEOUT_ENV) {
            Some("timeout_secs".into())
        } else if key.eq_ignore_ascii_case(DEBUG_ENV) {
            Some("debug".into())
        } else {
            None
        }
    })
}

fn is_set(key: &str) -> bool {
    std::env::var(key).is_ok_and(|v| !v.is_empty())
}
