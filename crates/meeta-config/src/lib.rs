//! # meeta-config
//!
//! Configuration management for the Meeta MCP proxy.
//! Supports layered config: defaults -> file -> CLI argument -> env vars.

pub mod loader;
pub mod schema;

pub use loader::{load_config, self_test_config, ConfigError};
pub use schema::{ProxyConfig, DEFAULT_ENDPOINT};
