//! `--test` mode: one `tools/list` round trip against the endpoint.

use std::io::Write;
use std::process::ExitCode;

use serde_json::{json, Value};

use meeta_config::self_test_config;
use meeta_protocol::{methods, OutboundEnvelope};
use meeta_upstream::{HttpUpstream, Upstream, UpstreamError};

/// Picks the URL to test: the given argument when it looks like one,
/// otherwise the built-in default. Environment overrides do not apply.
pub fn test_url(arg: Option<&str>) -> Option<&str> {
    arg.filter(|a| a.starts_with("http"))
}

/// Executes the connectivity check, reporting on stdout/stderr.
pub async fn execute(arg: Option<&str>) -> ExitCode {
    let config = self_test_config(test_url(arg));
    println!("Testing connection to: {}", config.endpoint);

    let result = match HttpUpstream::from_config(&config) {
        Ok(upstream) => list_tools(&upstream).await,
        Err(e) => Err(e),
    };

    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();
    if report(result, &mut stdout, &mut stderr) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Sends `{"method":"tools/list","params":{}}` and returns the raw reply.
pub async fn list_tools(upstream: &dyn Upstream) -> Result<Value, UpstreamError> {
    let body = OutboundEnvelope::new(methods::TOOLS_LIST, json!({})).into_value();
    upstream.call(&body).await
}

/// Writes the outcome and returns `true` on success.
pub fn report(
    result: Result<Value, UpstreamError>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> bool {
    match result {
        Ok(reply) => {
            let pretty = serde_json::to_string_pretty(&reply).unwrap_or_else(|_| reply.to_string());
            let _ = writeln!(out, "Success! Available tools:");
            let _ = writeln!(out, "{pretty}");
            true
        }
        Err(e) => {
            let _ = writeln!(err, "Connection failed: {e}");
            false
        }
    }
}
