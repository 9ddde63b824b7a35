//! Proxy mode: MCP over stdio, forwarded to the remote HTTP endpoint.

use std::sync::Arc;

use tracing::{error, info};

use meeta_config::ProxyConfig;
use meeta_transport_stdio::{McpHandler, McpServer, StdioTransport};
use meeta_upstream::HttpUpstream;

/// Runs the proxy until stdin closes or a termination signal arrives.
///
/// On a signal, in-flight outbound calls are abandoned.
pub async fn execute(config: ProxyConfig) -> anyhow::Result<()> {
    let upstream = HttpUpstream::from_config(&config)?;

    info!("Meeta MCP HTTP proxy started");
    info!(endpoint = %upstream.endpoint(), timeout_secs = config.timeout_secs, "API endpoint");

    let handler = McpHandler::new(Arc::new(upstream));
    let transport = StdioTransport::new(tokio::io::stdin(), tokio::io::stdout());
    let mut server = McpServer::new(transport, handler);

    tokio::select! {
        result = server.run() => {
            result.map_err(|e| anyhow::anyhow!("server error: {e}"))?;
        }
        _ = shutdown_signal() => {
            info!("shutting down");
            // The blocking stdin read cannot be cancelled, so runtime
            // teardown could hang until the next input line.
            std::process::exit(0);
        }
    }

    Ok(())
}

/// Resolves on SIGINT or, on unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "failed to listen for SIGINT");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
