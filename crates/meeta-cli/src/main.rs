//! Meeta MCP proxy - bridges a stdio MCP client to the remote HTTP endpoint.

use std::process::ExitCode;

use clap::Parser;

mod commands;
mod logging;

/// Meeta MCP HTTP proxy: speaks MCP on stdin/stdout and forwards to a
/// remote HTTP endpoint.
#[derive(Debug, Parser)]
#[command(name = "meeta-mcp-proxy", version, about)]
struct Cli {
    /// Remote MCP endpoint URL (overridden by MEETA_MCP_ENDPOINT).
    endpoint: Option<String>,

    /// Send one tools/list request to the endpoint and exit.
    #[arg(long)]
    test: bool,

    /// Configuration file path (TOML).
    #[arg(short, long)]
    config: Option<String>,

    /// Verbosity level (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Log output format: plain (default) or json (for log aggregation).
    #[arg(long, default_value = "plain", value_parser = ["plain", "json"])]
    log_format: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.test {
        logging::init(cli.verbose, false, &cli.log_format);
        return Ok(commands::selftest::execute(cli.endpoint.as_deref()).await);
    }

    let config = meeta_config::load_config(cli.config.as_deref(), cli.endpoint.as_deref())?;
    logging::init(cli.verbose, config.debug, &cli.log_format);
    tracing::debug!(config = ?cli.config, "configuration loaded");

    commands::proxy::execute(config).await?;
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn positional_endpoint_is_optional() {
        let cli = Cli::try_parse_from(["meeta-mcp-proxy"]).expect("parse");
        assert!(cli.endpoint.is_none());
        assert!(!cli.test);
        assert_eq!(cli.log_format, "plain");
    }

    #[test]
    fn test_flag_with_url() {
        let cli = Cli::try_parse_from(["meeta-mcp-proxy", "--test", "https://example.com/mcp"])
            .expect("parse");
        assert!(cli.test);
        assert_eq!(cli.endpoint.as_deref(), Some("https://example.com/mcp"));
    }

    #[test]
    fn verbosity_counts() {
        let cli = Cli::try_parse_from(["meeta-mcp-proxy", "-vv"]).expect("parse");
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn unknown_log_format_is_rejected() {
        assert!(Cli::try_parse_from(["meeta-mcp-proxy", "--log-format", "xml"]).is_err());
    }
}
