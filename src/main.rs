//! Dictionary MCP Server Entry Point
//!
//! Initializes logging, loads configuration, and serves MCP over the
//! configured transport (stdio unless told otherwise).

use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use dictionary_mcp_server::core::{Config, DictionaryServer, TransportService};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);
    info!("Dictionary API: {}", config.dictionary.api_base_url);

    serve(config).await?;

    info!("Server shutting down");

    Ok(())
}

/// Build the server and run it on the configured transport.
async fn serve(config: Config) -> dictionary_mcp_server::Result<()> {
    let server = DictionaryServer::new(config.clone())?;

    let transport = TransportService::new(config.transport);
    transport.run(server).await?;

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr; stdout carries the protocol.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
