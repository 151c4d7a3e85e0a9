// Standalone MCP server binary

use anyhow::Result;
use clap::Parser;
use estat_mcp::config::{ConfigOverrides, McpConfig};
use estat_mcp::server::McpServer;
use estat_mcp::tools::{EStatTool, ToolRegistry};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "estat-mcp")]
#[command(about = "MCP server for the e-Stat government statistics API", long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "estat-mcp.toml")]
    config: PathBuf,

    /// e-Stat application ID
    #[arg(long, env = "E_STAT_APP_ID", hide_env_values = true)]
    app_id: Option<String>,

    /// Override the API base URL
    #[arg(long, env = "E_STAT_BASE_URL")]
    base_url: Option<String>,

    /// Request timeout in milliseconds
    #[arg(long, env = "E_STAT_TIMEOUT_MS")]
    timeout_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up E_STAT_APP_ID from .env before clap reads the environment
    dotenv::dotenv().ok();

    // stdout carries the protocol, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("e-Stat MCP Server starting...");

    let config = McpConfig::load(&args.config)?.with_overrides(ConfigOverrides {
        app_id: args.app_id,
        base_url: args.base_url,
        timeout_ms: args.timeout_ms,
    });
    let client = config.build_client()?;

    // Create tool registry
    let mut registry = ToolRegistry::new();
    for tool in EStatTool::all(&client) {
        registry.register(tool);
    }

    tracing::info!("Registered {} tools", registry.len());

    // Start MCP server
    let server = McpServer::new(registry);
    server.start().await?;

    Ok(())
}
