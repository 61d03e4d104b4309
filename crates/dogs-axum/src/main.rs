//! `dogs-server` entry point - the composition root.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use dogs_axum::{ServerConfig, start_server};
use dogs_core::AppConfig;

/// Dogs HTTP service.
#[derive(Debug, Parser)]
#[command(name = "dogs-server", version, about)]
struct Cli {
    /// Env file to load configuration from instead of `.env`.
    #[arg(long, env = "DOGS_ENV_FILE")]
    env_file: Option<PathBuf>,

    /// Override the listen host.
    #[arg(long)]
    host: Option<String>,

    /// Override the listen port.
    #[arg(long)]
    port: Option<u16>,

    /// Allowed CORS origins (repeatable). All origins are allowed when omitted.
    #[arg(long = "allow-origin")]
    allowed_origins: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    let mut config = match &cli.env_file {
        Some(path) => AppConfig::from_env_file(path)?,
        None => {
            // Load environment variables
            dotenvy::dotenv().ok();
            AppConfig::from_env()?
        }
    };

    if let Some(host) = cli.host {
        config.http.host = host;
    }
    if let Some(port) = cli.port {
        config.http.port = port;
    }

    let mut server_config = ServerConfig::from_app_config(config);
    if !cli.allowed_origins.is_empty() {
        server_config = server_config.with_allowed_origins(cli.allowed_origins);
    }

    start_server(server_config).await
}
