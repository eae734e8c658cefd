use std::{sync::Arc, time::Duration};

use acceleron_inquiry::HttpIntake;
use anyhow::Result;
use clap::{Parser, Subcommand};

/// acceleron - marketing site for Vaastu Acceleron
#[derive(Parser)]
#[command(name = "acceleron")]
#[command(about = "Vaastu Acceleron marketing site server", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = acceleron::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    acceleron::observability::init_observability(&config.observability.log_level)?;

    match cli.command {
        Commands::Serve { host, port } => serve_command(config, host, port).await,
    }
}

#[tracing::instrument(skip(config))]
async fn serve_command(
    config: acceleron::config::Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting acceleron server...");

    let host = host_override.unwrap_or_else(|| config.server.host.clone());
    let port = port_override.unwrap_or(config.server.port);

    if !config.intake_configured() {
        tracing::warn!("intake endpoint is not configured, submissions will fail");
    }

    let intake = HttpIntake::new(
        config.intake.endpoint.clone(),
        Duration::from_secs(config.intake.timeout_seconds),
    )?;

    let app = acceleron::create_app(config, Arc::new(intake));

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
