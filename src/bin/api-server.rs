//! Macrolens API Server
//!
//! Read-only HTTP API serving FRED indicators, derived analytics and
//! AI-generated economic summaries. Stateless: every request re-fetches.

use dotenvy::dotenv;
use macrolens::config::{self, Config};
use macrolens::core::http::start_server;
use macrolens::logging;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging(&config::get_environment());

    let config = Config::from_env().map_err(|e| {
        error!(error = %e, "Invalid configuration");
        e
    })?;

    info!("Starting Macrolens API Server");
    info!(environment = %config.environment, "Environment");
    info!(address = %config.bind_address(), "HTTP Server: http://{}", config.bind_address());

    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(config).await {
            error!(error = %e, "HTTP server error");
        }
    });

    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down API server...");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }

    Ok(())
}
