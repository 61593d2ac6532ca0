//! warehouse-gateway server entry point.
//!
//! Starts the Axum HTTP server with HTML, REST and WebSocket endpoints.

use tracing_subscriber::EnvFilter;

use warehouse_gateway::app_state::AppState;
use warehouse_gateway::config::{GatewayConfig, LogFormat};
use warehouse_gateway::router::build_app;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = GatewayConfig::from_env()?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
    tracing::info!(addr = %config.listen_addr, "starting warehouse-gateway");

    // Registry starts empty and lives for the whole process
    let app_state = AppState::new(config.event_bus_capacity);
    let app = build_app(app_state, &config);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
