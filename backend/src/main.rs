//! AgroSense - Soil Analysis Server
//!
//! Recommends crops, companion plants and organic fertilizers from
//! soil nutrient measurements.

use std::net::SocketAddr;

use agrosense_backend::{create_app, AppState, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "agrosense_server=debug,agrosense_backend=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting AgroSense Server");
    tracing::info!("Environment: {}", config.environment);
    match config.prediction.endpoint() {
        Some(endpoint) => tracing::info!("Prediction service: {}", endpoint),
        None => tracing::info!("No prediction service configured, using local engine"),
    }

    let host: std::net::IpAddr = config.server.host.parse()?;
    let addr = SocketAddr::new(host, config.server.port);

    // Create application state
    let state = AppState::from_config(config)?;

    // Build application
    let app = create_app(state);

    // Start server
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
