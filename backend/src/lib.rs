//! AgroSense soil analysis server
//!
//! Serves the soil recommendation engine over HTTP. The form posts samples
//! to `/api/analyze-soil`; an optional upstream prediction service is tried
//! first and the local engine answers whenever it is unavailable.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod routes;
pub mod services;

pub use config::Config;

use error::AppResult;
use external::PredictionClient;
use services::AnalysisService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub analysis: AnalysisService,
}

impl AppState {
    /// Build state from configuration, wiring the prediction client if set
    pub fn from_config(config: Config) -> AppResult<Self> {
        let client = PredictionClient::from_config(&config.prediction)?;
        Ok(Self {
            config: Arc::new(config),
            analysis: AnalysisService::new(client),
        })
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers([axum::http::HeaderName::from_static(
            handlers::ANALYSIS_SOURCE_HEADER,
        )]);

    Router::new()
        .route("/", get(root))
        .route("/health", get(handlers::health_check))
        .nest("/api", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "AgroSense Soil Analysis API v1.0"
}
