//! Route definitions for the AgroSense API

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/analyze-soil", post(handlers::analyze_soil))
        .route("/crop-rules", get(handlers::list_crop_rules))
}
