//! HTTP handlers for soil analysis endpoints

use axum::{extract::rejection::JsonRejection, extract::State, response::IntoResponse, Json};
use shared::{rule_catalog, validate_soil_sample, RuleCatalog, SoilSample};

use crate::error::AppResult;
use crate::AppState;

/// Response header naming the engine that produced the recommendation
pub const ANALYSIS_SOURCE_HEADER: &str = "x-analysis-source";

/// Analyze a soil sample and return a crop recommendation
pub async fn analyze_soil(
    State(state): State<AppState>,
    payload: Result<Json<SoilSample>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(sample) = payload?;
    validate_soil_sample(&sample)?;

    tracing::info!(
        city = sample.city.as_deref().unwrap_or("-"),
        "Analyzing soil sample"
    );
    let analysis = state.analysis.analyze(&sample).await;

    Ok((
        [(ANALYSIS_SOURCE_HEADER, analysis.source.as_str())],
        Json(analysis.recommendation),
    ))
}

/// List the crop rules in evaluation order
pub async fn list_crop_rules() -> Json<RuleCatalog> {
    Json(rule_catalog())
}
