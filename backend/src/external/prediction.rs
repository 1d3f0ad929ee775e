//! Prediction Service Client
//!
//! Client for the upstream soil-analysis service. It accepts the same JSON
//! sample the form posts and answers with a recommendation of the same shape
//! the local engine produces.

use std::time::Duration;

use reqwest::Client;
use shared::{Recommendation, SoilSample};

use crate::config::PredictionConfig;
use crate::error::{AppError, AppResult};

/// Client for the upstream prediction service
#[derive(Clone)]
pub struct PredictionClient {
    api_endpoint: String,
    api_key: Option<String>,
    http_client: Client,
}

impl PredictionClient {
    /// Create a new prediction client
    pub fn new(api_endpoint: String, api_key: Option<String>, timeout: Duration) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_endpoint,
            api_key,
            http_client,
        })
    }

    /// Create a client from configuration, `None` when no endpoint is set
    pub fn from_config(config: &PredictionConfig) -> AppResult<Option<Self>> {
        let Some(endpoint) = config.endpoint() else {
            return Ok(None);
        };

        let client = Self::new(
            endpoint.to_string(),
            config.api_key.clone(),
            Duration::from_secs(config.timeout_secs),
        )?;
        Ok(Some(client))
    }

    pub fn endpoint(&self) -> &str {
        &self.api_endpoint
    }

    /// Send a sample for analysis
    pub async fn predict(&self, sample: &SoilSample) -> AppResult<Recommendation> {
        let mut request = self
            .http_client
            .post(&self.api_endpoint)
            .header("Content-Type", "application/json")
            .json(sample);
        if let Some(key) = &self.api_key {
            request = request.header("x-api-key", key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::PredictionService(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::PredictionService(format!(
                "API returned {}: {}",
                status, body
            )));
        }

        let result: Recommendation = response
            .json()
            .await
            .map_err(|e| AppError::PredictionService(format!("Failed to parse response: {}", e)))?;

        Ok(result)
    }
}
