//! Soil analysis service
//!
//! Asks the upstream prediction service first when one is configured and
//! falls back to the local rule engine on any failure. There is a single
//! attempt per request.

use shared::{recommend, AnalysisSource, Recommendation, SoilSample};

use crate::external::PredictionClient;

/// A recommendation together with where it came from
#[derive(Debug, Clone)]
pub struct Analysis {
    pub recommendation: Recommendation,
    pub source: AnalysisSource,
}

/// Analysis service shared by the HTTP handlers
#[derive(Clone, Default)]
pub struct AnalysisService {
    client: Option<PredictionClient>,
}

impl AnalysisService {
    pub fn new(client: Option<PredictionClient>) -> Self {
        Self { client }
    }

    /// Service that only ever uses the local engine
    pub fn local() -> Self {
        Self::default()
    }

    pub fn has_remote(&self) -> bool {
        self.client.is_some()
    }

    /// Analyze a validated sample
    pub async fn analyze(&self, sample: &SoilSample) -> Analysis {
        if let Some(client) = &self.client {
            match client.predict(sample).await {
                Ok(recommendation) => {
                    tracing::debug!(
                        "Prediction service recommended {} ({}%)",
                        recommendation.crop,
                        recommendation.confidence
                    );
                    return Analysis {
                        recommendation,
                        source: AnalysisSource::Remote,
                    };
                }
                Err(e) => {
                    tracing::warn!(
                        "Prediction service at {} failed, using local engine: {}",
                        client.endpoint(),
                        e
                    );
                }
            }
        }

        let recommendation = recommend(sample);
        tracing::debug!(
            "Local engine recommended {} ({}%), soil health {}",
            recommendation.crop,
            recommendation.confidence,
            recommendation.soil_health
        );
        Analysis {
            recommendation,
            source: AnalysisSource::Local,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Crop;

    #[tokio::test]
    async fn test_local_service_uses_engine() {
        let service = AnalysisService::local();
        let sample = SoilSample::new(45.0, 30.0, 25.0, 6.5, 35.0);

        let analysis = service.analyze(&sample).await;

        assert!(!service.has_remote());
        assert_eq!(analysis.source, AnalysisSource::Local);
        assert_eq!(analysis.recommendation.crop, Crop::Rice);
        assert_eq!(analysis.recommendation, recommend(&sample));
    }
}
