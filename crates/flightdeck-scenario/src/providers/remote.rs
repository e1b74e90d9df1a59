use reqwest::Client;
use serde::{Deserialize, Serialize};

use flightdeck_core::{PlaneLevel, ReaoScores};

use crate::config::RemoteEstimatorConfig;
use crate::error::EstimatorError;
use crate::traits::ScenarioEstimator;
use crate::types::{ScenarioDelta, ScenarioProjection, ScenarioRequest};

/// Estimator that delegates the projection to an external scoring
/// service speaking the estimate endpoint's JSON shape.
#[derive(Clone)]
pub struct RemoteScenarioEstimator {
    config: RemoteEstimatorConfig,
    client: Client,
}

impl RemoteScenarioEstimator {
    pub fn new(config: RemoteEstimatorConfig) -> Result<Self, EstimatorError> {
        if config.base_url.is_empty() {
            return Err(EstimatorError::Config(
                "remote estimator base url is empty".to_string(),
            ));
        }
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    fn estimate_url(&self) -> String {
        format!(
            "{}/api/scenarios/estimate",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait::async_trait]
impl ScenarioEstimator for RemoteScenarioEstimator {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn estimate(
        &self,
        request: ScenarioRequest,
    ) -> Result<ScenarioProjection, EstimatorError> {
        let delta = request.delta.clamped();
        let payload = RemoteEstimateRequest {
            assessment_id: &request.assessment_id,
            scenario: delta,
        };

        let res = self
            .client
            .post(self.estimate_url())
            .json(&payload)
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status().as_u16();
            let body = res.text().await.unwrap_or_default();
            return Err(EstimatorError::Api { status, body });
        }

        let parsed: RemoteEstimateResponse = res.json().await?;
        if !parsed.adjusted_combined_score.is_finite() {
            return Err(EstimatorError::InvalidResponse(
                "combined score is not finite".to_string(),
            ));
        }

        // The plane level is always classified locally so baseline and
        // projection share one threshold table.
        Ok(ScenarioProjection {
            base_scores: request.base,
            adjusted_scores: parsed.adjusted_reao_scores,
            new_combined_score: parsed.adjusted_combined_score,
            new_plane_level: PlaneLevel::classify(parsed.adjusted_combined_score),
            delta_insights: parsed.delta_insights,
            scenario_applied: delta,
        })
    }
}

#[derive(Debug, Serialize)]
struct RemoteEstimateRequest<'a> {
    assessment_id: &'a str,
    scenario: ScenarioDelta,
}

#[derive(Debug, Deserialize)]
struct RemoteEstimateResponse {
    adjusted_reao_scores: ReaoScores,
    adjusted_combined_score: f64,
    #[serde(default)]
    delta_insights: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_base_url() {
        let err = RemoteScenarioEstimator::new(RemoteEstimatorConfig::new(""));
        assert!(matches!(err, Err(EstimatorError::Config(_))));
    }

    #[test]
    fn estimate_url_normalizes_trailing_slash() {
        let estimator =
            RemoteScenarioEstimator::new(RemoteEstimatorConfig::new("http://scores.local/"))
                .unwrap();
        assert_eq!(
            estimator.estimate_url(),
            "http://scores.local/api/scenarios/estimate"
        );
    }
}
