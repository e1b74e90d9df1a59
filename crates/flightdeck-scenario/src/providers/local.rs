use flightdeck_core::{Dimension, PlaneLevel, ReaoScores};

use crate::error::EstimatorError;
use crate::traits::ScenarioEstimator;
use crate::types::{ScenarioProjection, ScenarioRequest};

/// Dimensions that moved by less than this much are not worth a line.
const INSIGHT_THRESHOLD: f64 = 2.0;

/// In-process estimator. Applies fixed per-lever coefficients to the
/// baseline REAO scores, keeping each dimension inside 0-100.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalScenarioEstimator;

impl LocalScenarioEstimator {
    pub fn new() -> Self {
        Self
    }

    /// The synchronous core, shared with callers that have no runtime.
    pub fn project(request: &ScenarioRequest) -> ScenarioProjection {
        let delta = request.delta.clamped();
        let base = request.base;

        let budget_impact = delta.budget_pct / 100.0;
        let headcount_impact = f64::from(delta.headcount) * 3.0;
        let tech_impact = delta.tech_utilization_pct / 100.0;
        let process_impact = delta.process_maturity_pct / 100.0;

        let adjusted = ReaoScores {
            efficiency: clamp_score(
                clamp_score(base.efficiency + budget_impact * 8.0) + tech_impact * 10.0,
            ),
            opportunity: clamp_score(base.opportunity + budget_impact * 6.0),
            readiness: clamp_score(
                clamp_score(base.readiness + headcount_impact * 0.5) + process_impact * 5.0,
            ),
            alignment: clamp_score(
                clamp_score(base.alignment + headcount_impact * 0.3) + process_impact * 9.0,
            ),
        };

        // The adjusted REAO mean stands in for the question average.
        let new_combined_score = (adjusted.mean() / 10.0 + request.tech_score) / 2.0;
        let new_plane_level = PlaneLevel::classify(new_combined_score);

        let mut delta_insights = Vec::new();
        for dimension in Dimension::ALL {
            let moved = adjusted.get(dimension) - base.get(dimension);
            if moved.abs() > INSIGHT_THRESHOLD {
                let direction = if moved > 0.0 { "\u{2191}" } else { "\u{2193}" };
                delta_insights.push(format!(
                    "{}: {direction} {:.1} points",
                    dimension.label(),
                    moved.abs()
                ));
            }
        }

        ScenarioProjection {
            base_scores: base,
            adjusted_scores: adjusted,
            new_combined_score,
            new_plane_level,
            delta_insights,
            scenario_applied: delta,
        }
    }
}

fn clamp_score(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

#[async_trait::async_trait]
impl ScenarioEstimator for LocalScenarioEstimator {
    fn name(&self) -> &'static str {
        "local"
    }

    async fn estimate(
        &self,
        request: ScenarioRequest,
    ) -> Result<ScenarioProjection, EstimatorError> {
        Ok(Self::project(&request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ScenarioDelta;

    fn base_request(delta: ScenarioDelta) -> ScenarioRequest {
        ScenarioRequest {
            assessment_id: "asmt-1".to_string(),
            base: ReaoScores {
                readiness: 60.0,
                efficiency: 50.0,
                alignment: 55.0,
                opportunity: 45.0,
            },
            tech_score: 4.0,
            delta,
        }
    }

    #[test]
    fn zero_delta_projects_the_baseline() {
        let request = base_request(ScenarioDelta::default());
        let projection = LocalScenarioEstimator::project(&request);
        assert_eq!(projection.adjusted_scores, request.base);
        assert!(projection.delta_insights.is_empty());
        // combined from the REAO mean: (52.5/10 + 4) / 2
        assert!((projection.new_combined_score - 4.625).abs() < 1e-9);
    }

    #[test]
    fn each_lever_moves_its_dimensions() {
        let request = base_request(ScenarioDelta {
            budget_pct: 50.0,
            headcount: 4,
            tech_utilization_pct: 30.0,
            process_maturity_pct: 20.0,
        });
        let adjusted = LocalScenarioEstimator::project(&request).adjusted_scores;
        // efficiency: 50 + 0.5*8 + 0.3*10 = 57
        assert!((adjusted.efficiency - 57.0).abs() < 1e-9);
        // opportunity: 45 + 0.5*6 = 48
        assert!((adjusted.opportunity - 48.0).abs() < 1e-9);
        // readiness: 60 + 12*0.5 + 0.2*5 = 67
        assert!((adjusted.readiness - 67.0).abs() < 1e-9);
        // alignment: 55 + 12*0.3 + 0.2*9 = 60.4
        assert!((adjusted.alignment - 60.4).abs() < 1e-9);
    }

    #[test]
    fn scores_never_leave_the_scale() {
        let mut request = base_request(ScenarioDelta {
            budget_pct: -50.0,
            headcount: -10,
            tech_utilization_pct: -30.0,
            process_maturity_pct: -20.0,
        });
        request.base = ReaoScores {
            readiness: 2.0,
            efficiency: 1.0,
            alignment: 3.0,
            opportunity: 1.0,
        };
        let adjusted = LocalScenarioEstimator::project(&request).adjusted_scores;
        for d in Dimension::ALL {
            assert!((0.0..=100.0).contains(&adjusted.get(d)));
        }
    }

    #[test]
    fn only_meaningful_moves_produce_insights() {
        let request = base_request(ScenarioDelta {
            headcount: 2,
            ..ScenarioDelta::default()
        });
        let projection = LocalScenarioEstimator::project(&request);
        // readiness moves +3, alignment only +1.8
        assert_eq!(projection.delta_insights.len(), 1);
        assert!(projection.delta_insights[0].starts_with("Readiness"));
    }

    #[tokio::test]
    async fn estimator_trait_reports_local() {
        let estimator = LocalScenarioEstimator::new();
        assert_eq!(estimator.name(), "local");
        let projection = estimator
            .estimate(base_request(ScenarioDelta::default()))
            .await
            .unwrap();
        assert!(projection.delta_insights.is_empty());
    }
}
