use flightdeck_core::{PlaneLevel, ReaoScores};
use serde::{Deserialize, Serialize};

/// Resource changes to simulate, as deltas from the current plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioDelta {
    /// Budget change in percent, -50 to +50.
    #[serde(default)]
    pub budget_pct: f64,
    /// Net headcount change, -10 to +10.
    #[serde(default)]
    pub headcount: i32,
    /// Tool utilization change in percent, -30 to +30.
    #[serde(default)]
    pub tech_utilization_pct: f64,
    /// Process maturity change in percent, -20 to +20.
    #[serde(default)]
    pub process_maturity_pct: f64,
}

impl ScenarioDelta {
    /// Clamp every slider to its allowed range. Estimators apply this
    /// before projecting, so out-of-range input degrades instead of
    /// distorting the result.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            budget_pct: self.budget_pct.clamp(-50.0, 50.0),
            headcount: self.headcount.clamp(-10, 10),
            tech_utilization_pct: self.tech_utilization_pct.clamp(-30.0, 30.0),
            process_maturity_pct: self.process_maturity_pct.clamp(-20.0, 20.0),
        }
    }
}

/// A projection request: the assessment baseline plus the deltas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioRequest {
    /// Id of the stored assessment the baseline came from. Remote
    /// estimators key their own lookup on it.
    pub assessment_id: String,
    pub base: ReaoScores,
    /// The baseline tech score, 0-10. Scenarios never change it.
    pub tech_score: f64,
    pub delta: ScenarioDelta,
}

/// The projected outcome of a scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioProjection {
    pub base_scores: ReaoScores,
    pub adjusted_scores: ReaoScores,
    pub new_combined_score: f64,
    pub new_plane_level: PlaneLevel,
    /// One line per dimension that moved by more than two points.
    pub delta_insights: Vec<String>,
    pub scenario_applied: ScenarioDelta,
}
