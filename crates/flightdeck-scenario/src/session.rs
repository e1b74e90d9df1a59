use crate::types::ScenarioProjection;

/// Ticket identifying one in-flight simulation.
pub type SimulationTicket = u64;

/// Guards against stale simulations landing out of order.
///
/// The UI flow is begin, await the estimator, complete. If the user
/// moves a slider again before the first projection arrives, a newer
/// ticket exists and the late completion is discarded, so the displayed
/// projection always belongs to the most recent request.
#[derive(Debug, Default)]
pub struct ScenarioSession {
    latest_ticket: SimulationTicket,
    projection: Option<ScenarioProjection>,
}

impl ScenarioSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new simulation, invalidating any still in flight.
    pub fn begin(&mut self) -> SimulationTicket {
        self.latest_ticket += 1;
        self.latest_ticket
    }

    /// Apply a finished projection. Returns false (and keeps the current
    /// projection) when a newer simulation has started since `ticket`.
    pub fn complete(&mut self, ticket: SimulationTicket, projection: ScenarioProjection) -> bool {
        if ticket != self.latest_ticket {
            return false;
        }
        self.projection = Some(projection);
        true
    }

    pub fn latest(&self) -> Option<&ScenarioProjection> {
        self.projection.as_ref()
    }

    /// Drop the current projection and invalidate in-flight simulations.
    pub fn clear(&mut self) {
        self.latest_ticket += 1;
        self.projection = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::LocalScenarioEstimator;
    use crate::types::{ScenarioDelta, ScenarioRequest};
    use flightdeck_core::ReaoScores;

    fn projection(budget_pct: f64) -> ScenarioProjection {
        LocalScenarioEstimator::project(&ScenarioRequest {
            assessment_id: "asmt-1".to_string(),
            base: ReaoScores {
                readiness: 50.0,
                efficiency: 50.0,
                alignment: 50.0,
                opportunity: 50.0,
            },
            tech_score: 5.0,
            delta: ScenarioDelta {
                budget_pct,
                ..ScenarioDelta::default()
            },
        })
    }

    #[test]
    fn latest_ticket_wins() {
        let mut session = ScenarioSession::new();
        let first = session.begin();
        let second = session.begin();

        assert!(session.complete(second, projection(50.0)));
        assert!(!session.complete(first, projection(-50.0)));

        let applied = session.latest().unwrap().scenario_applied;
        assert_eq!(applied.budget_pct, 50.0);
    }

    #[test]
    fn completions_in_order_replace_each_other() {
        let mut session = ScenarioSession::new();
        let first = session.begin();
        assert!(session.complete(first, projection(10.0)));
        let second = session.begin();
        assert!(session.complete(second, projection(20.0)));
        assert_eq!(session.latest().unwrap().scenario_applied.budget_pct, 20.0);
    }

    #[test]
    fn clear_discards_state_and_inflight_work() {
        let mut session = ScenarioSession::new();
        let ticket = session.begin();
        session.clear();
        assert!(!session.complete(ticket, projection(30.0)));
        assert!(session.latest().is_none());
    }
}
