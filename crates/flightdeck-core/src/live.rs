use serde::{Deserialize, Serialize};

use crate::scoring::{average_score, combined_score, Responses};

/// Snapshot of an assessment in progress, published to instrument
/// displays as the user answers questions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LiveStatus {
    pub is_active: bool,
    /// Running mean of answered questions, 0-100.
    pub current_score: f64,
    /// Combined score on the 0-10 scale, using the tech score supplied
    /// with the latest update.
    pub combined_score: f64,
    pub answered_count: usize,
    pub total_questions: usize,
    pub responses: Responses,
}

/// A partial update from the assessment surface. Absent fields keep
/// their previous value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LiveUpdate {
    pub responses: Option<Responses>,
    pub tech_score: Option<f64>,
    pub total_questions: Option<usize>,
}

/// Holds the current live status and keeps its derived fields
/// consistent with the responses it carries.
#[derive(Debug, Default)]
pub struct LiveStatusBoard {
    status: LiveStatus,
    tech_score: f64,
}

impl LiveStatusBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a partial update. Any update marks the status active, and
    /// the scores and answered count are recomputed from the merged
    /// responses rather than trusted from the caller.
    pub fn update(&mut self, update: LiveUpdate) -> &LiveStatus {
        if let Some(responses) = update.responses {
            self.status.responses = responses;
        }
        if let Some(tech_score) = update.tech_score {
            self.tech_score = tech_score;
        }
        if let Some(total) = update.total_questions {
            self.status.total_questions = total;
        }

        self.status.is_active = true;
        self.status.answered_count = self.status.responses.len();
        self.status.current_score = average_score(&self.status.responses);
        self.status.combined_score = combined_score(&self.status.responses, self.tech_score);

        &self.status
    }

    /// Reset to the inactive zero state, dropping all responses.
    pub fn clear(&mut self) -> &LiveStatus {
        self.status = LiveStatus::default();
        self.tech_score = 0.0;
        &self.status
    }

    pub fn status(&self) -> &LiveStatus {
        &self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn responses(values: &[(&str, f64)]) -> Responses {
        values
            .iter()
            .map(|(id, v)| ((*id).to_string(), *v))
            .collect()
    }

    #[test]
    fn update_activates_and_recomputes_derived_fields() {
        let mut board = LiveStatusBoard::new();
        let status = board.update(LiveUpdate {
            responses: Some(responses(&[("q1", 80.0), ("q2", 40.0)])),
            tech_score: Some(4.0),
            total_questions: Some(10),
        });

        assert!(status.is_active);
        assert_eq!(status.answered_count, 2);
        assert_eq!(status.total_questions, 10);
        assert_eq!(status.current_score, 60.0);
        assert_eq!(status.combined_score, 5.0);
    }

    #[test]
    fn answered_count_always_tracks_responses() {
        let mut board = LiveStatusBoard::new();
        board.update(LiveUpdate {
            responses: Some(responses(&[("q1", 80.0)])),
            ..LiveUpdate::default()
        });
        let status = board.update(LiveUpdate {
            responses: Some(responses(&[("q1", 80.0), ("q2", 20.0), ("q3", 50.0)])),
            ..LiveUpdate::default()
        });
        assert_eq!(status.answered_count, status.responses.len());
        assert_eq!(status.answered_count, 3);
    }

    #[test]
    fn absent_fields_keep_previous_values() {
        let mut board = LiveStatusBoard::new();
        board.update(LiveUpdate {
            responses: Some(responses(&[("q1", 60.0)])),
            tech_score: Some(6.0),
            total_questions: Some(10),
        });
        let status = board.update(LiveUpdate {
            responses: Some(responses(&[("q1", 60.0), ("q2", 60.0)])),
            ..LiveUpdate::default()
        });
        assert_eq!(status.total_questions, 10);
        assert_eq!(status.combined_score, (60.0 / 10.0 + 6.0) / 2.0);
    }

    #[test]
    fn clear_resets_to_inactive_zero_state() {
        let mut board = LiveStatusBoard::new();
        board.update(LiveUpdate {
            responses: Some(responses(&[("q1", 90.0)])),
            tech_score: Some(8.0),
            total_questions: Some(10),
        });
        let status = board.clear();
        assert_eq!(*status, LiveStatus::default());
        assert!(!status.is_active);
    }
}
