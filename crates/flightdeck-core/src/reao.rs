use serde::{Deserialize, Serialize};

use crate::scoring::Responses;

/// The four maturity sub-dimensions. Declaration order is load-bearing:
/// it breaks ties when ranking weak areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Readiness,
    Efficiency,
    Alignment,
    Opportunity,
}

impl Dimension {
    pub const ALL: [Self; 4] = [
        Self::Readiness,
        Self::Efficiency,
        Self::Alignment,
        Self::Opportunity,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Readiness => "Readiness",
            Self::Efficiency => "Efficiency",
            Self::Alignment => "Alignment",
            Self::Opportunity => "Opportunity",
        }
    }
}

/// Per-dimension scores, each on the 0-100 scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ReaoScores {
    pub readiness: f64,
    pub efficiency: f64,
    pub alignment: f64,
    pub opportunity: f64,
}

impl ReaoScores {
    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Readiness => self.readiness,
            Dimension::Efficiency => self.efficiency,
            Dimension::Alignment => self.alignment,
            Dimension::Opportunity => self.opportunity,
        }
    }

    fn get_mut(&mut self, dimension: Dimension) -> &mut f64 {
        match dimension {
            Dimension::Readiness => &mut self.readiness,
            Dimension::Efficiency => &mut self.efficiency,
            Dimension::Alignment => &mut self.alignment,
            Dimension::Opportunity => &mut self.opportunity,
        }
    }

    pub fn mean(&self) -> f64 {
        (self.readiness + self.efficiency + self.alignment + self.opportunity) / 4.0
    }

    /// The `n` lowest-scoring dimensions, ascending. Stable: equal scores
    /// keep declaration order.
    pub fn weakest(&self, n: usize) -> Vec<(Dimension, f64)> {
        let mut ranked: Vec<(Dimension, f64)> = Dimension::ALL
            .iter()
            .map(|d| (*d, self.get(*d)))
            .collect();
        ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
        ranked.truncate(n);
        ranked
    }
}

/// Derive REAO scores from raw responses.
///
/// `mapping` assigns each question id to the dimensions it feeds (a
/// question may feed several); a dimension's score is the mean of its
/// contributing responses. Selected tools add a bonus of up to 10 points
/// (`0.8` per tool), split 60/40 between efficiency and readiness, with
/// every dimension capped at 100.
pub fn score_responses(
    responses: &Responses,
    mapping: &[(&str, [Dimension; 2])],
    tech_tool_count: usize,
) -> ReaoScores {
    if responses.is_empty() {
        return ReaoScores::default();
    }

    let mut sums = ReaoScores::default();
    let mut counts = [0_usize; 4];

    for (question_id, score) in responses {
        let Some((_, dimensions)) = mapping.iter().find(|(id, _)| id == question_id) else {
            continue;
        };
        for dimension in dimensions {
            *sums.get_mut(*dimension) += score;
            counts[*dimension as usize] += 1;
        }
    }

    let mut reao = ReaoScores::default();
    for dimension in Dimension::ALL {
        let count = counts[dimension as usize];
        if count > 0 {
            *reao.get_mut(dimension) = sums.get(dimension) / count as f64;
        }
    }

    let tech_bonus = (tech_tool_count as f64 * 0.8).min(10.0);
    reao.efficiency = (reao.efficiency + tech_bonus * 0.6).min(100.0);
    reao.readiness = (reao.readiness + tech_bonus * 0.4).min(100.0);

    reao
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAPPING: [(&str, [Dimension; 2]); 2] = [
        ("strategy", [Dimension::Readiness, Dimension::Alignment]),
        ("analytics", [Dimension::Efficiency, Dimension::Opportunity]),
    ];

    fn responses(values: &[(&str, f64)]) -> Responses {
        values
            .iter()
            .map(|(id, v)| ((*id).to_string(), *v))
            .collect()
    }

    #[test]
    fn empty_responses_score_zero_everywhere() {
        let reao = score_responses(&Responses::new(), &MAPPING, 12);
        assert_eq!(reao, ReaoScores::default());
    }

    #[test]
    fn dimensions_average_their_contributing_questions() {
        let r = responses(&[("strategy", 80.0), ("analytics", 40.0)]);
        let reao = score_responses(&r, &MAPPING, 0);
        assert_eq!(reao.readiness, 80.0);
        assert_eq!(reao.alignment, 80.0);
        assert_eq!(reao.efficiency, 40.0);
        assert_eq!(reao.opportunity, 40.0);
    }

    #[test]
    fn tech_bonus_is_capped_and_split() {
        let r = responses(&[("strategy", 50.0)]);
        // 20 tools saturates the 10-point bonus.
        let reao = score_responses(&r, &MAPPING, 20);
        assert_eq!(reao.efficiency, 6.0);
        assert_eq!(reao.readiness, 54.0);
    }

    #[test]
    fn weakest_is_stable_on_ties() {
        let reao = ReaoScores {
            readiness: 40.0,
            efficiency: 40.0,
            alignment: 90.0,
            opportunity: 20.0,
        };
        let weak = reao.weakest(2);
        assert_eq!(weak[0].0, Dimension::Opportunity);
        assert_eq!(weak[1].0, Dimension::Readiness);
    }
}
