use std::collections::BTreeMap;

/// Raw question responses: question id to a value on the 0-100 scale.
///
/// A `BTreeMap` keeps iteration deterministic; insertion order never
/// matters for scoring.
pub type Responses = BTreeMap<String, f64>;

/// Mean of all response values on the 0-100 scale. Empty input scores 0.
pub fn average_score(responses: &Responses) -> f64 {
    if responses.is_empty() {
        return 0.0;
    }
    let sum: f64 = responses.values().sum();
    sum / responses.len() as f64
}

/// Blend the question average with the tech-stack score into the single
/// 0-10 combined score: `(average/10 + tech_score) / 2`.
///
/// The same formula applies to an empty response set (average 0), so a
/// user who has answered nothing but selected tools scores `tech/2`.
pub fn combined_score(responses: &Responses, tech_score: f64) -> f64 {
    (average_score(responses) / 10.0 + tech_score) / 2.0
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
    fn average_of_empty_is_zero() {
        assert_eq!(average_score(&Responses::new()), 0.0);
    }

    #[test]
    fn combined_score_blends_average_and_tech() {
        let r = responses(&[("q1", 80.0), ("q2", 60.0), ("q3", 40.0)]);
        assert_eq!(average_score(&r), 60.0);
        assert_eq!(combined_score(&r, 4.0), 5.0);
    }

    #[test]
    fn combined_score_is_defined_for_empty_responses() {
        let empty = Responses::new();
        assert_eq!(combined_score(&empty, 0.0), 0.0);
        assert_eq!(combined_score(&empty, 8.0), 4.0);
    }
}
