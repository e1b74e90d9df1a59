use flightdeck_catalog::Journey;
use serde::Serialize;

/// Which of a journey's required tools the user is missing.
#[derive(Debug, Clone, Serialize)]
pub struct TechGap {
    pub missing: Vec<&'static str>,
    pub has_any: bool,
    pub total: usize,
}

/// Compare a journey's required tools against the user's stack,
/// case-insensitively. Required tools are display names; user tools may
/// be ids or names, so both sides are lowercased before matching.
pub fn tech_gap(journey: &Journey, owned_tools: &[String]) -> TechGap {
    let owned: Vec<String> = owned_tools.iter().map(|t| t.to_lowercase()).collect();

    let missing: Vec<&'static str> = journey
        .tech_required
        .iter()
        .filter(|required| !owned.contains(&required.to_lowercase()))
        .copied()
        .collect();

    let total = journey.tech_required.len();
    let has_any = missing.len() < total;

    TechGap {
        missing,
        has_any,
        total,
    }
}
