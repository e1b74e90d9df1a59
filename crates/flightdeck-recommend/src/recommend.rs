use flightdeck_catalog::{journey_by_id, Journey};
use flightdeck_core::{Dimension, ReaoScores};
use serde::Deserialize;

const MAX_RECOMMENDATIONS: usize = 4;

/// Everything the gap-analysis recommender looks at, in one place.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecommendInput {
    /// Question average on the 0-100 scale.
    pub assessment_score: f64,
    /// Tech stack score on the 0-10 scale.
    pub tech_score: f64,
    /// Selected tool ids.
    pub tech_tools: Vec<String>,
    pub reao: ReaoScores,
}

impl RecommendInput {
    fn has_tool_among(&self, candidates: &[&str]) -> bool {
        self.tech_tools
            .iter()
            .any(|t| candidates.contains(&t.to_lowercase().as_str()))
    }
}

const MARKETING_AUTOMATION: [&str; 5] = ["hubspot", "marketo", "pardot", "activecampaign", "eloqua"];
const ABM_PLATFORMS: [&str; 4] = ["6sense", "demandbase", "terminus", "engagio"];
const ANALYTICS_PLATFORMS: [&str; 5] = [
    "google-analytics",
    "adobe-analytics",
    "mixpanel",
    "amplitude",
    "bizible",
];
const CRM_PLATFORMS: [&str; 4] = ["salesforce", "hubspot", "dynamics", "pipedrive"];

/// Full gap-analysis recommendation pass.
///
/// Each rule matches a capability gap (weak dimension, missing tool
/// class, or score band) to a catalog journey. Rules fire in priority
/// order; duplicates are dropped and the list caps at four journeys.
pub fn recommend(input: &RecommendInput) -> Vec<&'static Journey> {
    let weak: Vec<Dimension> = input.reao.weakest(2).into_iter().map(|(d, _)| d).collect();
    let mut recommended: Vec<&'static Journey> = Vec::new();

    let mut push = |id: &str, list: &mut Vec<&'static Journey>| {
        if let Some(journey) = journey_by_id(id) {
            if !list.iter().any(|j| j.id == journey.id) {
                list.push(journey);
            }
        }
    };

    let has_automation = input.has_tool_among(&MARKETING_AUTOMATION);
    let has_abm = input.has_tool_among(&ABM_PLATFORMS);
    let has_analytics = input.has_tool_among(&ANALYTICS_PLATFORMS);
    let has_crm = input.has_tool_among(&CRM_PLATFORMS);

    if !has_automation && (input.assessment_score < 50.0 || input.tech_score < 4.0) {
        push("manual_to_automated", &mut recommended);
    }

    if input.tech_tools.len() < 5 || input.tech_score < 3.0 {
        push("local_to_global", &mut recommended);
    }

    if weak.contains(&Dimension::Alignment) || !has_crm {
        push("siloed_to_aligned", &mut recommended);
    }

    if weak.contains(&Dimension::Efficiency) {
        push("blog_to_demand", &mut recommended);
    }

    if !has_abm && (40.0..70.0).contains(&input.assessment_score) {
        push("spray_to_abm", &mut recommended);
    }

    if !has_analytics || weak.contains(&Dimension::Opportunity) {
        push("vanity_to_revenue", &mut recommended);
    }

    if input.assessment_score >= 70.0 && input.tech_score >= 6.0 {
        push("reactive_to_predictive", &mut recommended);
        push("basic_to_personalized", &mut recommended);
    }

    recommended.truncate(MAX_RECOMMENDATIONS);
    recommended
}
