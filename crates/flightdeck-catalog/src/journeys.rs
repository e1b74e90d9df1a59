use serde::{Deserialize, Serialize};

/// How urgently a journey should be surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// A named improvement path from a current practice to a target
/// practice, gated by the flight miles needed to attempt it.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Journey {
    pub id: &'static str,
    pub title: &'static str,
    pub origin: &'static str,
    pub destination: &'static str,
    pub layovers: &'static [&'static str],
    pub summary: &'static str,
    pub description: &'static str,
    pub next_steps: &'static [&'static str],
    pub tech_required: &'static [&'static str],
    pub estimated_time: &'static str,
    pub priority: Priority,
    /// Flight miles needed to consider this journey.
    pub min_points: i64,
}

pub static JOURNEY_CATALOG: [Journey; 8] = [
    Journey {
        id: "spray_to_abm",
        title: "From Spray & Pray to Targeted ABM",
        origin: "Demand Generation",
        destination: "Account-Based Marketing",
        layovers: &["Marketing Operations", "Analytics & Data", "Sales Alignment"],
        summary: "Target high-value prospects with precision instead of mass marketing",
        description: "Transform your mass marketing approach into a sophisticated account-based strategy that targets high-value prospects with precision.",
        next_steps: &[
            "Identify and tier your top 100 target accounts using firmographic and intent data",
            "Implement account scoring and stakeholder mapping for tier-1 accounts",
            "Build personalized content and messaging frameworks by vertical and use case",
            "Set up multi-channel orchestration with coordinated touchpoints across email, social, and direct channels",
            "Establish sales-marketing SLAs for account engagement and handoff processes",
        ],
        tech_required: &["6sense", "Demandbase", "LinkedIn Sales Navigator", "Salesforce"],
        estimated_time: "12-16 weeks",
        priority: Priority::High,
        min_points: 400,
    },
    Journey {
        id: "manual_to_automated",
        title: "From Manual Campaigns to Marketing Automation",
        origin: "Email Marketing",
        destination: "Marketing Automation",
        layovers: &["Marketing Operations", "Data Management", "Lead Scoring"],
        summary: "Scale marketing with automation that nurtures leads and drives pipeline",
        description: "Scale your marketing with sophisticated automation that nurtures leads, scores engagement, and drives pipeline efficiently.",
        next_steps: &[
            "Audit current email campaigns and identify automation opportunities",
            "Map buyer journey stages and define qualification criteria",
            "Implement behavioral lead scoring based on engagement and firmographics",
            "Build automated nurture tracks for each stage of the buyer journey",
            "Create closed-loop reporting with sales to optimize conversion rates",
        ],
        tech_required: &["HubSpot", "Marketo", "Pardot", "ActiveCampaign"],
        estimated_time: "8-12 weeks",
        priority: Priority::High,
        min_points: 250,
    },
    Journey {
        id: "vanity_to_revenue",
        title: "From Vanity Metrics to Revenue Attribution",
        origin: "Basic Analytics",
        destination: "Revenue Attribution",
        layovers: &["Data Integration", "Marketing Operations", "CRM Alignment"],
        summary: "Prove marketing impact on revenue with multi-touch attribution",
        description: "Move beyond page views and clicks to prove marketing's true impact on revenue with multi-touch attribution.",
        next_steps: &[
            "Integrate all marketing touchpoints into a unified data warehouse",
            "Define attribution model (first-touch, last-touch, or multi-touch weighted)",
            "Map campaigns and channels to pipeline and closed-won revenue",
            "Build executive dashboards showing marketing ROI and CAC by channel",
            "Implement predictive analytics to forecast pipeline contribution",
        ],
        tech_required: &["Bizible", "Google Analytics", "Tableau", "Salesforce"],
        estimated_time: "10-14 weeks",
        priority: Priority::Medium,
        min_points: 350,
    },
    Journey {
        id: "blog_to_demand",
        title: "From Blog Posts to Demand Engine",
        origin: "Content Marketing",
        destination: "Integrated Demand Generation",
        layovers: &["SEO & Distribution", "Lead Capture", "Nurture Programs"],
        summary: "Turn content into a lead generation machine with strategic distribution",
        description: "Transform your content library into a lead generation machine with strategic distribution and conversion optimization.",
        next_steps: &[
            "Conduct content audit and map existing assets to buyer journey stages",
            "Develop content pillars aligned to product value propositions and SEO keywords",
            "Create gated assets (ebooks, webinars, tools) for lead capture at each stage",
            "Build multi-channel distribution strategy including syndication and paid promotion",
            "Implement content-to-pipeline tracking with attribution modeling",
        ],
        tech_required: &["SEMrush", "HubSpot", "Canva", "Vidyard"],
        estimated_time: "12-16 weeks",
        priority: Priority::Medium,
        min_points: 300,
    },
    Journey {
        id: "siloed_to_aligned",
        title: "From Siloed to Sales-Marketing Alignment",
        origin: "Disconnected Teams",
        destination: "Revenue Operations",
        layovers: &["Shared Metrics", "Process Definition", "Technology Integration"],
        summary: "Create unified revenue engine with shared goals and accountability",
        description: "Break down barriers between sales and marketing to create a unified revenue engine with shared goals and accountability.",
        next_steps: &[
            "Define Service Level Agreement (SLA) between sales and marketing teams",
            "Establish lead lifecycle stages and handoff criteria with sales input",
            "Create shared revenue dashboards visible to both teams",
            "Implement regular sales-marketing alignment meetings (weekly/bi-weekly)",
            "Build closed-loop feedback system for lead quality and conversion insights",
        ],
        tech_required: &["Salesforce", "Gong", "Clari", "Slack"],
        estimated_time: "8-10 weeks",
        priority: Priority::High,
        min_points: 300,
    },
    Journey {
        id: "local_to_global",
        title: "From Local Tools to Integrated Stack",
        origin: "Point Solutions",
        destination: "Unified Marketing Platform",
        layovers: &["Technology Audit", "Integration Architecture", "Data Governance"],
        summary: "Consolidate fragmented martech into integrated ecosystem",
        description: "Consolidate your fragmented martech stack into an integrated ecosystem that shares data and enables sophisticated workflows.",
        next_steps: &[
            "Audit current martech stack and identify redundancies and gaps",
            "Design integration architecture with customer data platform (CDP) at center",
            "Implement middleware or iPaaS to connect marketing, sales, and customer success tools",
            "Establish data governance policies and master data management practices",
            "Build unified reporting layer across all marketing systems",
        ],
        tech_required: &["Segment", "mParticle", "Zapier", "Salesforce"],
        estimated_time: "14-18 weeks",
        priority: Priority::Medium,
        min_points: 450,
    },
    Journey {
        id: "reactive_to_predictive",
        title: "From Reactive to Predictive Marketing",
        origin: "Historical Reporting",
        destination: "AI-Powered Insights",
        layovers: &["Data Warehouse", "ML Models", "Real-time Analytics"],
        summary: "Leverage AI to predict behavior, optimize campaigns, prevent churn",
        description: "Leverage AI and machine learning to predict customer behavior, optimize campaigns, and proactively prevent churn.",
        next_steps: &[
            "Build data warehouse with historical customer engagement and conversion data",
            "Implement predictive lead scoring using machine learning algorithms",
            "Create propensity models for upsell, cross-sell, and churn prediction",
            "Deploy real-time recommendation engine for content and next-best-action",
            "Set up automated alerts and triggers based on predictive insights",
        ],
        tech_required: &["Salesforce Einstein", "Adobe Sensei", "Google Analytics 4", "Python/R"],
        estimated_time: "16-20 weeks",
        priority: Priority::Low,
        min_points: 600,
    },
    Journey {
        id: "basic_to_personalized",
        title: "From Batch-and-Blast to Personalized Engagement",
        origin: "Mass Email",
        destination: "Dynamic Personalization",
        layovers: &["Segmentation", "Behavioral Tracking", "Content Customization"],
        summary: "Deliver personalized experiences based on behavior and preferences",
        description: "Replace one-size-fits-all messaging with dynamic, personalized experiences tailored to individual customer needs and behaviors.",
        next_steps: &[
            "Implement customer data platform to unify customer data across touchpoints",
            "Build dynamic segmentation based on demographics, firmographics, and behavior",
            "Create personalized email templates with dynamic content blocks",
            "Deploy website personalization based on visitor attributes and intent",
            "Measure lift in engagement and conversion from personalization efforts",
        ],
        tech_required: &["Optimizely", "Dynamic Yield", "HubSpot", "Segment"],
        estimated_time: "10-12 weeks",
        priority: Priority::Medium,
        min_points: 350,
    },
];

pub fn journey_by_id(id: &str) -> Option<&'static Journey> {
    JOURNEY_CATALOG.iter().find(|j| j.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn journey_ids_are_unique() {
        let mut ids: Vec<&str> = JOURNEY_CATALOG.iter().map(|j| j.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), JOURNEY_CATALOG.len());
    }

    #[test]
    fn every_journey_has_actionable_steps() {
        for journey in &JOURNEY_CATALOG {
            assert!(!journey.next_steps.is_empty(), "{} has no steps", journey.id);
            assert!(!journey.tech_required.is_empty());
            assert!(journey.min_points > 0);
        }
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(
            journey_by_id("spray_to_abm").map(|j| j.min_points),
            Some(400)
        );
        assert!(journey_by_id("red_eye").is_none());
    }
}
