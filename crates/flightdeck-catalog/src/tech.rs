use serde::{Deserialize, Serialize};

/// Pricing/complexity tier of a tool. Tiers change the per-tool bonus in
/// [`tech_score`]; `Smb` and `Custom` contribute no bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolTier {
    Foundational,
    Smb,
    Mid,
    Enterprise,
    Custom,
}

impl ToolTier {
    fn bonus(self) -> f64 {
        match self {
            Self::Enterprise => 2.0,
            Self::Mid => 1.5,
            Self::Foundational => 0.5,
            Self::Smb | Self::Custom => 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TechTool {
    pub id: &'static str,
    pub name: &'static str,
    pub tier: ToolTier,
}

/// A weighted category of the tech catalog. Weights bias the overall
/// score toward analytics and orchestration.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TechCategory {
    pub name: &'static str,
    pub weight: f64,
    pub tools: &'static [TechTool],
}

const fn tool(id: &'static str, name: &'static str, tier: ToolTier) -> TechTool {
    TechTool { id, name, tier }
}

pub static TECH_CATEGORIES: [TechCategory; 6] = [
    TechCategory {
        name: "CRM & Customer Data",
        weight: 1.0,
        tools: &[
            tool("salesforce", "Salesforce", ToolTier::Enterprise),
            tool("hubspot", "HubSpot", ToolTier::Mid),
            tool("pipedrive", "Pipedrive", ToolTier::Smb),
            tool("zoho", "Zoho CRM", ToolTier::Smb),
            tool("supabase", "Supabase", ToolTier::Custom),
        ],
    },
    TechCategory {
        name: "Marketing Automation & Email",
        weight: 1.0,
        tools: &[
            tool("marketo", "Adobe Marketo", ToolTier::Enterprise),
            tool("eloqua", "Oracle Eloqua", ToolTier::Enterprise),
            tool("pardot", "Salesforce Pardot", ToolTier::Enterprise),
            tool("klaviyo", "Klaviyo", ToolTier::Mid),
            tool("mailchimp", "Mailchimp", ToolTier::Smb),
        ],
    },
    TechCategory {
        name: "Analytics & Business Intelligence",
        weight: 1.2,
        tools: &[
            tool("ga4", "Google Analytics 4", ToolTier::Foundational),
            tool("mixpanel", "Mixpanel", ToolTier::Mid),
            tool("amplitude", "Amplitude", ToolTier::Mid),
            tool("tableau", "Tableau", ToolTier::Enterprise),
            tool("looker", "Google Looker", ToolTier::Enterprise),
        ],
    },
    TechCategory {
        name: "Content, SEO & Search",
        weight: 0.9,
        tools: &[
            tool("semrush", "Semrush", ToolTier::Mid),
            tool("ahrefs", "Ahrefs", ToolTier::Mid),
            tool("contentiq", "ContentIQ", ToolTier::Enterprise),
            tool("hubspot-cms", "HubSpot CMS", ToolTier::Mid),
            tool("wordpress", "WordPress", ToolTier::Foundational),
        ],
    },
    TechCategory {
        name: "Advertising & Demand Gen",
        weight: 0.9,
        tools: &[
            tool("google-ads", "Google Ads", ToolTier::Foundational),
            tool("meta-ads", "Meta Ads", ToolTier::Foundational),
            tool("linkedin-ads", "LinkedIn Ads", ToolTier::Mid),
            tool("6sense", "6sense", ToolTier::Enterprise),
            tool("the-trade-desk", "The Trade Desk", ToolTier::Enterprise),
        ],
    },
    TechCategory {
        name: "Orchestration & Integration",
        weight: 1.1,
        tools: &[
            tool("zapier", "Zapier", ToolTier::Foundational),
            tool("make", "Make", ToolTier::Foundational),
            tool("segment", "Segment", ToolTier::Enterprise),
            tool("mparticle", "mParticle", ToolTier::Enterprise),
            tool("iterable", "Iterable", ToolTier::Mid),
        ],
    },
];

/// Weighted 0-10 score for a set of selected tool ids.
///
/// Per category with any selection: `count * 1.5` plus the per-tool tier
/// bonus, divided by the count and capped at 10, then weighted. The
/// result is the weighted mean over contributing categories, capped at
/// 10. Ids match case-insensitively; unknown ids simply never match and
/// contribute nothing, and repeating an id cannot double-count a tool.
pub fn tech_score(selected_tools: &[String]) -> f64 {
    if selected_tools.is_empty() {
        return 0.0;
    }

    let mut score = 0.0;
    let mut total_weight = 0.0;

    for category in &TECH_CATEGORIES {
        let selected: Vec<&TechTool> = category
            .tools
            .iter()
            .filter(|t| selected_tools.iter().any(|id| id.eq_ignore_ascii_case(t.id)))
            .collect();

        if selected.is_empty() {
            continue;
        }

        let mut category_score = selected.len() as f64 * 1.5;
        for t in &selected {
            category_score += t.tier.bonus();
        }
        category_score = (category_score / selected.len() as f64).min(10.0);

        score += category_score * category.weight;
        total_weight += category.weight;
    }

    if total_weight > 0.0 {
        (score / total_weight).min(10.0)
    } else {
        0.0
    }
}

pub fn tool_by_id(id: &str) -> Option<&'static TechTool> {
    TECH_CATEGORIES
        .iter()
        .flat_map(|c| c.tools.iter())
        .find(|t| t.id == id)
}
