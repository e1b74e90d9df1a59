use flightdeck_core::Dimension;
use serde::Serialize;

/// One selectable answer for an assessment question.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct QuestionOption {
    pub value: f64,
    pub label: &'static str,
}

/// An assessment question with its fixed answer scale.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub category: &'static str,
    pub question: &'static str,
    pub description: &'static str,
    pub options: &'static [QuestionOption],
}

const fn options(labels: [&'static str; 5]) -> [QuestionOption; 5] {
    [
        QuestionOption {
            value: 0.0,
            label: labels[0],
        },
        QuestionOption {
            value: 25.0,
            label: labels[1],
        },
        QuestionOption {
            value: 50.0,
            label: labels[2],
        },
        QuestionOption {
            value: 75.0,
            label: labels[3],
        },
        QuestionOption {
            value: 100.0,
            label: labels[4],
        },
    ]
}

static STRATEGY_OPTIONS: [QuestionOption; 5] = options([
    "No formal strategy - reactive marketing",
    "Basic strategy - annual planning with limited data",
    "Defined strategy - quarterly planning with metrics",
    "Advanced strategy - integrated with business goals and competitive analysis",
    "World-class - data-driven, predictive, agile strategic planning",
]);

static CONTENT_OPTIONS: [QuestionOption; 5] = options([
    "Ad-hoc content - no process or calendar",
    "Basic content - simple blog posts and social updates",
    "Structured content - editorial calendar and content types",
    "Advanced content - multi-channel, personalized, performance-tracked",
    "Content excellence - AI-assisted, omnichannel, audience-segmented",
]);

static DEMAND_GEN_OPTIONS: [QuestionOption; 5] = options([
    "No formal demand gen - sporadic campaigns",
    "Basic campaigns - email blasts and webinars",
    "Multi-channel campaigns - integrated email, ads, content",
    "Advanced demand gen - ABM, lead scoring, nurture tracks",
    "Predictive demand gen - AI-driven targeting and personalization",
]);

static SALES_ALIGNMENT_OPTIONS: [QuestionOption; 5] = options([
    "Misaligned - separate goals and limited communication",
    "Basic alignment - occasional meetings",
    "Defined SLAs - shared definitions and regular sync",
    "Strong alignment - integrated systems and joint planning",
    "Revenue team - unified goals, processes, and accountability",
]);

static OPERATIONS_OPTIONS: [QuestionOption; 5] = options([
    "No formal operations - manual processes",
    "Basic automation - email sequences",
    "Defined operations - process documentation and workflows",
    "Advanced ops - integrated automation and data governance",
    "World-class ops - AI-driven optimization and predictive workflows",
]);

static TECH_STACK_OPTIONS: [QuestionOption; 5] = options([
    "Minimal tools - email and basic CRM",
    "Basic stack - MAP, CRM, analytics",
    "Integrated stack - 5-10 tools with some integration",
    "Advanced stack - unified platform with data flows",
    "Best-in-class - fully integrated, AI-enabled martech ecosystem",
]);

static ABM_OPTIONS: [QuestionOption; 5] = options([
    "No ABM - mass marketing only",
    "ABM aware - identifying target accounts",
    "ABM lite - personalized campaigns for top accounts",
    "Scaled ABM - multi-tier account strategies",
    "ABM excellence - AI-driven orchestration across buying groups",
]);

static ANALYTICS_OPTIONS: [QuestionOption; 5] = options([
    "Basic metrics - vanity metrics only",
    "Channel metrics - engagement and traffic",
    "Business metrics - leads, pipeline, revenue",
    "Advanced attribution - multi-touch and journey analytics",
    "Predictive analytics - AI-driven insights and forecasting",
]);

static TEAM_OPTIONS: [QuestionOption; 5] = options([
    "Generalists only - limited specialized skills",
    "Basic specialization - few dedicated roles",
    "Defined roles - specialists across key functions",
    "Advanced team - centers of excellence and skill development",
    "World-class team - continuous learning and innovation culture",
]);

static BUDGET_OPTIONS: [QuestionOption; 5] = options([
    "No formal budget - reactive spending",
    "Annual budget - limited flexibility",
    "Quarterly planning - some reallocation",
    "Dynamic budgeting - performance-based allocation",
    "Optimized budgeting - AI-driven, predictive, continuous optimization",
]);

/// The ten assessment questions, in presentation order.
pub static ASSESSMENT_QUESTIONS: [Question; 10] = [
    Question {
        id: "strategy",
        category: "Marketing Strategy",
        question: "How mature is your marketing strategy?",
        description: "Evaluate your strategic planning, goal-setting, and market positioning.",
        options: &STRATEGY_OPTIONS,
    },
    Question {
        id: "content",
        category: "Content Marketing",
        question: "How sophisticated is your content operation?",
        description: "Assess your content creation, distribution, and measurement capabilities.",
        options: &CONTENT_OPTIONS,
    },
    Question {
        id: "demand_gen",
        category: "Demand Generation",
        question: "How effective is your demand generation?",
        description: "Evaluate lead generation, nurturing, and conversion capabilities.",
        options: &DEMAND_GEN_OPTIONS,
    },
    Question {
        id: "sales_alignment",
        category: "Sales & Marketing Alignment",
        question: "How aligned are sales and marketing?",
        description: "Measure collaboration, shared goals, and handoff processes.",
        options: &SALES_ALIGNMENT_OPTIONS,
    },
    Question {
        id: "operations",
        category: "Marketing Operations",
        question: "How mature are your marketing operations?",
        description: "Assess process management, automation, and operational efficiency.",
        options: &OPERATIONS_OPTIONS,
    },
    Question {
        id: "tech_stack",
        category: "Technology Stack",
        question: "How sophisticated is your marketing technology?",
        description: "Evaluate your martech integration and utilization.",
        options: &TECH_STACK_OPTIONS,
    },
    Question {
        id: "abm",
        category: "Account-Based Marketing",
        question: "How developed is your ABM program?",
        description: "Measure account targeting, personalization, and orchestration.",
        options: &ABM_OPTIONS,
    },
    Question {
        id: "analytics",
        category: "Analytics & Insights",
        question: "How advanced is your analytics capability?",
        description: "Assess measurement, attribution, and data-driven decision making.",
        options: &ANALYTICS_OPTIONS,
    },
    Question {
        id: "team",
        category: "Team & Skills",
        question: "How capable is your marketing team?",
        description: "Evaluate team structure, skills, and development.",
        options: &TEAM_OPTIONS,
    },
    Question {
        id: "budget",
        category: "Budget & Resources",
        question: "How strategic is your budget allocation?",
        description: "Measure budget planning, optimization, and ROI tracking.",
        options: &BUDGET_OPTIONS,
    },
];

/// Which two dimensions each question feeds. Ids match
/// [`ASSESSMENT_QUESTIONS`] one to one.
pub static DIMENSION_MAPPING: [(&str, [Dimension; 2]); 10] = [
    ("strategy", [Dimension::Readiness, Dimension::Alignment]),
    ("content", [Dimension::Efficiency, Dimension::Readiness]),
    ("demand_gen", [Dimension::Readiness, Dimension::Opportunity]),
    ("sales_alignment", [Dimension::Alignment, Dimension::Efficiency]),
    ("operations", [Dimension::Efficiency, Dimension::Alignment]),
    ("tech_stack", [Dimension::Efficiency, Dimension::Readiness]),
    ("abm", [Dimension::Opportunity, Dimension::Readiness]),
    ("analytics", [Dimension::Efficiency, Dimension::Opportunity]),
    ("team", [Dimension::Readiness, Dimension::Alignment]),
    ("budget", [Dimension::Alignment, Dimension::Opportunity]),
];

pub fn question_by_id(id: &str) -> Option<&'static Question> {
    ASSESSMENT_QUESTIONS.iter().find(|q| q.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapping_covers_every_question_exactly_once() {
        for question in &ASSESSMENT_QUESTIONS {
            let hits = DIMENSION_MAPPING
                .iter()
                .filter(|(id, _)| *id == question.id)
                .count();
            assert_eq!(hits, 1, "question {} must map once", question.id);
        }
        assert_eq!(DIMENSION_MAPPING.len(), ASSESSMENT_QUESTIONS.len());
    }

    #[test]
    fn every_question_uses_the_five_step_scale() {
        for question in &ASSESSMENT_QUESTIONS {
            let values: Vec<f64> = question.options.iter().map(|o| o.value).collect();
            assert_eq!(values, [0.0, 25.0, 50.0, 75.0, 100.0]);
        }
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(
            question_by_id("analytics").map(|q| q.category),
            Some("Analytics & Insights")
        );
        assert!(question_by_id("nope").is_none());
    }
}
