use crate::reao::ReaoScores;

/// One insight line per dimension plus an overall strategic priority.
///
/// Each dimension has three bands: below 50, 50 to below 75, and 75 and
/// up. The closing line uses the mean of the four dimensions against the
/// same thresholds. Every line carries its dimension's emoji marker so
/// display surfaces can show the strings verbatim.
pub fn generate_insights(reao: &ReaoScores) -> Vec<String> {
    let mut insights = Vec::with_capacity(5);

    insights.push(banded(
        reao.readiness,
        "\u{1f3af} Readiness: Build foundational capabilities and team skills before scaling",
        "\u{1f3af} Readiness: Strong foundation - ready to scale operations",
        "\u{1f3af} Readiness: Excellent preparedness for advanced initiatives",
    ));
    insights.push(banded(
        reao.efficiency,
        "\u{26a1} Efficiency: Automate repetitive tasks and improve process workflows",
        "\u{26a1} Efficiency: Good operational rhythm - optimize key bottlenecks",
        "\u{26a1} Efficiency: Highly optimized operations - focus on innovation",
    ));
    insights.push(banded(
        reao.alignment,
        "\u{1f3af} Alignment: Strengthen cross-functional collaboration and shared goals",
        "\u{1f3af} Alignment: Good coordination - deepen strategic integration",
        "\u{1f3af} Alignment: Exceptional team sync and strategic cohesion",
    ));
    insights.push(banded(
        reao.opportunity,
        "\u{1f680} Opportunity: Focus on quick wins before pursuing aggressive growth",
        "\u{1f680} Opportunity: Strong position - expand into adjacent channels",
        "\u{1f680} Opportunity: Prime position for market leadership initiatives",
    ));
    insights.push(banded(
        reao.mean(),
        "\u{1f4ca} Strategic Priority: Build foundations before scaling",
        "\u{1f4ca} Strategic Priority: Scale proven channels and systematize",
        "\u{1f4ca} Strategic Priority: Lead with innovation and market expansion",
    ));

    insights
}

fn banded(score: f64, low: &str, mid: &str, high: &str) -> String {
    if score < 50.0 {
        low.to_string()
    } else if score < 75.0 {
        mid.to_string()
    } else {
        high.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_emits_five_lines() {
        let insights = generate_insights(&ReaoScores::default());
        assert_eq!(insights.len(), 5);
        assert!(insights[4].contains("Strategic Priority:"));
        assert!(insights[4].starts_with('\u{1f4ca}'));
        assert!(insights[1].starts_with('\u{26a1}'));
    }

    #[test]
    fn band_edges_are_inclusive_at_the_top() {
        let reao = ReaoScores {
            readiness: 49.9,
            efficiency: 50.0,
            alignment: 75.0,
            opportunity: 100.0,
        };
        let insights = generate_insights(&reao);
        assert!(insights[0].contains("foundational capabilities"));
        assert!(insights[1].contains("Good operational rhythm"));
        assert!(insights[2].contains("Exceptional team sync"));
        assert!(insights[3].contains("market leadership"));
        // mean is 68.725, the middle band
        assert!(insights[4].contains("Scale proven channels"));
    }
}
