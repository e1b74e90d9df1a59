use flightdeck_catalog::{Journey, JOURNEY_CATALOG};

/// Entry-level cutoff used when the user has not scored any miles yet.
const ENTRY_LEVEL_POINTS: i64 = 300;
/// A journey still counts as reachable this many miles before its gate.
const REACH_BUFFER: i64 = 100;
/// A journey stays listed until the miles pass its gate by more than this.
const OVERSHOOT_WINDOW: i64 = 300;

/// Journeys worth surfacing mid-assessment for the given flight miles.
///
/// With zero miles this returns the cheapest entry-level journeys. With
/// any progress it returns journeys whose gate satisfies
/// `min_points - REACH_BUFFER <= current <= min_points + OVERSHOOT_WINDOW`,
/// ordered by distance from the current miles, at most `max_count` of
/// them. Journeys far behind the current miles drop out of the list.
pub fn live_suggestions(current_points: i64, max_count: usize) -> Vec<&'static Journey> {
    if current_points == 0 {
        let mut entry: Vec<&'static Journey> = JOURNEY_CATALOG
            .iter()
            .filter(|j| j.min_points <= ENTRY_LEVEL_POINTS)
            .collect();
        entry.sort_by_key(|j| j.min_points);
        entry.truncate(max_count);
        return entry;
    }

    let mut reachable: Vec<&'static Journey> = JOURNEY_CATALOG
        .iter()
        .filter(|j| {
            current_points >= j.min_points - REACH_BUFFER
                && current_points <= j.min_points + OVERSHOOT_WINDOW
        })
        .collect();
    reachable.sort_by_key(|j| (j.min_points - current_points).abs());
    reachable.truncate(max_count);
    reachable
}
