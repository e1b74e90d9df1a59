use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Maximum miles shown on the progress gauge. Values above this still
/// exist numerically; only the rendered bar saturates.
pub const MAX_FLIGHT_MILES: i64 = 1000;

/// A maturity tier ("plane level") derived from the 0-10 combined score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlaneLevel {
    pub name: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
}

struct LevelBand {
    lower_bound: f64,
    level: PlaneLevel,
}

// Contiguous half-open bands, ascending. The topmost band is unbounded.
static LEVEL_BANDS: [LevelBand; 6] = [
    LevelBand {
        lower_bound: 0.0,
        level: PlaneLevel {
            name: "Grounded",
            emoji: "\u{2708}\u{fe0f}",
            description: "Foundation building phase",
        },
    },
    LevelBand {
        lower_bound: 2.0,
        level: PlaneLevel {
            name: "Single Engine",
            emoji: "\u{1f6e9}\u{fe0f}",
            description: "Basic capabilities emerging",
        },
    },
    LevelBand {
        lower_bound: 3.0,
        level: PlaneLevel {
            name: "Regional Jet",
            emoji: "\u{2708}\u{fe0f}",
            description: "Growing sophistication",
        },
    },
    LevelBand {
        lower_bound: 4.5,
        level: PlaneLevel {
            name: "Commercial Jet",
            emoji: "\u{1f6eb}",
            description: "Advanced readiness",
        },
    },
    LevelBand {
        lower_bound: 6.0,
        level: PlaneLevel {
            name: "Wide-body Jet",
            emoji: "\u{2708}\u{fe0f}",
            description: "Enterprise capability",
        },
    },
    LevelBand {
        lower_bound: 7.5,
        level: PlaneLevel {
            name: "Airbus 380",
            emoji: "\u{1f6eb}",
            description: "Maximum operational capability",
        },
    },
];

impl PlaneLevel {
    /// Map a combined score to its tier. This is the only threshold table
    /// in the workspace; every caller converts to the 0-10 scale first.
    ///
    /// Out-of-range input saturates to the nearest tier and NaN falls
    /// through to the lowest, so classification never faults.
    pub fn classify(combined_score: f64) -> Self {
        let mut current = LEVEL_BANDS[0].level;
        for band in &LEVEL_BANDS[1..] {
            if combined_score >= band.lower_bound {
                current = band.level;
            } else {
                break;
            }
        }
        current
    }

    pub fn all() -> impl Iterator<Item = Self> {
        LEVEL_BANDS.iter().map(|band| band.level)
    }
}

// Levels round-trip through JSON by name; emoji and description come
// back from the static table.
impl<'de> Deserialize<'de> for PlaneLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Named {
            name: String,
        }

        let named = Named::deserialize(deserializer)?;
        Self::all()
            .find(|level| level.name == named.name)
            .ok_or_else(|| D::Error::custom(format!("unknown plane level: {}", named.name)))
    }
}

/// Project the 0-10 combined score onto the 0-1000 miles display scale.
/// The single conversion used everywhere miles appear.
pub fn to_flight_miles(combined_score: f64) -> i64 {
    (combined_score * 100.0).round() as i64
}

/// Fraction of the miles gauge to fill, clamped to `[0, 1]` for
/// rendering only.
pub fn gauge_fraction(miles: i64) -> f64 {
    (miles as f64 / MAX_FLIGHT_MILES as f64).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_are_half_open() {
        assert_eq!(PlaneLevel::classify(1.999).name, "Grounded");
        assert_eq!(PlaneLevel::classify(2.0).name, "Single Engine");
        assert_eq!(PlaneLevel::classify(3.0).name, "Regional Jet");
        assert_eq!(PlaneLevel::classify(4.5).name, "Commercial Jet");
        assert_eq!(PlaneLevel::classify(5.0).name, "Commercial Jet");
        assert_eq!(PlaneLevel::classify(6.0).name, "Wide-body Jet");
        assert_eq!(PlaneLevel::classify(7.5).name, "Airbus 380");
    }

    #[test]
    fn out_of_range_saturates() {
        assert_eq!(PlaneLevel::classify(-3.0).name, "Grounded");
        assert_eq!(PlaneLevel::classify(42.0).name, "Airbus 380");
        assert_eq!(PlaneLevel::classify(f64::NAN).name, "Grounded");
    }

    #[test]
    fn every_tier_is_reachable() {
        let names: Vec<&str> = [0.5, 2.5, 3.5, 5.0, 7.0, 9.0]
            .iter()
            .map(|s| PlaneLevel::classify(*s).name)
            .collect();
        let all: Vec<&str> = PlaneLevel::all().map(|l| l.name).collect();
        assert_eq!(names, all);
    }

    #[test]
    fn miles_scale_is_x100_and_monotonic() {
        assert_eq!(to_flight_miles(5.0), 500);
        assert_eq!(to_flight_miles(0.0), 0);
        assert_eq!(to_flight_miles(10.0), 1000);

        let mut prev = i64::MIN;
        for step in 0..=100 {
            let miles = to_flight_miles(f64::from(step) * 0.1);
            assert!(miles >= prev);
            prev = miles;
        }
    }

    #[test]
    fn levels_deserialize_by_name() {
        let level = PlaneLevel::classify(5.0);
        let json = serde_json::to_string(&level).unwrap();
        let back: PlaneLevel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, level);

        let unknown: Result<PlaneLevel, _> = serde_json::from_str(r#"{"name":"Zeppelin"}"#);
        assert!(unknown.is_err());
    }

    #[test]
    fn gauge_clamps_display_only() {
        assert_eq!(to_flight_miles(12.0), 1200);
        assert_eq!(gauge_fraction(1200), 1.0);
        assert_eq!(gauge_fraction(500), 0.5);
    }
}
