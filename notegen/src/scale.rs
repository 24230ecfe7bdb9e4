// Scale definitions: the interval tables behind every pitch decision.
//
// Each scale is an ordered set of semitone offsets from a root. Melody
// picks one offset per emitted note (via the degree scorer); harmony walks
// a style's progression through the same table to voice triads. The tables
// are fixed at compile time; there is no dynamic scale registration.
//
// This module provides:
// - Scale definitions with their semitone interval patterns
// - Case-insensitive name lookup for the style registry
//
// Used by style.rs for per-style scale references and by melody.rs /
// harmony.rs for degree-to-semitone mapping.

use serde::{Deserialize, Serialize};

/// The six supported scales, each defined by its interval pattern from the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scale {
    /// Major (Ionian): the plain do-re-mi scale
    Major,
    /// Natural minor (Aeolian)
    Minor,
    /// Major pentatonic: five notes, no half-steps
    Pentatonic,
    /// Hexatonic blues: minor pentatonic plus the flat 5th
    Blues,
    /// Dorian: natural minor with raised 6th
    Dorian,
    /// Mixolydian: major with lowered 7th
    Mixolydian,
}

impl Scale {
    /// Semitone offsets from the root, ascending, starting at 0.
    /// Between 5 and 7 entries depending on the scale.
    pub fn intervals(self) -> &'static [i32] {
        match self {
            Scale::Major => &[0, 2, 4, 5, 7, 9, 11],
            Scale::Minor => &[0, 2, 3, 5, 7, 8, 10],
            Scale::Pentatonic => &[0, 2, 4, 7, 9],
            Scale::Blues => &[0, 3, 5, 6, 7, 10],
            Scale::Dorian => &[0, 2, 3, 5, 7, 9, 10],
            Scale::Mixolydian => &[0, 2, 4, 5, 7, 9, 10],
        }
    }

    /// Lowercase display name, matching the lookup key.
    pub fn name(self) -> &'static str {
        match self {
            Scale::Major => "major",
            Scale::Minor => "minor",
            Scale::Pentatonic => "pentatonic",
            Scale::Blues => "blues",
            Scale::Dorian => "dorian",
            Scale::Mixolydian => "mixolydian",
        }
    }

    /// Case-insensitive lookup by name.
    pub fn from_name(name: &str) -> Option<Scale> {
        match name.to_lowercase().as_str() {
            "major" => Some(Scale::Major),
            "minor" => Some(Scale::Minor),
            "pentatonic" => Some(Scale::Pentatonic),
            "blues" => Some(Scale::Blues),
            "dorian" => Some(Scale::Dorian),
            "mixolydian" => Some(Scale::Mixolydian),
            _ => None,
        }
    }

    /// All scales, for table-driven tests and listings.
    pub const ALL: [Scale; 6] = [
        Scale::Major,
        Scale::Minor,
        Scale::Pentatonic,
        Scale::Blues,
        Scale::Dorian,
        Scale::Mixolydian,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_tables_well_formed() {
        for scale in Scale::ALL {
            let intervals = scale.intervals();
            assert!(
                (5..=7).contains(&intervals.len()),
                "{:?} has {} degrees",
                scale,
                intervals.len()
            );
            assert_eq!(intervals[0], 0, "{:?} must start at the root", scale);
            for pair in intervals.windows(2) {
                assert!(
                    pair[0] < pair[1],
                    "{:?} intervals must strictly increase",
                    scale
                );
            }
            assert!(*intervals.last().unwrap() < 12, "{:?} exceeds an octave", scale);
        }
    }

    #[test]
    fn test_known_scales() {
        assert_eq!(Scale::Major.intervals(), &[0, 2, 4, 5, 7, 9, 11]);
        assert_eq!(Scale::Pentatonic.intervals(), &[0, 2, 4, 7, 9]);
        assert_eq!(Scale::Dorian.intervals(), &[0, 2, 3, 5, 7, 9, 10]);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Scale::from_name("major"), Some(Scale::Major));
        assert_eq!(Scale::from_name("MIXOLYDIAN"), Some(Scale::Mixolydian));
        assert_eq!(Scale::from_name("Blues"), Some(Scale::Blues));
        assert_eq!(Scale::from_name("chromatic"), None);
        assert_eq!(Scale::from_name(""), None);
    }

    #[test]
    fn test_name_round_trip() {
        for scale in Scale::ALL {
            assert_eq!(Scale::from_name(scale.name()), Some(scale));
        }
    }
}
