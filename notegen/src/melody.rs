// Melody generation: the 16th-note decision walk.
//
// The melody is built by scanning time at 16th-note resolution and making
// four independent decisions per step: whether a note sounds at all (the
// probability gate), which scale degree it takes (the degree scorer),
// which octave it lands in, and how loud and how long it is. Every
// decision except the degree comes from the deterministic hash source,
// keyed by the step index plus a per-decision salt so the streams don't
// correlate.
//
// Given the same style, tempo, duration, and scorer, the walk always
// produces the identical note list. Degenerate inputs (zero, negative, or
// non-finite tempo/duration) produce an empty melody rather than an error.
//
// Consumed by generator.rs, which merges the result with harmony.rs output.

use crate::note::Note;
use crate::scoring::{ScoreFunction, beat_features, degree_index};
use crate::style::Style;
use notegen_hash::{mix, unit_fraction};

/// Melody notes sit around octave 4 (middle C = 60) before variation.
const BASE_PITCH: i32 = 60;
const BASE_OCTAVE: i32 = 4;

// Salts separating the per-step decision streams. Adding a salt to the
// step index before mixing gives each decision an independent hash
// sequence over the same walk.
const OCTAVE_SALT: u32 = 2000;
const VELOCITY_SALT: u32 = 3000;
const DURATION_SALT: u32 = 4000;

/// Note lengths in beats a melody note can take, chosen by hash.
const DURATION_CHOICES: [f64; 4] = [0.25, 0.5, 1.0, 2.0];

/// Generate the melody line for a style.
///
/// Walks `floor(tempo / 60 * duration * 4)` 16th-note steps; each step
/// that passes the style's probability gate emits one note. Returns an
/// empty vector when tempo or duration is non-positive or non-finite.
pub fn build_melody(
    style: Style,
    tempo: f64,
    duration: f64,
    scorer: &dyn ScoreFunction,
) -> Vec<Note> {
    if !(tempo.is_finite() && duration.is_finite() && tempo > 0.0 && duration > 0.0) {
        return Vec::new();
    }

    let config = style.config();
    let intervals = config.scale.intervals();
    let beats_per_second = tempo / 60.0;
    let seconds_per_beat = 60.0 / tempo;
    let total_beats = beats_per_second * duration;
    let steps = (total_beats * 4.0).floor() as u32;

    let (vmin, vmax) = config.velocity_range;
    let (omin, omax) = config.octave_range;
    let octave_span = (omax - omin + 1) as u32;

    let mut notes = Vec::new();
    for beat_step in 0..steps {
        if unit_fraction(beat_step) < config.note_probability {
            let beat = f64::from(beat_step) * 0.25;

            let output = scorer.score(&beat_features(beat, style));
            let degree = degree_index(output, intervals.len());

            let octave_variation =
                (mix(beat_step.wrapping_add(OCTAVE_SALT)) % octave_span) as i32 + omin;
            let velocity =
                vmin + unit_fraction(beat_step.wrapping_add(VELOCITY_SALT)) * (vmax - vmin);
            let beats_held =
                DURATION_CHOICES[(mix(beat_step.wrapping_add(DURATION_SALT)) % 4) as usize];

            notes.push(Note {
                pitch: BASE_PITCH + intervals[degree] + 12 * octave_variation,
                velocity,
                start_time: beat / beats_per_second,
                duration: beats_held * seconds_per_beat * config.duration_multiplier,
                octave: BASE_OCTAVE + octave_variation,
            });
        }
    }
    notes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{DegreeScorer, FEATURE_COUNT};

    fn neutral_scorer() -> DegreeScorer {
        DegreeScorer::from_weights([[0.0; FEATURE_COUNT]; FEATURE_COUNT])
    }

    #[test]
    fn test_degenerate_inputs_empty() {
        let scorer = neutral_scorer();
        assert!(build_melody(Style::Ambient, 120.0, 0.0, &scorer).is_empty());
        assert!(build_melody(Style::Ambient, 0.0, 30.0, &scorer).is_empty());
        assert!(build_melody(Style::Ambient, -60.0, 30.0, &scorer).is_empty());
        assert!(build_melody(Style::Ambient, 120.0, -1.0, &scorer).is_empty());
        assert!(build_melody(Style::Ambient, f64::NAN, 30.0, &scorer).is_empty());
        assert!(build_melody(Style::Ambient, 120.0, f64::INFINITY, &scorer).is_empty());
    }

    /// Ten seconds at 120 BPM is 80 16th-note steps. The gate is shared
    /// across styles, so these counts pin the hash sequence as much as
    /// the probabilities.
    #[test]
    fn test_note_counts_pinned() {
        let scorer = neutral_scorer();
        let count = |style| build_melody(style, 120.0, 10.0, &scorer).len();
        assert_eq!(count(Style::Ambient), 17);
        assert_eq!(count(Style::Classical), 41);
        assert_eq!(count(Style::Electronic), 48);
        assert_eq!(count(Style::Jazz), 35);
        assert_eq!(count(Style::Rock), 56);
        assert_eq!(count(Style::Cinematic), 29);
    }

    #[test]
    fn test_count_monotone_in_probability() {
        // All styles share one gate stream, so a higher note probability
        // admits a superset of steps.
        let scorer = neutral_scorer();
        let by_probability = [
            Style::Ambient,    // 0.3
            Style::Cinematic,  // 0.4
            Style::Jazz,       // 0.5
            Style::Classical,  // 0.6
            Style::Electronic, // 0.7
            Style::Rock,       // 0.8
        ];
        let counts: Vec<usize> = by_probability
            .iter()
            .map(|&s| build_melody(s, 100.0, 60.0, &scorer).len())
            .collect();
        for pair in counts.windows(2) {
            assert!(pair[0] <= pair[1], "counts not monotone: {counts:?}");
        }
    }

    #[test]
    fn test_notes_respect_style_ranges() {
        let scorer = neutral_scorer();
        for style in Style::ALL {
            let config = style.config();
            let (vmin, vmax) = config.velocity_range;
            let (omin, omax) = config.octave_range;
            let intervals = config.scale.intervals();
            for note in build_melody(style, 90.0, 20.0, &scorer) {
                assert!(note.velocity >= vmin && note.velocity <= vmax);
                let variation = note.octave - BASE_OCTAVE;
                assert!(variation >= omin && variation <= omax);
                // Pitch must be a scale tone in the note's octave.
                let offset = note.pitch - BASE_PITCH - 12 * variation;
                assert!(
                    intervals.contains(&offset),
                    "{:?}: pitch {} (offset {}) not in scale",
                    style,
                    note.pitch,
                    offset
                );
                assert!(note.duration > 0.0);
                assert!(note.start_time >= 0.0);
            }
        }
    }

    #[test]
    fn test_durations_quantized() {
        // At 120 BPM ambient (multiplier 2.0) the four duration classes
        // come out as exactly 0.25, 0.5, 1.0, and 2.0 seconds.
        let scorer = neutral_scorer();
        for note in build_melody(Style::Ambient, 120.0, 30.0, &scorer) {
            assert!(
                [0.25, 0.5, 1.0, 2.0].contains(&note.duration),
                "unexpected duration {}",
                note.duration
            );
        }
    }

    #[test]
    fn test_start_times_strictly_increasing() {
        let scorer = neutral_scorer();
        let notes = build_melody(Style::Rock, 140.0, 15.0, &scorer);
        assert!(!notes.is_empty());
        for pair in notes.windows(2) {
            assert!(pair[0].start_time < pair[1].start_time);
        }
    }

    #[test]
    fn test_deterministic_across_calls() {
        let scorer = neutral_scorer();
        let a = build_melody(Style::Electronic, 128.0, 12.0, &scorer);
        let b = build_melody(Style::Electronic, 128.0, 12.0, &scorer);
        assert_eq!(a, b);
    }

    #[test]
    fn test_first_rock_note_pinned() {
        let scorer = neutral_scorer();
        let notes = build_melody(Style::Rock, 120.0, 10.0, &scorer);
        let first = notes[0];
        // Step 0 passes the gate (the zero key hashes to zero). With the
        // neutral scorer the degree lands mid-scale: pentatonic[2] = 4.
        assert_eq!(first.pitch, 64);
        assert_eq!(first.octave, 4);
        assert_eq!(first.start_time, 0.0);
        assert!((first.velocity - 0.754).abs() < 1e-12);
        assert!((first.duration - 0.1).abs() < 1e-12);
    }
}
