// Harmony generation: block triads over the style's progression.
//
// Time is cut into fixed whole-bar chord slots (four beats each). Each
// slot takes its root degree from the style's progression, cycled, and
// voices a closed triad by stacking every-other scale degree on the root.
// All indexing into the scale wraps modulo its length, so progressions
// are free to name degrees past the end of short scales.
//
// Unlike the melody walk there is no randomness here at all: the harmony
// for a given style, tempo, and duration is a pure function of the
// tables. Chord notes sit an octave below the melody's base and carry
// fixed per-voice velocities so the bass of each triad leads.
//
// Consumed by generator.rs, which merges the result with melody.rs output.

use crate::note::Note;
use crate::style::Style;

/// Chords are rooted around octave 3 (an octave under the melody base).
const ROOT_PITCH: i32 = 48;
const CHORD_OCTAVE: i32 = 3;

/// Every chord slot spans one bar of four beats.
const BEATS_PER_CHORD: f64 = 4.0;

/// Scale-degree offsets stacked on the root to voice a triad.
const TRIAD_OFFSETS: [usize; 3] = [0, 2, 4];

/// Generate the chord track for a style.
///
/// Emits exactly three notes per chord slot, sharing the slot's start
/// time and duration. Returns an empty vector when tempo or duration is
/// non-positive or non-finite.
pub fn build_harmony(style: Style, tempo: f64, duration: f64) -> Vec<Note> {
    if !(tempo.is_finite() && duration.is_finite() && tempo > 0.0 && duration > 0.0) {
        return Vec::new();
    }

    let config = style.config();
    let intervals = config.scale.intervals();
    let scale_len = intervals.len();
    let chord_duration = (60.0 / tempo) * BEATS_PER_CHORD;
    let slots = (duration / chord_duration).floor() as u32;

    let mut notes = Vec::new();
    for chord_index in 0..slots {
        let start_time = f64::from(chord_index) * chord_duration;
        let root_degree = config.progression[chord_index as usize % config.progression.len()];
        let root_pitch = ROOT_PITCH + intervals[root_degree % scale_len];

        for (i, &offset) in TRIAD_OFFSETS.iter().enumerate() {
            notes.push(Note {
                pitch: root_pitch + intervals[(root_degree + offset) % scale_len],
                velocity: 0.3 + 0.1 * i as f64,
                start_time,
                duration: chord_duration,
                octave: CHORD_OCTAVE,
            });
        }
    }
    notes
}
