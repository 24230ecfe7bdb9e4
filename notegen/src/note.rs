// Note value type: the single event record everything downstream consumes.
//
// A Note is a timed pitch event with velocity and a display octave. Pitch
// is a MIDI semitone number (60 = middle C) but is deliberately not clamped
// to 0-127: extreme octave ranges can push pitches outside MIDI range, and
// whether to fold or drop them is a renderer decision, not ours.
//
// The display octave is stored, not derived from pitch. Melody notes carry
// the base octave plus their per-note variation; harmony notes are pinned
// to octave 3 regardless of where the triad voicing lands. Keeping the two
// decoupled matches how the events are labeled for display.
//
// Produced by melody.rs and harmony.rs, ordered by generator.rs, and
// serialized by export.rs.

use serde::{Deserialize, Serialize};

/// Pitch-class names with sharp spelling, indexed by `pitch mod 12`.
pub const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// A single timed note event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// MIDI semitone number (60 = middle C). Not clamped to 0-127.
    pub pitch: i32,
    /// Loudness in [0, 1], within the generating style's velocity range.
    pub velocity: f64,
    /// Onset in seconds from the start of the piece.
    pub start_time: f64,
    /// Length in seconds.
    pub duration: f64,
    /// Display octave. Stored at creation, not derived from pitch.
    pub octave: i32,
}

impl Note {
    /// Frequency in Hz under 12-tone equal temperament, A4 = 440 Hz.
    pub fn frequency(&self) -> f64 {
        440.0 * 2f64.powf(f64::from(self.pitch - 69) / 12.0)
    }

    /// Display name: pitch-class name plus the stored octave, e.g. "C4".
    ///
    /// Euclidean remainder keeps negative pitches indexing the name table
    /// correctly (pitch -1 is a B, not a panic).
    pub fn note_name(&self) -> String {
        let pc = self.pitch.rem_euclid(12) as usize;
        format!("{}{}", NOTE_NAMES[pc], self.octave)
    }
}
