// Style registry: named parameter bundles that drive generation.
//
// A style fixes everything about a run except tempo and duration: which
// scale to draw pitches from, the chord-root progression, how dense the
// melody is, how loud notes are, how long they ring, and how far the
// melody may wander from the base octave.
//
// The registry is a compile-time table (enum + match), loaded nowhere and
// shared read-only everywhere. Progression entries are scale-degree
// indices and may equal or exceed the scale length; consumers dereference
// them modulo the scale length (rock's progression runs off the end of
// the pentatonic scale on purpose).
//
// Used by generator.rs for name lookup and by melody.rs / harmony.rs for
// the actual parameters.

use crate::scale::Scale;
use serde::{Deserialize, Serialize};

/// The six built-in styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Style {
    /// Sparse, quiet, long notes over a dorian wash
    Ambient,
    /// Moderate density, wide dynamics, major-key i-vi-IV-V motion
    Classical,
    /// Dense, loud, short notes in natural minor
    Electronic,
    /// Mixolydian with a ii-V flavored progression
    Jazz,
    /// Dense and loud on the pentatonic scale
    Rock,
    /// Slow dorian with a wide low octave range
    Cinematic,
}

/// Generation parameters for one style. All fields are read-only tables.
#[derive(Debug, Clone, Copy)]
pub struct StyleConfig {
    /// Scale pitches are drawn from.
    pub scale: Scale,
    /// Chord-root degrees, cycled by the harmony builder. Entries are
    /// dereferenced modulo the scale length.
    pub progression: &'static [usize],
    /// Probability in (0, 1] that any given 16th-note step emits a note.
    pub note_probability: f64,
    /// Inclusive (min, max) melody velocity bounds.
    pub velocity_range: (f64, f64),
    /// Scales every melody note's duration. Greater than zero.
    pub duration_multiplier: f64,
    /// Inclusive (min, max) octave variation relative to the base octave.
    pub octave_range: (i32, i32),
}

impl Style {
    /// The style's full parameter set.
    pub fn config(self) -> StyleConfig {
        match self {
            Style::Ambient => StyleConfig {
                scale: Scale::Dorian,
                progression: &[0, 3, 6, 4],
                note_probability: 0.3,
                velocity_range: (0.2, 0.6),
                duration_multiplier: 2.0,
                octave_range: (-1, 1),
            },
            Style::Classical => StyleConfig {
                scale: Scale::Major,
                progression: &[0, 5, 3, 4],
                note_probability: 0.6,
                velocity_range: (0.4, 0.8),
                duration_multiplier: 1.0,
                octave_range: (-1, 2),
            },
            Style::Electronic => StyleConfig {
                scale: Scale::Minor,
                progression: &[0, 6, 3, 4],
                note_probability: 0.7,
                velocity_range: (0.6, 0.9),
                duration_multiplier: 0.5,
                octave_range: (-1, 1),
            },
            Style::Jazz => StyleConfig {
                scale: Scale::Mixolydian,
                progression: &[0, 3, 4, 5],
                note_probability: 0.5,
                velocity_range: (0.4, 0.7),
                duration_multiplier: 1.2,
                octave_range: (0, 1),
            },
            Style::Rock => StyleConfig {
                scale: Scale::Pentatonic,
                progression: &[0, 5, 3, 4],
                note_probability: 0.8,
                velocity_range: (0.7, 1.0),
                duration_multiplier: 0.8,
                octave_range: (0, 1),
            },
            Style::Cinematic => StyleConfig {
                scale: Scale::Dorian,
                progression: &[0, 4, 1, 5],
                note_probability: 0.4,
                velocity_range: (0.3, 0.75),
                duration_multiplier: 1.5,
                octave_range: (-2, 1),
            },
        }
    }

    /// Lowercase display name, matching the lookup key.
    pub fn name(self) -> &'static str {
        match self {
            Style::Ambient => "ambient",
            Style::Classical => "classical",
            Style::Electronic => "electronic",
            Style::Jazz => "jazz",
            Style::Rock => "rock",
            Style::Cinematic => "cinematic",
        }
    }

    /// Case-insensitive lookup by name.
    pub fn from_name(name: &str) -> Option<Style> {
        match name.to_lowercase().as_str() {
            "ambient" => Some(Style::Ambient),
            "classical" => Some(Style::Classical),
            "electronic" => Some(Style::Electronic),
            "jazz" => Some(Style::Jazz),
            "rock" => Some(Style::Rock),
            "cinematic" => Some(Style::Cinematic),
            _ => None,
        }
    }

    /// All styles, for table-driven tests and the demo binary's sweep.
    pub const ALL: [Style; 6] = [
        Style::Ambient,
        Style::Classical,
        Style::Electronic,
        Style::Jazz,
        Style::Rock,
        Style::Cinematic,
    ];
}
