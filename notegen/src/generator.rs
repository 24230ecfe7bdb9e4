// Generation entry point: style lookup, track building, and the merge.
//
// MusicGenerator owns the one piece of per-instance state, the degree
// scorer. Construction draws the scorer's weight matrix (from OS entropy
// by default, or from an explicit seed); after that the instance is
// read-only and every generate() call with the same arguments returns
// the same notes.
//
// generate() resolves the style name, builds the melody and harmony
// tracks, and merges them into a single list ordered by start time. The
// only failure is an unknown style name; degenerate tempo or duration
// values fall through to the builders, which answer with empty tracks.

use crate::harmony::build_harmony;
use crate::melody::build_melody;
use crate::note::Note;
use crate::scoring::{DegreeScorer, ScoreFunction};
use crate::style::Style;
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;

/// Errors from `MusicGenerator::generate`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    /// The requested style name is not in the registry.
    #[error("unknown style '{0}'")]
    UnknownStyle(String),
}

/// Procedural melody + harmony generator for one scorer instance.
pub struct MusicGenerator {
    scorer: Box<dyn ScoreFunction>,
}

impl MusicGenerator {
    /// Generator with scorer weights drawn from OS entropy. Two
    /// generators built this way will phrase melodies differently.
    pub fn new() -> Self {
        let mut rng = StdRng::from_os_rng();
        MusicGenerator {
            scorer: Box::new(DegreeScorer::new(&mut rng)),
        }
    }

    /// Generator with scorer weights drawn from a fixed seed, for
    /// reproducible output across runs and machines.
    pub fn seeded(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        MusicGenerator {
            scorer: Box::new(DegreeScorer::new(&mut rng)),
        }
    }

    /// Generator with a caller-supplied scorer.
    pub fn with_scorer(scorer: Box<dyn ScoreFunction>) -> Self {
        MusicGenerator { scorer }
    }

    /// Generate `duration` seconds of notes in the named style at
    /// `tempo` BPM, ordered by start time.
    ///
    /// Fails only for an unrecognized style name. Non-positive or
    /// non-finite tempo/duration yield `Ok` with an empty list.
    pub fn generate(
        &self,
        style: &str,
        tempo: f64,
        duration: f64,
    ) -> Result<Vec<Note>, GenerateError> {
        let style = Style::from_name(style)
            .ok_or_else(|| GenerateError::UnknownStyle(style.to_string()))?;

        let melody = build_melody(style, tempo, duration, self.scorer.as_ref());
        let harmony = build_harmony(style, tempo, duration);
        debug!(
            "{}: {} melody + {} harmony notes at {} BPM over {}s",
            style.name(),
            melody.len(),
            harmony.len(),
            tempo,
            duration
        );

        Ok(merge_tracks(melody, harmony))
    }
}

impl Default for MusicGenerator {
    fn default() -> Self {
        MusicGenerator::new()
    }
}

/// Merge the two tracks into one list ordered by start time.
///
/// The sort is stable over the melody-then-harmony concatenation: at
/// equal start times melody notes come first and chord voices keep
/// their stacking order. Overlapping notes are left as they are; how
/// to mix them is the renderer's problem.
pub fn merge_tracks(melody: Vec<Note>, harmony: Vec<Note>) -> Vec<Note> {
    let mut notes = melody;
    notes.extend(harmony);
    notes.sort_by(|a, b| a.start_time.total_cmp(&b.start_time));
    notes
}
