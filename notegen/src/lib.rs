// notegen: style-driven procedural music generator.
//
// Produces a timed list of melody and harmony notes for a named style.
// A style fixes the scale, chord progression, note density, dynamics,
// octave range, and note-length scaling; tempo and duration are chosen
// per run. Melody decisions are driven by a stateless hash source
// (notegen_hash) plus a tiny fixed-weight degree scorer; harmony is a
// pure table walk. The output is events only, there is no audio here.
//
// Architecture:
// - note.rs: the Note value type, name and frequency derivation
// - scale.rs: scale interval tables and name lookup
// - style.rs: style registry (scale + progression + ranges per style)
// - scoring.rs: beat feature vector, ScoreFunction trait, DegreeScorer
// - melody.rs: the 16th-note decision walk over the hash source
// - harmony.rs: whole-bar triads over the style's progression
// - generator.rs: MusicGenerator entry point, track merge, error type
// - export.rs: flat JSON note-list output
//
// Within one MusicGenerator instance, generation is deterministic:
// identical (style, tempo, duration) always yields the identical note
// list. Instance-to-instance variety comes only from the scorer weights
// drawn at construction.

pub mod export;
pub mod generator;
pub mod harmony;
pub mod melody;
pub mod note;
pub mod scale;
pub mod scoring;
pub mod style;
