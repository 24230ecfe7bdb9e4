// Note selection: mapping beat positions to scale degrees.
//
// Melody pitch choice is driven by a tiny fixed-weight linear map rather
// than the hash source: a 4-entry feature vector describing the beat
// (two slow sinusoids, a per-style constant, and the position within the
// bar) is pushed through a 4x4 weight matrix and a logistic squash,
// yielding a value in (0, 1) that indexes into the scale.
//
// The weights are drawn once at construction and never updated. There is
// no training loop and no fitting; the matrix exists to give each
// generator instance its own stable melodic contour. Two instances built
// from OS entropy will phrase differently; one instance always phrases
// the same way.
//
// The ScoreFunction trait is the seam for swapping in a different
// selector. Consumed by melody.rs; the trait object lives on
// generator.rs's MusicGenerator.

use crate::style::Style;
use notegen_hash::fnv1a;
use rand::Rng;

/// Number of features describing a beat, and the scorer's expected input
/// dimension.
pub const FEATURE_COUNT: usize = 4;

/// Maps a beat feature vector to a value in [0, 1].
pub trait ScoreFunction {
    /// Score a feature vector. Implementations must return a value in
    /// [0, 1] and must tolerate inputs of the wrong length (returning a
    /// neutral score rather than panicking).
    fn score(&self, features: &[f64]) -> f64;
}

/// The default selector: fixed random linear map plus logistic squash.
#[derive(Debug, Clone)]
pub struct DegreeScorer {
    weights: [[f64; FEATURE_COUNT]; FEATURE_COUNT],
}

impl DegreeScorer {
    /// Draw a weight matrix uniformly from [-1, 1]. The matrix is fixed
    /// for the lifetime of the scorer.
    pub fn new(rng: &mut impl Rng) -> Self {
        let mut weights = [[0.0; FEATURE_COUNT]; FEATURE_COUNT];
        for row in &mut weights {
            for w in row.iter_mut() {
                *w = rng.random_range(-1.0..=1.0);
            }
        }
        DegreeScorer { weights }
    }

    /// Build from an explicit weight matrix.
    pub fn from_weights(weights: [[f64; FEATURE_COUNT]; FEATURE_COUNT]) -> Self {
        DegreeScorer { weights }
    }
}

impl ScoreFunction for DegreeScorer {
    fn score(&self, features: &[f64]) -> f64 {
        if features.len() != FEATURE_COUNT {
            // Dimension mismatch is non-fatal: neutral score.
            return 0.5;
        }
        let mut raw = 0.0;
        for (i, &f) in features.iter().enumerate() {
            for j in 0..FEATURE_COUNT {
                raw += f * self.weights[i][j];
            }
        }
        // Clamp before exponentiating so the squash can't overflow.
        let raw = raw.clamp(-500.0, 500.0);
        1.0 / (1.0 + (-raw).exp())
    }
}

/// Feature vector for a beat position under a style.
///
/// `beat` is the position in quarter notes from the start. The third
/// feature is a stable per-style constant: the FNV-1a hash of the style
/// name folded into [0, 1) so it is comparable in magnitude to the
/// sinusoid features.
pub fn beat_features(beat: f64, style: Style) -> [f64; FEATURE_COUNT] {
    let style_seed = f64::from(fnv1a(style.name().as_bytes()) % 1000) / 1000.0;
    [
        (0.1 * beat).sin(),
        (0.05 * beat).cos(),
        style_seed,
        (beat % 4.0) / 4.0,
    ]
}

/// Map a scorer output in [0, 1] to a scale degree index.
///
/// `floor(output * scale_len)`, clamped into bounds so that an output of
/// exactly 1.0 (or a misbehaving scorer) still yields a valid degree.
pub fn degree_index(output: f64, scale_len: usize) -> usize {
    let idx = (output * scale_len as f64).floor() as i64;
    idx.clamp(0, scale_len as i64 - 1) as usize
}
