// Deterministic, portable hash source for beat-level decisions.
//
// Implements a stateless 32-bit avalanche mixer (the MurmurHash3 finalizer
// construction) plus a 32-bit FNV-1a string hash. This is a hand-rolled
// implementation with zero external dependencies, chosen for portability
// and to guarantee identical output across all platforms.
//
// This crate is the single source of "randomness" for the notegen melody
// builder: every per-beat decision (note gate, octave variation, velocity,
// duration class) is derived by mixing the beat index with a per-decision
// salt. There is no generator state to seed or advance. The same key
// always yields the same value, which is what makes generated sequences
// reproducible for identical inputs.
//
// **Critical constraint: determinism.** Every function here must produce
// identical output for identical input, regardless of platform, compiler
// version, or optimization level. All arithmetic is fixed-width `u32` with
// explicit wrapping; overflow is part of the algorithm, not an error. Do
// not introduce floating-point math before the final division, stdlib
// hashers (they are process-salted), or any source of non-determinism.

/// Avalanche-mix a 32-bit key into a well-dispersed 32-bit value.
///
/// Two xor-shift/multiply rounds plus a final xor-shift (the MurmurHash3
/// finalizer). Unsigned arithmetic keeps the result inherently
/// non-negative. Note that `mix(0) == 0`: the all-zero key is the one
/// fixed point of this construction.
pub fn mix(key: u32) -> u32 {
    let mut k = key;
    k ^= k >> 16;
    k = k.wrapping_mul(0x85eb_ca6b);
    k ^= k >> 13;
    k = k.wrapping_mul(0xc2b2_ae35);
    k ^= k >> 16;
    k
}

/// Pseudo-uniform value in [0, 1) derived from `key`.
///
/// `(mix(key) % 100) / 100`, so the resolution is one hundredth. Callers
/// compare against probabilities with strict `<`; the hundredth grid means
/// a probability of 1.0 always passes and 0.0 never does.
pub fn unit_fraction(key: u32) -> f64 {
    f64::from(mix(key) % 100) / 100.0
}

/// 32-bit FNV-1a hash of a byte string.
///
/// Used to derive a stable per-style seed from the style name. Unlike
/// `std::hash`, the result is identical across processes and platforms.
pub fn fnv1a(data: &[u8]) -> u32 {
    let mut hash: u32 = 0x811c_9dc5;
    for &byte in data {
        hash ^= u32::from(byte);
        hash = hash.wrapping_mul(0x0100_0193);
    }
    hash
}
