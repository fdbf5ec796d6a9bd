//! Deterministic seed chaining.
//!
//! Every seeded combinator threads its seed through the octave loop by adding
//! [`GOLDEN`] once per octave, *before* the octave samples. Octave `o`
//! (0-based) therefore always receives `initial + (o + 1) * GOLDEN`, which
//! [`octave_seed`] computes directly so a single octave can be reproduced in
//! isolation.

/// The odd 64-bit golden-ratio constant, `2^64 / phi`, as a signed value.
#[expect(clippy::unreadable_literal, reason = "canonical hex spelling")]
pub const GOLDEN: i64 = 0x9E3779B97F4A7C15_u64 as i64;

/// Advance a seed by one step of the chain.
#[inline]
#[must_use]
pub const fn advance(seed: i64) -> i64 {
    seed.wrapping_add(GOLDEN)
}

/// Seed used by octave `octave` when the chain starts at `initial`.
#[inline]
#[must_use]
pub const fn octave_seed(initial: i64, octave: u32) -> i64 {
    initial.wrapping_add(GOLDEN.wrapping_mul(octave as i64 + 1))
}

/// Mix an opaque seed into a well-distributed 64-bit constant.
///
/// SplitMix64 finalizer applied after one chain step, so `derive(s)` and
/// `derive(advance(s))` are unrelated.
#[inline]
#[must_use]
#[expect(clippy::unreadable_literal, reason = "published mixing constants")]
pub const fn derive(seed: i64) -> i64 {
    let mut z = advance(seed) as u64;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    (z ^ (z >> 31)) as i64
}

/// Map a seed to a double in `[-1, 1)`.
#[inline]
#[must_use]
pub fn derive_unit(seed: i64) -> f64 {
    // Top 53 bits, as a signed fraction.
    (derive(seed) >> 11) as f64 * (1.0 / (1_u64 << 52) as f64)
}

/// Infinite iterator over the seed chain, starting with the first advanced
/// seed (the one octave 0 uses).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedStream {
    state: i64,
}

impl SeedStream {
    /// Start a chain at `initial`.
    #[must_use]
    pub const fn new(initial: i64) -> Self {
        Self { state: initial }
    }
}

impl Iterator for SeedStream {
    type Item = i64;

    #[inline]
    fn next(&mut self) -> Option<i64> {
        self.state = advance(self.state);
        Some(self.state)
    }
}
