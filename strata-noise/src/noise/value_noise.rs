//! Seeded lattice value noise.
//!
//! Each integer lattice corner gets a pseudo-random value in `[-1, 1)` derived
//! from the seed and the corner's coordinates; a sample blends the `2^N`
//! surrounding corners with a quintic fade per axis. The blend weights form a
//! partition of unity, so the output stays inside `[-1, 1]`.

use crate::math::{quintic, split_floor};
use crate::noise::Noise;
use crate::seed::derive_unit;

/// Large odd per-axis multipliers used to fold corner coordinates into the seed.
#[expect(clippy::unreadable_literal, reason = "hash multipliers")]
const AXIS_MULTIPLIERS: [i64; 6] = [
    0x1F1F1F1F1F1F1F1,
    0x5851F42D4C957F2D,
    0x2545F4914F6CDD1D,
    0x369DEA0F31A53F85,
    0x6A5D39EAE116586D,
    0x4F1BBCDCBFA53E0B,
];

/// Value noise for any dimensionality up to 6.
///
/// One instance serves every `N`; the stored seed is what [`Noise::noise`]
/// uses, while [`Noise::noise_seeded`] ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueNoise {
    seed: i64,
}

impl Default for ValueNoise {
    fn default() -> Self {
        Self::new(0x5EED)
    }
}

impl ValueNoise {
    /// Create a value noise source with the given default seed.
    #[must_use]
    pub const fn new(seed: i64) -> Self {
        Self { seed }
    }

    /// The default seed used by unseeded sampling.
    #[must_use]
    pub const fn seed(&self) -> i64 {
        self.seed
    }

    fn sample<const N: usize>(point: [f64; N], seed: i64) -> f64 {
        let mut cell = [0_i64; N];
        let mut fade = [0.0_f64; N];
        for axis in 0..N {
            let (floor, offset) = split_floor(point[axis]);
            cell[axis] = floor;
            fade[axis] = quintic(offset);
        }

        let mut sum = 0.0;
        for corner in 0..(1_usize << N) {
            let mut weight = 1.0;
            let mut hash = seed;
            for axis in 0..N {
                let high = (corner >> axis) & 1 == 1;
                let coord = cell[axis].wrapping_add(i64::from(high));
                weight *= if high { fade[axis] } else { 1.0 - fade[axis] };
                hash = hash.wrapping_add(coord.wrapping_mul(AXIS_MULTIPLIERS[axis % 6]));
                hash ^= hash >> 29;
            }
            sum += weight * derive_unit(hash);
        }
        sum
    }
}

impl<const N: usize> Noise<N> for ValueNoise {
    #[inline]
    fn noise(&self, point: [f64; N]) -> f64 {
        Self::sample(point, self.seed)
    }

    #[inline]
    fn noise_seeded(&self, point: [f64; N], seed: i64) -> f64 {
        Self::sample(point, seed)
    }
}
