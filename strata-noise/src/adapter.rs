//! Lower-dimensional views of higher-dimensional noise.
//!
//! A [`Sliced<M, K>`] pins the last `K` coordinates of an `M`-dimensional basis,
//! e.g. a 4D field viewed as 3D space at a fixed time. With `K = 2` the pinned
//! pair can be driven by an angle, giving a smooth loop through the extra
//! dimensions instead of a drift that never repeats.

use crate::noise::{Basis, Noise};

/// An `M`-dimensional basis with its trailing `K` coordinates held fixed.
///
/// Implements `Noise<M - K>` for every `M <= 6` and `K` in `1..=2`.
pub struct Sliced<const M: usize, const K: usize> {
    basis: Basis<M>,
    fixed: [f64; K],
}

impl<const M: usize, const K: usize> Sliced<M, K> {
    /// Pin the trailing coordinates of `basis` to `fixed`.
    #[must_use]
    pub const fn new(basis: Basis<M>, fixed: [f64; K]) -> Self {
        Self { basis, fixed }
    }

    /// The pinned trailing coordinates.
    #[must_use]
    pub const fn fixed(&self) -> [f64; K] {
        self.fixed
    }

    /// Move the slice, e.g. to advance time.
    pub const fn set_fixed(&mut self, fixed: [f64; K]) {
        self.fixed = fixed;
    }

    #[inline]
    fn lift<const N: usize>(&self, point: [f64; N]) -> [f64; M] {
        let mut out = [0.0; M];
        out[..N].copy_from_slice(&point);
        out[N..].copy_from_slice(&self.fixed);
        out
    }
}

impl<const M: usize> Sliced<M, 2> {
    /// Pin the last two coordinates to `(cos angle, sin angle)`.
    #[must_use]
    pub fn cyclic(basis: Basis<M>, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(basis, [cos, sin])
    }

    /// Move around the loop to `angle` (radians).
    pub fn set_angle(&mut self, angle: f64) {
        let (sin, cos) = angle.sin_cos();
        self.fixed = [cos, sin];
    }
}

macro_rules! impl_sliced {
    ($($m:literal - $k:literal => $n:literal),* $(,)?) => {
        $(
            impl Noise<$n> for Sliced<$m, $k> {
                #[inline]
                fn noise(&self, point: [f64; $n]) -> f64 {
                    self.basis.noise(self.lift(point))
                }

                #[inline]
                fn noise_seeded(&self, point: [f64; $n], seed: i64) -> f64 {
                    self.basis.noise_seeded(self.lift(point), seed)
                }
            }
        )*
    };
}

impl_sliced! {
    2 - 1 => 1,
    3 - 1 => 2,
    4 - 1 => 3,
    5 - 1 => 4,
    6 - 1 => 5,
    3 - 2 => 1,
    4 - 2 => 2,
    5 - 2 => 3,
    6 - 2 => 4,
}
