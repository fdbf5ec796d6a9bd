//! The noise capability and the reference bases.
//!
//! - [`Noise`] - A pure field over `N`-dimensional coordinates
//! - [`Basis`] - Shared handle combinators use to hold wrapped fields
//! - [`Constant`] - The same value everywhere
//! - [`ValueNoise`] - Seeded lattice value noise for any dimensionality

use std::sync::Arc;

mod value_noise;

pub use value_noise::ValueNoise;

/// A deterministic scalar field over `N`-dimensional coordinates.
///
/// Implementations must be pure: the same point, seed and configuration always
/// produce the same value, and evaluation never mutates the implementor. This is
/// what lets one instance be shared by several combinators and sampled from
/// several threads at once.
pub trait Noise<const N: usize>: Send + Sync {
    /// Sample using the implementor's own default seed.
    fn noise(&self, point: [f64; N]) -> f64;

    /// Sample using a caller-supplied seed.
    fn noise_seeded(&self, point: [f64; N], seed: i64) -> f64;
}

/// Shared, aliasable reference to a wrapped noise function.
pub type Basis<const N: usize> = Arc<dyn Noise<N>>;

impl<const N: usize, T: Noise<N> + ?Sized> Noise<N> for Arc<T> {
    #[inline]
    fn noise(&self, point: [f64; N]) -> f64 {
        (**self).noise(point)
    }

    #[inline]
    fn noise_seeded(&self, point: [f64; N], seed: i64) -> f64 {
        (**self).noise_seeded(point, seed)
    }
}

impl<const N: usize, T: Noise<N> + ?Sized> Noise<N> for Box<T> {
    #[inline]
    fn noise(&self, point: [f64; N]) -> f64 {
        (**self).noise(point)
    }

    #[inline]
    fn noise_seeded(&self, point: [f64; N], seed: i64) -> f64 {
        (**self).noise_seeded(point, seed)
    }
}

impl<const N: usize, T: Noise<N> + ?Sized> Noise<N> for &T {
    #[inline]
    fn noise(&self, point: [f64; N]) -> f64 {
        (**self).noise(point)
    }

    #[inline]
    fn noise_seeded(&self, point: [f64; N], seed: i64) -> f64 {
        (**self).noise_seeded(point, seed)
    }
}

/// A field with the same value at every point, for every seed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constant(pub f64);

impl<const N: usize> Noise<N> for Constant {
    #[inline]
    fn noise(&self, _point: [f64; N]) -> f64 {
        self.0
    }

    #[inline]
    fn noise_seeded(&self, _point: [f64; N], _seed: i64) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[expect(clippy::float_cmp, reason = "constant passes its value through untouched")]
    fn constant_through_shared_handles() {
        let basis: Basis<3> = Arc::new(Constant(0.25));
        let boxed: Box<dyn Noise<3>> = Box::new(Constant(0.25));
        assert_eq!(basis.noise([1.0, 2.0, 3.0]), 0.25);
        assert_eq!(boxed.noise_seeded([1.0, 2.0, 3.0], 99), 0.25);
        assert_eq!((&basis).noise([0.0; 3]), 0.25);
    }
}
