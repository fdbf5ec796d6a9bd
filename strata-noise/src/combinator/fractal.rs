//! Octave accumulation.
//!
//! A [`Fractal`] samples its basis once per octave and returns the
//! weight-normalised sum. The [`FractalKind`] decides how the sample point
//! moves between octaves and how octaves are weighted:
//!
//! | kind             | point for octave `o`                     | weight        |
//! |------------------|------------------------------------------|---------------|
//! | `Layered`        | `p * lacunarity^(o+1)`                   | `2^o`         |
//! | `InverseLayered` | `p * lacunarity^(o+1)`                   | `2^(n-1-o)`   |
//! | `Warped`         | `p * lacunarity^(o+1) + prev * 0.25`     | `2^o`         |
//! | `Ridged`         | `(R * lacunarity)^o * p`, folded `1-|n|` | `2^-o`        |
//! | `Spiral`         | `(R * lacunarity)^(o+1) * p`             | `2^o`         |
//!
//! where `p` is the input scaled by `frequency`, `R` the fixed rotation of
//! [`rotation`](super::rotation) and `prev` the previous octave's raw output.

use crate::combinator::{rotation, sample_octave, scale};
use crate::config::{FractalConfig, check_frequency, check_lacunarity, clamp_octaves};
use crate::error::ConfigError;
use crate::noise::{Basis, Noise};

/// How a [`Fractal`] moves and weights its octaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FractalKind {
    /// Fine octaves weigh more with the default lacunarity of `0.5`, which makes
    /// each octave coarser than the last.
    Layered,
    /// Same frequency progression as `Layered` with the weights reversed.
    InverseLayered,
    /// `Layered` with each octave's raw output fed into the next octave's point.
    Warped,
    /// Octaves folded through `1 - |n|` and rotated between octaves.
    Ridged,
    /// `Layered` weighting with the point rotated every octave.
    Spiral,
}

impl FractalKind {
    /// The configuration this kind is usually built with.
    ///
    /// `Ridged` halves its weights every octave, so it steps frequency up by
    /// `2.0`; every other kind uses [`FractalConfig::default`].
    #[must_use]
    pub fn default_config(self) -> FractalConfig {
        match self {
            Self::Ridged => FractalConfig::default().with_lacunarity(2.0),
            _ => FractalConfig::default(),
        }
    }
}

/// Octave-accumulating combinator over an `N`-dimensional basis.
///
/// Output lies in `[-1, 1]` whenever the basis does.
pub struct Fractal<const N: usize> {
    basis: Basis<N>,
    kind: FractalKind,
    octaves: u32,
    frequency: f64,
    lacunarity: f64,
}

impl<const N: usize> Fractal<N> {
    /// Wrap `basis` with the given kind and configuration.
    ///
    /// Octaves are clamped into `[1, 63]`; an invalid frequency or lacunarity,
    /// or an `N` outside `1..=6`, is an error.
    pub fn new(
        basis: Basis<N>,
        kind: FractalKind,
        config: FractalConfig,
    ) -> Result<Self, ConfigError> {
        rotation::check_dimension::<N>()?;
        let config = config.validated()?;
        tracing::trace!(
            ?kind,
            dimension = N,
            octaves = config.octaves,
            frequency = config.frequency,
            lacunarity = config.lacunarity,
            "built fractal combinator"
        );
        Ok(Self {
            basis,
            kind,
            octaves: config.octaves,
            frequency: config.frequency,
            lacunarity: config.lacunarity,
        })
    }

    /// A [`FractalKind::Layered`] combinator.
    pub fn layered(basis: Basis<N>, config: FractalConfig) -> Result<Self, ConfigError> {
        Self::new(basis, FractalKind::Layered, config)
    }

    /// A [`FractalKind::InverseLayered`] combinator.
    pub fn inverse_layered(basis: Basis<N>, config: FractalConfig) -> Result<Self, ConfigError> {
        Self::new(basis, FractalKind::InverseLayered, config)
    }

    /// A [`FractalKind::Warped`] combinator.
    pub fn warped(basis: Basis<N>, config: FractalConfig) -> Result<Self, ConfigError> {
        Self::new(basis, FractalKind::Warped, config)
    }

    /// A [`FractalKind::Ridged`] combinator.
    pub fn ridged(basis: Basis<N>, config: FractalConfig) -> Result<Self, ConfigError> {
        Self::new(basis, FractalKind::Ridged, config)
    }

    /// A [`FractalKind::Spiral`] combinator.
    pub fn spiral(basis: Basis<N>, config: FractalConfig) -> Result<Self, ConfigError> {
        Self::new(basis, FractalKind::Spiral, config)
    }

    /// The accumulation strategy.
    #[must_use]
    pub const fn kind(&self) -> FractalKind {
        self.kind
    }

    /// The wrapped basis.
    #[must_use]
    pub const fn basis(&self) -> &Basis<N> {
        &self.basis
    }

    /// Number of octaves, always in `[1, 63]`.
    #[must_use]
    pub const fn octaves(&self) -> u32 {
        self.octaves
    }

    /// Coordinate multiplier applied before the first octave.
    #[must_use]
    pub const fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Per-octave frequency step.
    #[must_use]
    pub const fn lacunarity(&self) -> f64 {
        self.lacunarity
    }

    /// Current settings as a [`FractalConfig`].
    #[must_use]
    pub const fn config(&self) -> FractalConfig {
        FractalConfig::new(self.octaves, self.frequency, self.lacunarity)
    }

    /// Set the octave count, clamped into `[1, 63]`.
    pub fn set_octaves(&mut self, octaves: u32) {
        self.octaves = clamp_octaves(octaves);
    }

    /// Set the frequency; non-finite or zero values are rejected and leave
    /// the current value in place.
    pub fn set_frequency(&mut self, frequency: f64) -> Result<(), ConfigError> {
        self.frequency = check_frequency(frequency)?;
        Ok(())
    }

    /// Set the lacunarity; non-finite or zero values are rejected and leave
    /// the current value in place.
    pub fn set_lacunarity(&mut self, lacunarity: f64) -> Result<(), ConfigError> {
        self.lacunarity = check_lacunarity(lacunarity)?;
        Ok(())
    }

    /// Run the octave loop on a point already scaled by `frequency`.
    pub(crate) fn accumulate(&self, point: [f64; N], seed: Option<i64>) -> f64 {
        match self.kind {
            FractalKind::Layered => self.layered_sum(point, seed, false),
            FractalKind::Warped => self.layered_sum(point, seed, true),
            FractalKind::InverseLayered => self.inverse_sum(point, seed),
            FractalKind::Ridged => self.ridged_sum(point, seed),
            FractalKind::Spiral => self.spiral_sum(point, seed),
        }
    }

    fn layered_sum(&self, point: [f64; N], seed: Option<i64>, warp: bool) -> f64 {
        let mut sum = 0.0;
        let mut correction = 0.0;
        let mut weight = 1.0;
        let mut step = 1.0;
        let mut prev = 0.0;
        for octave in 0..self.octaves {
            step *= self.lacunarity;
            let mut p = scale(point, step);
            if warp {
                let shift = prev * 0.25;
                for c in &mut p {
                    *c += shift;
                }
            }
            let n = sample_octave(&*self.basis, p, octave, seed);
            prev = n;
            sum += n * weight;
            correction += weight;
            weight *= 2.0;
        }
        sum / correction
    }

    fn inverse_sum(&self, point: [f64; N], seed: Option<i64>) -> f64 {
        let mut sum = 0.0;
        let mut correction = 0.0;
        let mut weight = 2_f64.powi(self.octaves as i32 - 1);
        let mut step = 1.0;
        for octave in 0..self.octaves {
            step *= self.lacunarity;
            sum += sample_octave(&*self.basis, scale(point, step), octave, seed) * weight;
            correction += weight;
            weight *= 0.5;
        }
        sum / correction
    }

    fn ridged_sum(&self, point: [f64; N], seed: Option<i64>) -> f64 {
        let mut sum = 0.0;
        let mut correction = 0.0;
        let mut exp = 1.0;
        let mut p = point;
        for octave in 0..self.octaves {
            let n = 1.0 - sample_octave(&*self.basis, p, octave, seed).abs();
            sum += n * exp;
            correction += exp;
            exp *= 0.5;
            p = scale(rotation::rotate(p), self.lacunarity);
        }
        sum * 2.0 / correction - 1.0
    }

    fn spiral_sum(&self, point: [f64; N], seed: Option<i64>) -> f64 {
        let mut sum = 0.0;
        let mut correction = 0.0;
        let mut weight = 1.0;
        let mut p = point;
        for octave in 0..self.octaves {
            p = scale(rotation::rotate(p), self.lacunarity);
            sum += sample_octave(&*self.basis, p, octave, seed) * weight;
            correction += weight;
            weight *= 2.0;
        }
        sum / correction
    }
}

impl<const N: usize> Noise<N> for Fractal<N> {
    fn noise(&self, point: [f64; N]) -> f64 {
        self.accumulate(scale(point, self.frequency), None)
    }

    fn noise_seeded(&self, point: [f64; N], seed: i64) -> f64 {
        self.accumulate(scale(point, self.frequency), Some(seed))
    }
}
