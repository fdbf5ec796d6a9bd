//! Combinators that perturb a primary basis with a second, independent
//! "disturbance" field.
//!
//! - [`Turbulent`] shifts the X axis once, before a layered sum
//! - [`Viny`] mixes both fields into every octave at a 2:1 weighting
//! - [`Slick`] shifts every octave's X by the disturbance at the unscaled input

use crate::combinator::{Fractal, rotation, sample_octave, scale};
use crate::config::{FractalConfig, check_frequency, check_lacunarity, clamp_octaves};
use crate::error::ConfigError;
use crate::noise::{Basis, Noise};
use crate::seed::octave_seed;

fn validate<const N: usize>(config: FractalConfig) -> Result<FractalConfig, ConfigError> {
    rotation::check_dimension::<N>()?;
    config.validated()
}

/// Layered octaves sampled at a point whose X coordinate has been pushed by
/// the disturbance field.
///
/// The disturbance is evaluated once, at the frequency-scaled input, and its
/// value is added to X before the octave loop starts.
pub struct Turbulent<const N: usize> {
    layered: Fractal<N>,
    disturbance: Basis<N>,
}

impl<const N: usize> Turbulent<N> {
    /// Layer `basis` with `config`, perturbed by `disturbance`.
    pub fn new(
        basis: Basis<N>,
        disturbance: Basis<N>,
        config: FractalConfig,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            layered: Fractal::layered(basis, config)?,
            disturbance,
        })
    }

    /// The layered accumulator, for reconfiguration.
    pub const fn layered_mut(&mut self) -> &mut Fractal<N> {
        &mut self.layered
    }

    /// The layered accumulator.
    #[must_use]
    pub const fn layered(&self) -> &Fractal<N> {
        &self.layered
    }

    fn evaluate(&self, point: [f64; N], seed: Option<i64>) -> f64 {
        let mut p = scale(point, self.layered.frequency());
        p[0] += match seed {
            Some(seed) => self.disturbance.noise_seeded(p, seed),
            None => self.disturbance.noise(p),
        };
        self.layered.accumulate(p, seed)
    }
}

impl<const N: usize> Noise<N> for Turbulent<N> {
    fn noise(&self, point: [f64; N]) -> f64 {
        self.evaluate(point, None)
    }

    fn noise_seeded(&self, point: [f64; N], seed: i64) -> f64 {
        self.evaluate(point, Some(seed))
    }
}

/// Every octave contributes both the basis (weight `2s`) and the disturbance
/// (weight `s`); the sum is normalised by `3 * (2^octaves - 1)`.
pub struct Viny<const N: usize> {
    basis: Basis<N>,
    disturbance: Basis<N>,
    config: FractalConfig,
}

impl<const N: usize> Viny<N> {
    /// Mix `basis` and `disturbance` over the configured octaves.
    pub fn new(
        basis: Basis<N>,
        disturbance: Basis<N>,
        config: FractalConfig,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            basis,
            disturbance,
            config: validate::<N>(config)?,
        })
    }

    /// Current settings.
    #[must_use]
    pub const fn config(&self) -> FractalConfig {
        self.config
    }

    /// Set the octave count, clamped into `[1, 63]`.
    pub fn set_octaves(&mut self, octaves: u32) {
        self.config.octaves = clamp_octaves(octaves);
    }

    /// Set the base frequency; must be finite and non-zero.
    pub fn set_frequency(&mut self, frequency: f64) -> Result<(), ConfigError> {
        self.config.frequency = check_frequency(frequency)?;
        Ok(())
    }

    /// Set the per-octave frequency step; must be finite and non-zero.
    pub fn set_lacunarity(&mut self, lacunarity: f64) -> Result<(), ConfigError> {
        self.config.lacunarity = check_lacunarity(lacunarity)?;
        Ok(())
    }

    fn evaluate(&self, point: [f64; N], seed: Option<i64>) -> f64 {
        let p = scale(point, self.config.frequency);
        let mut sum = 0.0;
        let mut correction = 0.0;
        let mut weight = 1.0;
        let mut step = 1.0;
        for octave in 0..self.config.octaves {
            step *= self.config.lacunarity;
            let q = scale(p, step);
            sum += sample_octave(&*self.basis, q, octave, seed) * (weight * 2.0)
                + sample_octave(&*self.disturbance, q, octave, seed) * weight;
            correction += weight * 3.0;
            weight *= 2.0;
        }
        sum / correction
    }
}

impl<const N: usize> Noise<N> for Viny<N> {
    fn noise(&self, point: [f64; N]) -> f64 {
        self.evaluate(point, None)
    }

    fn noise_seeded(&self, point: [f64; N], seed: i64) -> f64 {
        self.evaluate(point, Some(seed))
    }
}

/// Layered octaves whose X coordinate is shifted by the disturbance sampled at
/// the raw, unscaled input.
///
/// Unseeded, the disturbance term is the same for every octave. Seeded, each
/// octave samples the disturbance with its own seed from the chain.
pub struct Slick<const N: usize> {
    basis: Basis<N>,
    disturbance: Basis<N>,
    config: FractalConfig,
}

impl<const N: usize> Slick<N> {
    /// Layer `basis` with `config`, shifting X by `disturbance`.
    pub fn new(
        basis: Basis<N>,
        disturbance: Basis<N>,
        config: FractalConfig,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            basis,
            disturbance,
            config: validate::<N>(config)?,
        })
    }

    /// Current settings.
    #[must_use]
    pub const fn config(&self) -> FractalConfig {
        self.config
    }

    /// Set the octave count, clamped into `[1, 63]`.
    pub fn set_octaves(&mut self, octaves: u32) {
        self.config.octaves = clamp_octaves(octaves);
    }

    /// Set the base frequency; must be finite and non-zero.
    pub fn set_frequency(&mut self, frequency: f64) -> Result<(), ConfigError> {
        self.config.frequency = check_frequency(frequency)?;
        Ok(())
    }

    /// Set the per-octave frequency step; must be finite and non-zero.
    pub fn set_lacunarity(&mut self, lacunarity: f64) -> Result<(), ConfigError> {
        self.config.lacunarity = check_lacunarity(lacunarity)?;
        Ok(())
    }

    fn evaluate(&self, point: [f64; N], seed: Option<i64>) -> f64 {
        let p = scale(point, self.config.frequency);
        let unseeded_shift = match seed {
            Some(_) => 0.0,
            None => self.disturbance.noise(point),
        };
        let mut sum = 0.0;
        let mut correction = 0.0;
        let mut weight = 1.0;
        let mut step = 1.0;
        for octave in 0..self.config.octaves {
            step *= self.config.lacunarity;
            let mut q = scale(p, step);
            q[0] += match seed {
                Some(seed) => self
                    .disturbance
                    .noise_seeded(point, octave_seed(seed, octave)),
                None => unseeded_shift,
            };
            sum += sample_octave(&*self.basis, q, octave, seed) * weight;
            correction += weight;
            weight *= 2.0;
        }
        sum / correction
    }
}

impl<const N: usize> Noise<N> for Slick<N> {
    fn noise(&self, point: [f64; N]) -> f64 {
        self.evaluate(point, None)
    }

    fn noise_seeded(&self, point: [f64; N], seed: i64) -> f64 {
        self.evaluate(point, Some(seed))
    }
}
