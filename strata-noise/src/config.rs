//! Shared octave configuration.

use crate::error::ConfigError;

/// Smallest octave count; values below are clamped up.
pub const MIN_OCTAVES: u32 = 1;
/// Largest octave count; values above are clamped down.
pub const MAX_OCTAVES: u32 = 63;

/// Octave count, base frequency and per-octave frequency step.
///
/// Out-of-range octave counts are clamped into `[1, 63]` instead of being
/// rejected. Frequency and lacunarity are validated once, when a combinator is
/// built or reconfigured, so evaluation never divides by or multiplies through
/// a poisoned value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FractalConfig {
    /// Number of octaves (1-63).
    pub octaves: u32,
    /// Multiplier applied to input coordinates before the first octave.
    pub frequency: f64,
    /// Multiplicative frequency step between octaves.
    pub lacunarity: f64,
}

impl Default for FractalConfig {
    fn default() -> Self {
        Self {
            octaves: 2,
            frequency: 1.0,
            lacunarity: 0.5,
        }
    }
}

impl FractalConfig {
    /// Creates a configuration from explicit values.
    #[must_use]
    pub const fn new(octaves: u32, frequency: f64, lacunarity: f64) -> Self {
        Self {
            octaves,
            frequency,
            lacunarity,
        }
    }

    /// Returns a copy with the octave count replaced.
    #[must_use]
    pub const fn with_octaves(self, octaves: u32) -> Self {
        Self { octaves, ..self }
    }

    /// Returns a copy with the frequency replaced.
    #[must_use]
    pub const fn with_frequency(self, frequency: f64) -> Self {
        Self { frequency, ..self }
    }

    /// Returns a copy with the lacunarity replaced.
    #[must_use]
    pub const fn with_lacunarity(self, lacunarity: f64) -> Self {
        Self { lacunarity, ..self }
    }

    /// Clamps the octave count and checks frequency and lacunarity.
    pub fn validated(self) -> Result<Self, ConfigError> {
        Ok(Self {
            octaves: clamp_octaves(self.octaves),
            frequency: check_frequency(self.frequency)?,
            lacunarity: check_lacunarity(self.lacunarity)?,
        })
    }
}

/// Clamp an octave count into `[1, 63]`.
#[must_use]
pub fn clamp_octaves(octaves: u32) -> u32 {
    let clamped = octaves.clamp(MIN_OCTAVES, MAX_OCTAVES);
    if clamped != octaves {
        tracing::debug!(requested = octaves, clamped, "octave count clamped");
    }
    clamped
}

pub(crate) fn check_frequency(frequency: f64) -> Result<f64, ConfigError> {
    if frequency.is_finite() && frequency != 0.0 {
        Ok(frequency)
    } else {
        tracing::debug!(frequency, "rejected frequency");
        Err(ConfigError::InvalidFrequency(frequency))
    }
}

pub(crate) fn check_lacunarity(lacunarity: f64) -> Result<f64, ConfigError> {
    if lacunarity.is_finite() && lacunarity != 0.0 {
        Ok(lacunarity)
    } else {
        tracing::debug!(lacunarity, "rejected lacunarity");
        Err(ConfigError::InvalidLacunarity(lacunarity))
    }
}
