//! Configuration errors.
//!
//! Evaluation is total; the only failures happen while building or
//! reconfiguring a combinator.

use thiserror::Error;

/// A combinator was configured with values that would poison evaluation.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Frequency must be a finite, non-zero number.
    #[error("frequency must be finite and non-zero, got {0}")]
    InvalidFrequency(f64),
    /// Lacunarity must be a finite, non-zero number.
    #[error("lacunarity must be finite and non-zero, got {0}")]
    InvalidLacunarity(f64),
    /// Sharpness produced a non-finite exponential adjustment.
    #[error("sharpness {0} does not yield a finite adjustment")]
    InvalidSharpness(f64),
    /// A per-axis scale factor was not finite.
    #[error("scale for axis {axis} must be finite, got {value}")]
    InvalidScale {
        /// Axis index, starting at 0.
        axis: usize,
        /// The rejected value.
        value: f64,
    },
    /// A seamless span was not finite and positive.
    #[error("tiling span for axis {axis} must be finite and positive, got {value}")]
    InvalidSpan {
        /// Axis index, starting at 0.
        axis: usize,
        /// The rejected value.
        value: f64,
    },
    /// The combinator has no rotation/offset table for this dimensionality.
    #[error("unsupported dimensionality {0}, expected 1..=6")]
    UnsupportedDimension(usize),
    /// A seamless embedding needs a basis of exactly twice the tiled dimensionality.
    #[error("cannot tile {tiled}D noise over a {basis}D basis")]
    DimensionMismatch {
        /// Dimensionality of the tiled field.
        tiled: usize,
        /// Dimensionality of the sampled basis.
        basis: usize,
    },
}
