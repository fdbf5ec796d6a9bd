//! Noise combinators.
//!
//! Every combinator wraps one or two [`Basis`](crate::noise::Basis) handles and
//! is itself a [`Noise`], so trees compose freely. Configuration happens at
//! construction (or through `&mut self` setters); evaluation only reads.
//!
//! - [`Fractal`] - Octave sums selected by [`FractalKind`]
//! - [`Scaled`], [`Exponential`], [`Maelstrom`] - Single-source remaps
//! - [`Turbulent`], [`Viny`], [`Slick`] - Perturbation by a disturbance field

mod disturbed;
mod fractal;
mod modulate;
pub mod rotation;

pub use disturbed::{Slick, Turbulent, Viny};
pub use fractal::{Fractal, FractalKind};
pub use modulate::{Exponential, Maelstrom, Scaled};

use crate::noise::Noise;
use crate::seed::octave_seed;

/// Multiply every coordinate by `factor`.
#[inline]
pub(crate) fn scale<const N: usize>(point: [f64; N], factor: f64) -> [f64; N] {
    point.map(|c| c * factor)
}

/// Sample one octave.
///
/// Unseeded sampling separates octaves geometrically with the per-axis
/// [`rotation::octave_offset`]; seeded sampling leaves the point alone and
/// hands the basis the octave's seed from the chain instead.
#[inline]
pub(crate) fn sample_octave<const N: usize>(
    basis: &dyn Noise<N>,
    mut point: [f64; N],
    octave: u32,
    seed: Option<i64>,
) -> f64 {
    match seed {
        Some(seed) => basis.noise_seeded(point, octave_seed(seed, octave)),
        None => {
            for (axis, c) in point.iter_mut().enumerate() {
                *c += rotation::octave_offset(octave, axis);
            }
            basis.noise(point)
        }
    }
}
