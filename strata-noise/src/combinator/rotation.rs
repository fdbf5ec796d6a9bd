//! Fixed per-dimension rotation matrices and octave offsets.
//!
//! Rotating the sample point between octaves keeps successive octave lattices
//! from lining up along the coordinate axes. The matrices are opaque data:
//! every one is exactly orthonormal in rational arithmetic (2D and 3D from
//! 3-4-5 triples, 4D a unit quaternion `(1, 2, 2, 4) / 5`, 5D and 6D products
//! of two integer Householder reflections). Every ridged and spiral output
//! depends on the literal coefficients.

use std::array;

use crate::error::ConfigError;

/// Highest dimensionality with a rotation table.
pub const MAX_DIMENSION: usize = 6;

const ROTATION_1D: [f64; 1] = [1.0];

const ROTATION_2D: [f64; 4] = [
    0.8, 0.6, //
    -0.6, 0.8,
];

const ROTATION_3D: [f64; 9] = [
    0.0, 0.8, 0.6, //
    -0.8, 0.36, -0.48, //
    -0.6, -0.48, 0.64,
];

const ROTATION_4D: [f64; 16] = [
    0.2, -0.4, -0.4, -0.8, //
    0.4, 0.2, -0.8, 0.4, //
    0.4, 0.8, 0.2, -0.4, //
    0.8, -0.4, 0.4, 0.2,
];

const ROTATION_5D: [f64; 25] = [
    0.34375, 0.015625, -0.140625, -0.921875, -0.109375, //
    -0.0625, 0.40625, 0.34375, 0.03125, -0.84375, //
    -0.09375, 0.359375, 0.765625, -0.203125, 0.484375, //
    -0.90625, 0.140625, -0.265625, -0.296875, 0.015625, //
    -0.21875, -0.828125, 0.453125, -0.140625, -0.203125,
];

const ROTATION_6D: [f64; 36] = [
    -0.18, -0.16, 0.26, 0.42, -0.62, -0.56, //
    0.26, 0.62, 0.18, 0.56, -0.16, 0.42, //
    0.02, 0.24, 0.86, -0.38, 0.18, -0.16, //
    -0.24, 0.62, -0.32, 0.06, 0.34, -0.58, //
    -0.32, -0.34, 0.24, 0.58, 0.62, 0.06, //
    -0.86, 0.18, 0.02, -0.16, -0.24, 0.38,
];

/// Row-major rotation matrices indexed by dimensionality.
const ROTATIONS: [&[f64]; MAX_DIMENSION + 1] = [
    &[],
    &ROTATION_1D,
    &ROTATION_2D,
    &ROTATION_3D,
    &ROTATION_4D,
    &ROTATION_5D,
    &ROTATION_6D,
];

/// Fail unless `N` has a rotation and offset table.
pub fn check_dimension<const N: usize>() -> Result<(), ConfigError> {
    if (1..=MAX_DIMENSION).contains(&N) {
        Ok(())
    } else {
        tracing::debug!(dimension = N, "no rotation table for dimension");
        Err(ConfigError::UnsupportedDimension(N))
    }
}

/// The row-major `N x N` rotation matrix.
///
/// # Panics
/// If `N` is greater than 6; combinators reject such `N` at construction.
#[must_use]
pub fn matrix<const N: usize>() -> &'static [f64] {
    ROTATIONS[N]
}

/// Apply the `N`-dimensional rotation to `point`.
///
/// # Panics
/// If `N` is greater than 6. Combinators reject such `N` at construction;
/// direct callers can guard with [`check_dimension`].
#[inline]
#[must_use]
pub fn rotate<const N: usize>(point: [f64; N]) -> [f64; N] {
    let m = ROTATIONS[N];
    array::from_fn(|row| {
        let coeffs = &m[row * N..(row + 1) * N];
        coeffs.iter().zip(point).map(|(c, p)| c * p).sum()
    })
}

/// Per-axis lattice offset for octave `octave`: axis `a` shifts by `octave << (6 + a)`.
///
/// The shift amounts were chosen empirically and are only defined up to 6D.
#[inline]
#[must_use]
pub fn octave_offset(octave: u32, axis: usize) -> f64 {
    f64::from(octave << (6 + axis))
}
