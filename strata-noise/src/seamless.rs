//! Seamless tiling.
//!
//! Each tiled axis is mapped onto a circle: a coordinate `x` on an axis of span
//! `L` becomes the angle `2π · (x mod L) / L`, and the basis is sampled at that
//! angle's `(cos, sin)` pair. A `N`-dimensional tile therefore needs a basis of
//! dimension `2N`. Because the loop closes, `x = 0` and `x = L` reduce to the
//! same angle before any trigonometry happens and produce bit-identical values.
//!
//! [`Seamless`] samples single points. [`seamless_1d`], [`seamless_2d`] and
//! [`seamless_3d`] fill whole grids with an octave sum, each octave sampling a
//! loop twice as large as the previous one.

use std::f64::consts::TAU;

use crate::config::check_frequency;
use crate::error::ConfigError;
use crate::noise::{Basis, Noise};
use crate::seed::{GOLDEN, octave_seed};

/// Highest tiled dimensionality (a 6D basis).
const MAX_TILED: usize = 3;

/// Exactly periodic `N`-dimensional noise sampled from a `2N`-dimensional basis.
pub struct Seamless<const N: usize, const M: usize> {
    basis: Basis<M>,
    spans: [f64; N],
    frequency: f64,
}

impl<const N: usize, const M: usize> Seamless<N, M> {
    /// Tile `basis` with period `spans[i]` along axis `i`.
    ///
    /// `frequency` scales the loop radius: at `1.0` a unit step along a tiled
    /// axis moves about one unit through the basis.
    pub fn new(basis: Basis<M>, spans: [f64; N], frequency: f64) -> Result<Self, ConfigError> {
        if N == 0 || N > MAX_TILED || M != N * 2 {
            tracing::debug!(tiled = N, basis = M, "rejected seamless dimensions");
            return Err(ConfigError::DimensionMismatch {
                tiled: N,
                basis: M,
            });
        }
        for (axis, &value) in spans.iter().enumerate() {
            if !(value.is_finite() && value > 0.0) {
                tracing::debug!(axis, value, "rejected tiling span");
                return Err(ConfigError::InvalidSpan { axis, value });
            }
        }
        Ok(Self {
            basis,
            spans,
            frequency: check_frequency(frequency)?,
        })
    }

    /// Period along each axis.
    #[must_use]
    pub const fn spans(&self) -> [f64; N] {
        self.spans
    }

    fn embed(&self, point: [f64; N]) -> [f64; M] {
        let mut out = [0.0; M];
        for (axis, (&x, &span)) in point.iter().zip(&self.spans).enumerate() {
            let theta = x.rem_euclid(span) * (TAU / span);
            let radius = self.frequency * span / TAU;
            let (sin, cos) = theta.sin_cos();
            out[axis * 2] = cos * radius;
            out[axis * 2 + 1] = sin * radius;
        }
        out
    }
}

impl<const N: usize, const M: usize> Noise<N> for Seamless<N, M> {
    fn noise(&self, point: [f64; N]) -> f64 {
        self.basis.noise(self.embed(point))
    }

    fn noise_seeded(&self, point: [f64; N], seed: i64) -> f64 {
        self.basis.noise_seeded(self.embed(point), seed)
    }
}

/// A filled grid and the sum of every normalised cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Tiled<T> {
    /// The grid, indexed `[x][y][z]`.
    pub values: T,
    /// Sum of all cells after normalisation.
    pub total: f64,
    /// Number of cells that were filled.
    pub cells: usize,
}

impl<T> Tiled<T> {
    const fn untouched(values: T) -> Self {
        Self {
            values,
            total: 0.0,
            cells: 0,
        }
    }

    /// Mean cell value, or `0.0` when nothing was filled.
    #[must_use]
    pub fn mean(&self) -> f64 {
        if self.cells == 0 {
            0.0
        } else {
            self.total / self.cells as f64
        }
    }
}

/// `(seed, loop radius, weight)` for each octave.
///
/// The seed chain starts at `seed * GOLDEN`; radius doubles while weight halves
/// from `2^(octaves - 1)` down to `1`.
fn octave_schedule(seed: i64, octaves: u32) -> impl Iterator<Item = (i64, f64, f64)> {
    let start = seed.wrapping_mul(GOLDEN);
    let top = 2_f64.powi(octaves as i32 - 1);
    (0..octaves).map(move |octave| {
        let o = octave as i32;
        (octave_seed(start, octave), 2_f64.powi(o), top * 0.5_f64.powi(o))
    })
}

fn fillable(octaves: u32, well_shaped: bool) -> bool {
    let ok = (1..63).contains(&octaves) && well_shaped;
    if !ok {
        tracing::debug!(octaves, well_shaped, "seamless fill skipped");
    }
    ok
}

fn normalize<'a>(cells: impl Iterator<Item = &'a mut f64>, octaves: u32) -> (f64, usize) {
    let norm = 1.0 / (2_f64.powi(octaves as i32) - 1.0);
    let mut total = 0.0;
    let mut count = 0;
    for cell in cells {
        *cell *= norm;
        total += *cell;
        count += 1;
    }
    (total, count)
}

/// Unit-circle point for index `i` of `len` around the loop.
#[inline]
fn loop_point(i: usize, len: usize) -> (f64, f64) {
    let (sin, cos) = (i as f64 * (TAU / len as f64)).sin_cos();
    (cos, sin)
}

/// Add a seamless 1D octave sum to `fill`, sampling a 2D generator.
///
/// Octave counts outside `1..=62`, or an empty `fill`, return the input
/// unmodified with a zero total.
pub fn seamless_1d(
    mut fill: Vec<f64>,
    seed: i64,
    octaves: u32,
    generator: &dyn Noise<2>,
) -> Tiled<Vec<f64>> {
    let width = fill.len();
    if !fillable(octaves, width > 0) {
        return Tiled::untouched(fill);
    }
    for (seed, radius, weight) in octave_schedule(seed, octaves) {
        for (x, cell) in fill.iter_mut().enumerate() {
            let (pc, ps) = loop_point(x, width);
            *cell += generator.noise_seeded([pc * radius, ps * radius], seed) * weight;
        }
    }
    let (total, cells) = normalize(fill.iter_mut(), octaves);
    Tiled {
        values: fill,
        total,
        cells,
    }
}

/// Add a seamless 2D octave sum to `fill` (indexed `[x][y]`), sampling a 4D
/// generator.
///
/// Every column must have the same, non-zero height. Octave counts outside
/// `1..=62`, or an empty or ragged `fill`, return the input unmodified with a
/// zero total.
pub fn seamless_2d(
    mut fill: Vec<Vec<f64>>,
    seed: i64,
    octaves: u32,
    generator: &dyn Noise<4>,
) -> Tiled<Vec<Vec<f64>>> {
    let width = fill.len();
    let height = fill.first().map_or(0, Vec::len);
    let rectangular = height > 0 && fill.iter().all(|column| column.len() == height);
    if !fillable(octaves, width > 0 && rectangular) {
        return Tiled::untouched(fill);
    }
    for (seed, radius, weight) in octave_schedule(seed, octaves) {
        for (x, column) in fill.iter_mut().enumerate() {
            let (pc, ps) = loop_point(x, width);
            for (y, cell) in column.iter_mut().enumerate() {
                let (qc, qs) = loop_point(y, height);
                let point = [pc * radius, ps * radius, qc * radius, qs * radius];
                *cell += generator.noise_seeded(point, seed) * weight;
            }
        }
    }
    let (total, cells) = normalize(fill.iter_mut().flatten(), octaves);
    Tiled {
        values: fill,
        total,
        cells,
    }
}

/// Add a seamless 3D octave sum to `fill` (indexed `[x][y][z]`), sampling a 6D
/// generator.
///
/// Every plane must have the same height and every column the same depth.
/// Octave counts outside `1..=62`, or an empty or ragged `fill`, return the
/// input unmodified with a zero total.
pub fn seamless_3d(
    mut fill: Vec<Vec<Vec<f64>>>,
    seed: i64,
    octaves: u32,
    generator: &dyn Noise<6>,
) -> Tiled<Vec<Vec<Vec<f64>>>> {
    let width = fill.len();
    let height = fill.first().map_or(0, Vec::len);
    let depth = fill.first().and_then(|c| c.first()).map_or(0, Vec::len);
    let rectangular = height > 0
        && depth > 0
        && fill.iter().all(|plane| {
            plane.len() == height && plane.iter().all(|column| column.len() == depth)
        });
    if !fillable(octaves, width > 0 && rectangular) {
        return Tiled::untouched(fill);
    }
    for (seed, radius, weight) in octave_schedule(seed, octaves) {
        for (x, plane) in fill.iter_mut().enumerate() {
            let (pc, ps) = loop_point(x, width);
            for (y, column) in plane.iter_mut().enumerate() {
                let (qc, qs) = loop_point(y, height);
                for (z, cell) in column.iter_mut().enumerate() {
                    let (rc, rs) = loop_point(z, depth);
                    let point = [
                        pc * radius,
                        ps * radius,
                        qc * radius,
                        qs * radius,
                        rc * radius,
                        rs * radius,
                    ];
                    *cell += generator.noise_seeded(point, seed) * weight;
                }
            }
        }
    }
    let (total, cells) = normalize(fill.iter_mut().flatten().flatten(), octaves);
    Tiled {
        values: fill,
        total,
        cells,
    }
}
