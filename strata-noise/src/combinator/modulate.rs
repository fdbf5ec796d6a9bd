//! Single-source remaps: axis scaling, logarithmic sharpening and the
//! exponential maelstrom.

use std::array;

use crate::combinator::Fractal;
use crate::config::FractalConfig;
use crate::error::ConfigError;
use crate::noise::{Basis, Noise};

/// Multiplies each axis by its own factor before sampling; no octaves.
pub struct Scaled<const N: usize> {
    basis: Basis<N>,
    scales: [f64; N],
}

impl<const N: usize> Scaled<N> {
    /// Wrap `basis`, scaling axis `i` by `scales[i]`.
    pub fn new(basis: Basis<N>, scales: [f64; N]) -> Result<Self, ConfigError> {
        if let Some((axis, &value)) = scales.iter().enumerate().find(|(_, s)| !s.is_finite()) {
            tracing::debug!(axis, value, "rejected axis scale");
            return Err(ConfigError::InvalidScale { axis, value });
        }
        Ok(Self { basis, scales })
    }

    /// Per-axis multipliers.
    #[must_use]
    pub const fn scales(&self) -> [f64; N] {
        self.scales
    }

    #[inline]
    fn apply(&self, point: [f64; N]) -> [f64; N] {
        array::from_fn(|axis| point[axis] * self.scales[axis])
    }
}

impl<const N: usize> Noise<N> for Scaled<N> {
    fn noise(&self, point: [f64; N]) -> f64 {
        self.basis.noise(self.apply(point))
    }

    fn noise_seeded(&self, point: [f64; N], seed: i64) -> f64 {
        self.basis.noise_seeded(self.apply(point), seed)
    }
}

/// Sharpens a basis with `ln(1 + sharpness * (n + 1)) * adjustment - 1`.
///
/// `adjustment = 2 / ln(1 + 2 * sharpness)` maps the basis range `[-1, 1]`
/// back onto `[-1, 1]`. Positive sharpness pushes values up toward 1 and
/// flattens troughs; sharpness in `(-0.5, 0)` does the opposite.
pub struct Exponential<const N: usize> {
    basis: Basis<N>,
    sharpness: f64,
    adjustment: f64,
}

impl<const N: usize> Exponential<N> {
    /// Wrap `basis` with the given sharpness.
    ///
    /// Sharpness must be finite, greater than `-0.5` and non-zero; anything else
    /// would make the log argument non-positive or the adjustment infinite.
    pub fn new(basis: Basis<N>, sharpness: f64) -> Result<Self, ConfigError> {
        let adjustment = Self::adjustment_for(sharpness)?;
        Ok(Self {
            basis,
            sharpness,
            adjustment,
        })
    }

    fn adjustment_for(sharpness: f64) -> Result<f64, ConfigError> {
        let adjustment = 2.0 / (2.0 * sharpness).ln_1p();
        if sharpness.is_finite() && sharpness > -0.5 && adjustment.is_finite() {
            Ok(adjustment)
        } else {
            tracing::debug!(sharpness, adjustment, "rejected exponential sharpness");
            Err(ConfigError::InvalidSharpness(sharpness))
        }
    }

    /// The configured sharpness.
    #[must_use]
    pub const fn sharpness(&self) -> f64 {
        self.sharpness
    }

    /// Reconfigure the sharpness, recomputing the adjustment.
    pub fn set_sharpness(&mut self, sharpness: f64) -> Result<(), ConfigError> {
        self.adjustment = Self::adjustment_for(sharpness)?;
        self.sharpness = sharpness;
        Ok(())
    }

    #[inline]
    fn remap(&self, n: f64) -> f64 {
        (self.sharpness * (n + 1.0)).ln_1p() * self.adjustment - 1.0
    }
}

impl<const N: usize> Noise<N> for Exponential<N> {
    fn noise(&self, point: [f64; N]) -> f64 {
        self.remap(self.basis.noise(point))
    }

    fn noise_seeded(&self, point: [f64; N], seed: i64) -> f64 {
        self.remap(self.basis.noise_seeded(point, seed))
    }
}

const MAELSTROM_SCALE: f64 = 0.850_918;
const MAELSTROM_SHIFT: f64 = 1.313_034_95;

/// Warped octaves remapped through `exp(n) * 0.850918 - 1.31303495`.
///
/// Practically bounded to about `[-1, 1]` but not clamped: `exp(1)` maps to
/// roughly `1.0000`, `exp(-1)` to roughly `-1.0000`.
pub struct Maelstrom<const N: usize> {
    warped: Fractal<N>,
}

impl<const N: usize> Maelstrom<N> {
    /// Build the underlying warped accumulator over `basis`.
    pub fn new(basis: Basis<N>, config: FractalConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            warped: Fractal::warped(basis, config)?,
        })
    }

    /// The warped accumulator, for reconfiguration.
    pub const fn warped_mut(&mut self) -> &mut Fractal<N> {
        &mut self.warped
    }

    /// The warped accumulator.
    #[must_use]
    pub const fn warped(&self) -> &Fractal<N> {
        &self.warped
    }

    #[inline]
    fn remap(n: f64) -> f64 {
        n.exp() * MAELSTROM_SCALE - MAELSTROM_SHIFT
    }
}

impl<const N: usize> Noise<N> for Maelstrom<N> {
    fn noise(&self, point: [f64; N]) -> f64 {
        Self::remap(self.warped.noise(point))
    }

    fn noise_seeded(&self, point: [f64; N], seed: i64) -> f64 {
        Self::remap(self.warped.noise_seeded(point, seed))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::combinator::testing::Recording;
    use crate::noise::{Constant, ValueNoise};

    #[test]
    fn scaled_multiplies_each_axis() {
        let recording = Arc::new(Recording::<3>::new(0.0));
        let scaled = Scaled::<3>::new(recording.clone(), [2.0, 0.5, -1.0]).expect("finite");
        let _ = scaled.noise_seeded([1.0, 4.0, 3.0], 5);
        assert_eq!(recording.calls(), vec![([2.0, 2.0, -3.0], Some(5))]);
    }

    #[test]
    fn scaled_rejects_non_finite() {
        let result = Scaled::<2>::new(Arc::new(Constant(0.0)), [1.0, f64::NAN]);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidScale { axis: 1, .. })
        ));
    }

    #[test]
    fn exponential_maps_endpoints() {
        for sharpness in [0.25, 1.0, 8.0, -0.3] {
            let low = Exponential::<2>::new(Arc::new(Constant(-1.0)), sharpness).expect("valid");
            let high = Exponential::<2>::new(Arc::new(Constant(1.0)), sharpness).expect("valid");
            assert!((low.noise([0.0, 0.0]) + 1.0).abs() < 1e-12, "{sharpness}");
            assert!((high.noise([0.0, 0.0]) - 1.0).abs() < 1e-12, "{sharpness}");
        }
    }

    #[test]
    fn exponential_rejects_degenerate_sharpness() {
        for sharpness in [0.0, -0.5, -2.0, f64::NAN, f64::INFINITY] {
            let result = Exponential::<1>::new(Arc::new(Constant(0.0)), sharpness);
            assert!(result.is_err(), "{sharpness} should be rejected");
        }
    }

    #[test]
    fn exponential_setter_keeps_old_value_on_error() {
        let mut exp = Exponential::<1>::new(Arc::new(Constant(0.0)), 2.0).expect("valid");
        assert!(exp.set_sharpness(-1.0).is_err());
        assert!((exp.sharpness() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn maelstrom_is_practically_bounded() {
        let maelstrom = Maelstrom::<2>::new(
            Arc::new(ValueNoise::new(8)),
            FractalConfig::new(4, 0.8, 0.5),
        )
        .expect("valid");
        for i in 0..1_000 {
            let t = f64::from(i) * 0.37;
            let v = maelstrom.noise([t, t * 0.5]);
            assert!((-1.0001..=1.0001).contains(&v), "{v}");
        }
    }

    #[test]
    fn maelstrom_remap_constants() {
        assert!((Maelstrom::<1>::remap(1.0) - 1.0).abs() < 1e-5);
        assert!((Maelstrom::<1>::remap(-1.0) + 1.0).abs() < 1e-5);
    }
}
