//! Whole-crate properties of composed noise trees.
//!
//! Every combinator is sampled through the public API only: determinism, the
//! `[-1, 1]` output range, exact degenerate cases, octave point placement and
//! concurrent evaluation of a shared tree.

use std::array;
use std::sync::{Arc, Mutex};
use std::thread;

use strata_noise::combinator::rotation::rotate;
use strata_noise::seed::{SeedStream, derive_unit, octave_seed};
use strata_noise::{
    Basis, ConfigError, Constant, Exponential, Fractal, FractalConfig, FractalKind, Maelstrom,
    Noise, Seamless, Slick, Turbulent, ValueNoise, Viny, seamless_2d,
};

/// Records the points it is sampled at; always returns 0.
struct Recorder {
    points: Mutex<Vec<[f64; 2]>>,
}

impl Recorder {
    fn new() -> Self {
        Self {
            points: Mutex::new(Vec::new()),
        }
    }

    fn points(&self) -> Vec<[f64; 2]> {
        self.points.lock().expect("poisoned").clone()
    }
}

impl Noise<2> for Recorder {
    fn noise(&self, point: [f64; 2]) -> f64 {
        self.points.lock().expect("poisoned").push(point);
        0.0
    }

    fn noise_seeded(&self, point: [f64; 2], _seed: i64) -> f64 {
        self.noise(point)
    }
}

fn every_combinator<const N: usize>(
    seed: i64,
    config: FractalConfig,
) -> Vec<(&'static str, Basis<N>)> {
    let basis: Basis<N> = Arc::new(ValueNoise::new(seed));
    let disturbance: Basis<N> = Arc::new(ValueNoise::new(seed.wrapping_add(1)));
    let fractal = |kind: FractalKind| -> Basis<N> {
        Arc::new(Fractal::new(basis.clone(), kind, config).expect("valid config"))
    };
    vec![
        ("layered", fractal(FractalKind::Layered)),
        ("inverse_layered", fractal(FractalKind::InverseLayered)),
        ("warped", fractal(FractalKind::Warped)),
        ("ridged", fractal(FractalKind::Ridged)),
        ("spiral", fractal(FractalKind::Spiral)),
        (
            "viny",
            Arc::new(Viny::new(basis.clone(), disturbance.clone(), config).expect("valid config")),
        ),
        (
            "slick",
            Arc::new(Slick::new(basis.clone(), disturbance.clone(), config).expect("valid config")),
        ),
        (
            "turbulent",
            Arc::new(Turbulent::new(basis.clone(), disturbance, config).expect("valid config")),
        ),
    ]
}

/// Sample every combinator at `samples` points, unseeded and seeded, and
/// check the `[-1, 1]` bound.
fn assert_unit_range<const N: usize>(config: FractalConfig, samples: usize, extent: f64) {
    let mut coords = SeedStream::new(7).map(|s| derive_unit(s) * extent);
    let mut seeds = SeedStream::new(-3);
    for (name, field) in every_combinator::<N>(0x00C0_FFEE, config) {
        for _ in 0..samples {
            let point: [f64; N] = array::from_fn(|_| coords.next().unwrap_or_default());
            let seed = seeds.next().unwrap_or_default();
            let v = field.noise(point);
            assert!((-1.0..=1.0).contains(&v), "{name}{N}D at {point:?} = {v}");
            let v = field.noise_seeded(point, seed);
            assert!(
                (-1.0..=1.0).contains(&v),
                "{name}{N}D seeded {seed} at {point:?} = {v}"
            );
        }
    }
}

#[test]
fn outputs_stay_in_unit_range() {
    assert_unit_range::<2>(FractalConfig::new(4, 0.37, 0.5), 100_000, 1_000.0);
    assert_unit_range::<3>(FractalConfig::new(6, 0.37, 0.5), 10_000, 1_000.0);
    assert_unit_range::<6>(FractalConfig::new(4, 0.37, 0.5), 1_000, 1_000.0);
}

#[test]
fn deep_octaves_with_growing_lacunarity_stay_in_range() {
    // 63 octaves at lacunarity 2 push lattice coordinates far past i64::MAX.
    let config = FractalConfig::new(63, 0.37, 2.0);
    assert_unit_range::<2>(config, 1_000, 100.0);
    assert_unit_range::<3>(config, 300, 100.0);
    assert_unit_range::<5>(config, 50, 100.0);
    assert_unit_range::<6>(config, 30, 100.0);
}

#[test]
#[expect(clippy::float_cmp, reason = "purity means bit-identical output")]
fn sampling_is_deterministic() {
    let config = FractalConfig::new(5, 1.3, 0.5);
    let first = every_combinator::<2>(42, config);
    let second = every_combinator::<2>(42, config);
    for ((name, a), (_, b)) in first.iter().zip(&second) {
        for i in 0..200 {
            let t = f64::from(i) * 0.73 - 40.0;
            assert_eq!(a.noise([t, t * 0.5]), b.noise([t, t * 0.5]), "{name}");
            assert_eq!(
                a.noise_seeded([t, -t], 99),
                b.noise_seeded([t, -t], 99),
                "{name}"
            );
        }
    }
}

#[test]
#[expect(clippy::float_cmp, reason = "seeded calls must not leak into unseeded state")]
fn seeded_call_does_not_disturb_unseeded() {
    for (name, field) in every_combinator::<2>(3, FractalConfig::new(3, 0.8, 0.5)) {
        let before = field.noise([1.25, -7.5]);
        let _ = field.noise_seeded([1.25, -7.5], -12_345);
        assert_eq!(field.noise([1.25, -7.5]), before, "{name}");
    }
}

#[test]
#[expect(clippy::float_cmp, reason = "a single octave is the basis itself")]
fn single_octave_is_the_scaled_basis() {
    let basis = Arc::new(ValueNoise::new(17));
    let layered =
        Fractal::<2>::layered(basis.clone(), FractalConfig::new(1, 2.5, 1.0)).expect("valid");
    for i in 0..50 {
        let t = f64::from(i) * 0.31;
        assert_eq!(layered.noise([t, 1.0 - t]), basis.noise([t * 2.5, (1.0 - t) * 2.5]));
        assert_eq!(
            layered.noise_seeded([t, 1.0 - t], 5),
            basis.noise_seeded([t * 2.5, (1.0 - t) * 2.5], octave_seed(5, 0))
        );
    }
}

#[test]
#[expect(clippy::float_cmp, reason = "weights sum to the correction exactly")]
fn constant_basis_survives_layering() {
    let layered = Fractal::<2>::layered(Arc::new(Constant(0.5)), FractalConfig::new(3, 1.0, 0.5))
        .expect("valid");
    assert_eq!(layered.noise([0.0, 0.0]), 0.5);
}

#[test]
fn ridged_places_third_octave() {
    let recorder = Arc::new(Recorder::new());
    let (frequency, lacunarity) = (0.75, 2.0);
    let ridged = Fractal::<2>::ridged(
        recorder.clone(),
        FractalConfig::new(3, frequency, lacunarity),
    )
    .expect("valid");
    let point = [3.0, -1.5];
    let _ = ridged.noise(point);

    let p0 = point.map(|c| c * frequency);
    let p1 = rotate(p0).map(|c| c * lacunarity);
    let p2 = rotate(p1).map(|c| c * lacunarity);
    let expected = [p2[0] + f64::from(2 << 6), p2[1] + f64::from(2 << 7)];

    let points = recorder.points();
    assert_eq!(points.len(), 3);
    assert!((points[2][0] - expected[0]).abs() < 1e-9, "{:?}", points[2]);
    assert!((points[2][1] - expected[1]).abs() < 1e-9, "{:?}", points[2]);
}

#[test]
fn seamless_field_wraps_continuously() {
    let field = Seamless::<2, 4>::new(Arc::new(ValueNoise::new(8)), [32.0, 16.0], 0.2)
        .expect("valid spans");
    for i in 0..64 {
        let y = f64::from(i) * 0.25;
        let edge = field.noise([32.0 - 1e-7, y]);
        let start = field.noise([0.0, y]);
        assert!((edge - start).abs() < 1e-4, "seam at y = {y}");
    }
}

#[test]
fn seamless_grid_reports_total() {
    let tiled = seamless_2d(vec![vec![0.0; 16]; 16], 77, 4, &ValueNoise::new(2));
    assert_eq!(tiled.cells, 256);
    let sum: f64 = tiled.values.iter().flatten().sum();
    assert!((sum - tiled.total).abs() < 1e-9);
    assert!((-1.0..=1.0).contains(&tiled.mean()));
}

#[test]
fn nested_tree_composes() {
    let base: Basis<3> = Arc::new(ValueNoise::new(1234));
    let layered: Basis<3> =
        Arc::new(Fractal::layered(base, FractalConfig::new(3, 0.5, 0.5)).expect("valid"));
    let warped: Basis<3> =
        Arc::new(Fractal::warped(layered, FractalConfig::default()).expect("valid"));
    let ridged: Basis<3> = Arc::new(
        Fractal::ridged(warped, FractalKind::Ridged.default_config()).expect("valid"),
    );
    let sharpened = Exponential::new(ridged, 1.5).expect("valid");
    for i in 0..1_000 {
        let t = f64::from(i) * 0.11;
        let v = sharpened.noise([t, t * 0.3, -t]);
        assert!(v.abs() <= 1.0 + 1e-12, "{v}");
    }
}

#[test]
#[expect(clippy::float_cmp, reason = "threads must see the same values")]
fn shared_tree_samples_from_many_threads() {
    let maelstrom = Arc::new(
        Maelstrom::<2>::new(Arc::new(ValueNoise::new(5)), FractalConfig::new(4, 0.6, 0.5))
            .expect("valid"),
    );
    let points: Vec<[f64; 2]> = (0..256)
        .map(|i| [f64::from(i) * 0.17, f64::from(i) * -0.29])
        .collect();
    let sequential: Vec<f64> = points.iter().map(|&p| maelstrom.noise(p)).collect();

    let (points, maelstrom) = (&points, &maelstrom);
    thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(move || points.iter().map(|&p| maelstrom.noise(p)).collect::<Vec<_>>())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().expect("worker panicked"), sequential);
        }
    });
}

#[test]
fn invalid_configuration_is_reported() {
    let basis: Basis<2> = Arc::new(ValueNoise::default());
    assert_eq!(
        Fractal::layered(basis.clone(), FractalConfig::new(2, 0.0, 0.5)).err(),
        Some(ConfigError::InvalidFrequency(0.0))
    );
    assert!(matches!(
        Viny::new(basis.clone(), basis, FractalConfig::new(2, 1.0, f64::NAN)),
        Err(ConfigError::InvalidLacunarity(_))
    ));
}
