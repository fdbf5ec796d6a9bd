//! Composable fractal noise for 1 to 6 dimensional coordinate spaces.
//!
//! A noise tree is built bottom-up at configuration time from a base source
//! wrapped in combinators, e.g. `Ridged(Warped(Layered(base)))`, then evaluated
//! as a pure function of coordinates and (optionally) a seed.
//!
//! # Key Types
//!
//! - [`Noise`] - The capability every base source and combinator implements
//! - [`Fractal`] - Octave accumulation (layered, inverse, warped, ridged, spiral)
//! - [`Seamless`] - Exactly periodic sampling over a chosen span
//! - [`Sliced`] - Lower-dimensional views of a higher-dimensional field
//! - [`seed`] - The per-octave seed chain shared by every combinator

pub mod adapter;
pub mod combinator;
pub mod config;
pub mod error;
pub mod math;
pub mod noise;
pub mod seamless;
pub mod seed;

pub use adapter::Sliced;
pub use combinator::{
    Exponential, Fractal, FractalKind, Maelstrom, Scaled, Slick, Turbulent, Viny,
};
pub use config::FractalConfig;
pub use error::ConfigError;
pub use noise::{Basis, Constant, Noise, ValueNoise};
pub use seamless::{Seamless, Tiled, seamless_1d, seamless_2d, seamless_3d};
