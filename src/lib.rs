//! Lattice-based procedural noise (value noise in 1D and 2D, gradient noise
//! in 2D) and the image utilities used to look at it.
//!
//! ```
//! use lattice_noise::{image::rasterise_field, NoiseParameters, PerlinNoise2D, ValueNoise1D};
//!
//! let params = NoiseParameters::new(256, 16).unwrap();
//! let line = ValueNoise1D::new(params);
//! assert!((0.0..=1.0).contains(&line.sample(3.7)));
//!
//! let field = PerlinNoise2D::new(params);
//! let image = rasterise_field(&field, 64, 64, ((0.0, 0.0), (8.0, 8.0)));
//! assert_eq!(image.to_rgba8().len(), 64 * 64 * 4);
//! ```

mod internal_util;
mod parameters;

pub mod image;
pub mod interp;
pub mod lattice;
pub mod noise;

pub use crate::image::{Image, ImageError, ResampleMethod, Rgba};
pub use crate::noise::{NoiseField1D, NoiseField2D, PerlinNoise2D, ValueNoise1D, ValueNoise2D};
pub use crate::parameters::{
    NoiseParameters, ParameterError, DEFAULT_SEED, DEFAULT_TABLE_SIZE, MAX_TABLE_SIZE,
};
