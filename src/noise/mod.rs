mod perlin;
mod value;

pub use perlin::PerlinNoise2D;
pub use value::{ValueNoise1D, ValueNoise2D};

/// A scalar field over one continuous coordinate.
pub trait NoiseField1D {
    fn sample(&self, x: f64) -> f64;

    /// The interval the samples are expected to fall in.
    fn value_range(&self) -> (f64, f64);

    /// Sample `count` points starting at `start`, `step` apart.
    fn sample_line(&self, start: f64, step: f64, count: usize) -> Vec<f64> {
        (0..count)
            .map(|i| self.sample(start + step * i as f64))
            .collect()
    }
}

/// A scalar field over two continuous coordinates.
pub trait NoiseField2D {
    fn sample(&self, x: f64, y: f64) -> f64;

    /// The interval the samples are expected to fall in.
    fn value_range(&self) -> (f64, f64);
}
