use rand::Rng;

use crate::{
    internal_util::get_cell,
    interp::{bilinear_smoothstep_scalar, lerp, smoothstep},
    lattice::{Lattice1D, Lattice2D},
    NoiseParameters,
};

use super::{NoiseField1D, NoiseField2D};

/// Value noise over a line: random values at integer points, eased in between.
#[derive(Debug, Clone)]
pub struct ValueNoise1D {
    params: NoiseParameters,
    table: Lattice1D<f64>,
}

impl ValueNoise1D {
    pub fn new(params: NoiseParameters) -> Self {
        let table = Lattice1D::generate(params, |rng| rng.gen::<f64>());
        Self { params, table }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(NoiseParameters::with_seed(seed))
    }

    pub fn params(&self) -> &NoiseParameters {
        &self.params
    }

    pub fn table(&self) -> &Lattice1D<f64> {
        &self.table
    }

    /// Noise at `x`, in \[0.0,1.0\]. Periodic with period `table_size`.
    ///
    /// `x` must be finite; debug builds panic on NaN or infinity, release
    /// builds return NaN.
    pub fn sample(&self, x: f64) -> f64 {
        let (x0, x1, t) = get_cell(x, self.table.mask());
        lerp(*self.table.get_wrapped(x0), *self.table.get_wrapped(x1), smoothstep(t))
    }
}

impl NoiseField1D for ValueNoise1D {
    fn sample(&self, x: f64) -> f64 {
        ValueNoise1D::sample(self, x)
    }

    fn value_range(&self) -> (f64, f64) {
        (0.0, 1.0)
    }
}

/// Value noise over the plane.
#[derive(Debug, Clone)]
pub struct ValueNoise2D {
    params: NoiseParameters,
    table: Lattice2D<f64>,
}

impl ValueNoise2D {
    pub fn new(params: NoiseParameters) -> Self {
        let table = Lattice2D::generate(params, |rng| rng.gen::<f64>());
        Self { params, table }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(NoiseParameters::with_seed(seed))
    }

    pub fn params(&self) -> &NoiseParameters {
        &self.params
    }

    pub fn table(&self) -> &Lattice2D<f64> {
        &self.table
    }

    /// Noise at `(x, y)`, in \[0.0,1.0\]. Periodic with period `table_size` on both axes.
    /// Coordinates must be finite, as for [`ValueNoise1D::sample`].
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let (x0, x1, tx) = get_cell(x, self.table.mask());
        let (y0, y1, ty) = get_cell(y, self.table.mask());

        let c00 = *self.table.get_wrapped(x0, y0);
        let c10 = *self.table.get_wrapped(x1, y0);
        let c01 = *self.table.get_wrapped(x0, y1);
        let c11 = *self.table.get_wrapped(x1, y1);

        bilinear_smoothstep_scalar(c00, c10, c01, c11, tx, ty)
    }
}

impl NoiseField2D for ValueNoise2D {
    fn sample(&self, x: f64, y: f64) -> f64 {
        ValueNoise2D::sample(self, x, y)
    }

    fn value_range(&self) -> (f64, f64) {
        (0.0, 1.0)
    }
}
