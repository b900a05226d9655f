use rand::Rng;

use crate::{
    internal_util::{dot, get_cell},
    interp::bilinear_smoothstep_scalar,
    lattice::Lattice2D,
    NoiseParameters,
};

use super::NoiseField2D;

/// Gradient noise over the plane.
///
/// Each lattice point carries a random vector whose components are drawn
/// independently from \[-1.0,1.0). The vectors are not normalized, so samples
/// stay roughly within \[-1.0,1.0\] without a hard guarantee. Use
/// [`PerlinNoise2D::sample_normalized`] for display intensities.
#[derive(Debug, Clone)]
pub struct PerlinNoise2D {
    params: NoiseParameters,
    gradients: Lattice2D<(f64, f64)>,
}

impl PerlinNoise2D {
    pub fn new(params: NoiseParameters) -> Self {
        let gradients = Lattice2D::generate(params, |rng| {
            (rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0))
        });
        Self { params, gradients }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(NoiseParameters::with_seed(seed))
    }

    pub fn params(&self) -> &NoiseParameters {
        &self.params
    }

    pub fn table(&self) -> &Lattice2D<(f64, f64)> {
        &self.gradients
    }

    /// Coordinates must be finite; debug builds panic on NaN or infinity.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let (x0, x1, tx) = get_cell(x, self.gradients.mask());
        let (y0, y1, ty) = get_cell(y, self.gradients.mask());

        let d00 = dot(*self.gradients.get_wrapped(x0, y0), (tx, ty));
        let d10 = dot(*self.gradients.get_wrapped(x1, y0), (tx - 1.0, ty));
        let d01 = dot(*self.gradients.get_wrapped(x0, y1), (tx, ty - 1.0));
        let d11 = dot(*self.gradients.get_wrapped(x1, y1), (tx - 1.0, ty - 1.0));

        bilinear_smoothstep_scalar(d00, d10, d01, d11, tx, ty)
    }

    /// [`PerlinNoise2D::sample`] remapped by `(v + 1) / 2` and clamped to \[0.0,1.0\].
    pub fn sample_normalized(&self, x: f64, y: f64) -> f64 {
        ((self.sample(x, y) + 1.0) / 2.0).clamp(0.0, 1.0)
    }
}

impl NoiseField2D for PerlinNoise2D {
    fn sample(&self, x: f64, y: f64) -> f64 {
        PerlinNoise2D::sample(self, x, y)
    }

    fn value_range(&self) -> (f64, f64) {
        (-1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_at_lattice_points() {
        let noise = PerlinNoise2D::new(NoiseParameters::new(16, 4).unwrap());
        for y in -20..20 {
            for x in -20..20 {
                assert_eq!(noise.sample(x as f64, y as f64), 0.0);
            }
        }
    }

    #[test]
    fn test_gradient_components() {
        let noise = PerlinNoise2D::with_seed(16);
        assert_eq!(noise.table().values().len(), 256 * 256);
        for &(gx, gy) in noise.table().values() {
            assert!((-1.0..1.0).contains(&gx));
            assert!((-1.0..1.0).contains(&gy));
        }
    }

    #[test]
    fn test_matches_corner_gradient_near_origin() {
        let noise = PerlinNoise2D::new(NoiseParameters::new(8, 11).unwrap());
        let (gx, gy) = *noise.table().get(0, 0);
        let (x, y) = (1e-3, 2e-3);
        // smoothstep is flat near 0, so the first corner dominates
        let expected = gx * x + gy * y;
        assert!((noise.sample(x, y) - expected).abs() < 1e-4);
    }

    #[test]
    fn test_sample_normalized() {
        let noise = PerlinNoise2D::with_seed(3);
        for i in 0..500 {
            let (x, y) = (i as f64 * 0.137, i as f64 * 0.291 - 30.0);
            let v = noise.sample_normalized(x, y);
            assert!((0.0..=1.0).contains(&v));
        }
        assert_eq!(noise.sample_normalized(2.0, 5.0), 0.5);
    }

    #[test]
    fn test_huge_coordinates() {
        let noise = PerlinNoise2D::with_seed(16);
        assert_eq!(noise.sample(1e19, 0.5), noise.sample(0.0, 0.5));
        assert_eq!(noise.sample(-1e19, -1e19), 0.0);
        assert!(noise.sample(f64::MAX, -f64::MAX).is_finite());
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "must be finite")]
    fn test_infinite_coordinate_panics() {
        PerlinNoise2D::with_seed(16).sample(f64::INFINITY, 0.0);
    }
}
