use log::debug;

use crate::{
    internal_util::scale_index,
    interp::{bilinear, bilinear_smoothstep, Color3},
};

use super::{Image, ImageError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResampleMethod {
    Nearest,
    Bilinear,
    BilinearSmooth,
}

type Blend = fn(Color3, Color3, Color3, Color3, f64, f64) -> Color3;

impl Image {
    pub fn resize(
        &self,
        width: u32,
        height: u32,
        method: ResampleMethod,
    ) -> Result<Self, ImageError> {
        match method {
            ResampleMethod::Nearest => self.resize_nearest(width, height),
            ResampleMethod::Bilinear => self.resize_bilinear(width, height),
            ResampleMethod::BilinearSmooth => self.resize_bilinear_smooth(width, height),
        }
    }

    /// Destination `(x, y)` takes source `(floor(x * src_w / width), floor(y * src_h / height))`.
    pub fn resize_nearest(&self, width: u32, height: u32) -> Result<Self, ImageError> {
        self.check_resample_source(width, height)?;
        debug!(
            "nearest resize {}x{} -> {}x{}",
            self.width, self.height, width, height
        );

        Ok(Self::from_fn(width, height, |x, y| {
            self.at(
                scale_index(x, width, self.width),
                scale_index(y, height, self.height),
            )
        }))
    }

    /// Treat the source pixels as the corners of a `(src_w - 1) × (src_h - 1)`
    /// grid and blend linearly inside each cell.
    pub fn resize_bilinear(&self, width: u32, height: u32) -> Result<Self, ImageError> {
        self.resize_grid(width, height, bilinear)
    }

    /// Like [`Image::resize_bilinear`], easing the blend with smoothstep.
    pub fn resize_bilinear_smooth(&self, width: u32, height: u32) -> Result<Self, ImageError> {
        self.resize_grid(width, height, bilinear_smoothstep)
    }

    fn resize_grid(&self, width: u32, height: u32, blend: Blend) -> Result<Self, ImageError> {
        self.check_resample_source(width, height)?;
        debug!(
            "grid resize {}x{} -> {}x{}",
            self.width, self.height, width, height
        );

        let (max_x, max_y) = (self.width.saturating_sub(1), self.height.saturating_sub(1));
        let (grid_x, grid_y) = (max_x as f64, max_y as f64);

        Ok(Self::from_fn(width, height, |x, y| {
            let tx = x as f64 / width as f64 * grid_x;
            let ty = y as f64 / height as f64 * grid_y;
            let x0 = (tx as u32).min(max_x);
            let y0 = (ty as u32).min(max_y);
            // a one pixel wide source has no cell to the right
            let x1 = (x0 + 1).min(max_x);
            let y1 = (y0 + 1).min(max_y);

            let c00 = Color3::from(self.at(x0, y0));
            let c10 = Color3::from(self.at(x1, y0));
            let c01 = Color3::from(self.at(x0, y1));
            let c11 = Color3::from(self.at(x1, y1));

            blend(c00, c10, c01, c11, tx - x0 as f64, ty - y0 as f64).to_rgba()
        }))
    }

    fn check_resample_source(&self, width: u32, height: u32) -> Result<(), ImageError> {
        if (self.width == 0 || self.height == 0) && width > 0 && height > 0 {
            return Err(ImageError::EmptySource);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::image::{generate_random_pattern_seeded, Rgba};

    use super::*;

    #[test]
    fn test_nearest_identity() {
        let image = generate_random_pattern_seeded(37, 23, 2);
        assert_eq!(image.resize_nearest(37, 23).unwrap(), image);
    }

    #[test]
    fn test_nearest_upscale_blocks() {
        let image = Image::from_pixels(
            2,
            2,
            vec![Rgba::gray(0), Rgba::gray(1), Rgba::gray(2), Rgba::gray(3)],
        )
        .unwrap();
        let up = image.resize_nearest(4, 4).unwrap();
        let expected = [[0, 0, 1, 1], [0, 0, 1, 1], [2, 2, 3, 3], [2, 2, 3, 3]];
        for (y, row) in expected.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                assert_eq!(up.get_pixel(x as u32, y as u32), Some(&Rgba::gray(v)));
            }
        }
    }

    #[test]
    fn test_nearest_downscale() {
        let image = Image::from_fn(8, 1, |x, _| Rgba::gray(x as u8));
        let down = image.resize_nearest(4, 1).unwrap();
        let values = down.pixels().iter().map(|p| p.r).collect::<Vec<_>>();
        assert_eq!(values, vec![0, 2, 4, 6]);
    }

    #[test]
    fn test_bilinear_smooth_endpoints() {
        let image = Image::from_pixels(2, 1, vec![Rgba::gray(0), Rgba::gray(255)]).unwrap();
        let up = image.resize_bilinear_smooth(4, 1).unwrap();
        let values = up.pixels().iter().map(|p| p.r).collect::<Vec<_>>();
        // tx = 0, 0.25, 0.5, 0.75 over a single cell
        assert_eq!(values[0], 0);
        assert_eq!(values[2], 127);
        assert!(values[1] < 63);
        assert!(values[3] > 191);
        assert!(up.pixels().iter().all(|p| p.a == 255));
    }

    #[test]
    fn test_bilinear_linear_steps() {
        let image = Image::from_pixels(2, 1, vec![Rgba::gray(0), Rgba::gray(200)]).unwrap();
        let up = image.resize(4, 1, ResampleMethod::Bilinear).unwrap();
        let values = up.pixels().iter().map(|p| p.r).collect::<Vec<_>>();
        assert_eq!(values, vec![0, 50, 100, 150]);
    }

    #[test]
    fn test_constant_image_stays_constant() {
        let image = Image::new(5, 3, Rgba::opaque(10, 20, 30));
        for method in [
            ResampleMethod::Nearest,
            ResampleMethod::Bilinear,
            ResampleMethod::BilinearSmooth,
        ] {
            let out = image.resize(17, 9, method).unwrap();
            assert_eq!(out, Image::new(17, 9, Rgba::opaque(10, 20, 30)));
        }
    }

    #[test]
    fn test_thin_sources_stay_in_bounds() {
        let column = Image::from_fn(1, 4, |_, y| Rgba::gray(y as u8 * 60));
        let out = column.resize_bilinear_smooth(3, 8).unwrap();
        assert_eq!(out.dimensions(), (3, 8));
        for y in 0..8 {
            let row = (0..3)
                .map(|x| out.get_pixel(x, y).copied())
                .collect::<Vec<_>>();
            assert!(row.iter().all(|p| *p == row[0]));
        }

        let single = Image::new(1, 1, Rgba::gray(42));
        assert_eq!(
            single.resize_bilinear_smooth(4, 4).unwrap(),
            Image::new(4, 4, Rgba::gray(42))
        );
    }

    #[test]
    fn test_empty_source() {
        let empty = Image::new(0, 0, Rgba::gray(0));
        assert_eq!(empty.resize_nearest(2, 2), Err(ImageError::EmptySource));
        assert_eq!(
            empty.resize_bilinear_smooth(2, 2),
            Err(ImageError::EmptySource)
        );
        assert!(empty.resize_nearest(0, 0).unwrap().is_empty());
    }
}
