use log::debug;

use crate::noise::NoiseField2D;

use super::{Image, Rgba};

/// Render a 2D field as a grayscale image.
///
/// Pixel `(ix, iy)` samples the field at
/// `min + (max - min) * i / size` on each axis. Samples are remapped from the
/// field's [`NoiseField2D::value_range`] to \[0,255\], clamping anything outside.
pub fn rasterise_field<F: NoiseField2D + ?Sized>(
    field: &F,
    width: u32,
    height: u32,
    corners: ((f64, f64), (f64, f64)),
) -> Image {
    let ((min_x, min_y), (max_x, max_y)) = corners;
    let (low, high) = field.value_range();
    debug!(
        "rasterising field over ({}, {})-({}, {}) into {}x{}",
        min_x, min_y, max_x, max_y, width, height
    );

    Image::from_fn(width, height, |ix, iy| {
        let x = min_x + (max_x - min_x) * ix as f64 / width as f64;
        let y = min_y + (max_y - min_y) * iy as f64 / height as f64;
        let v = ((field.sample(x, y) - low) / (high - low)).clamp(0.0, 1.0);
        Rgba::gray((v * 255.0) as u8)
    })
}
