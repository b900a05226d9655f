use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::interp::Color3;

use super::{Image, Rgba};

/// Normalized colors of the random pattern.
const PALETTE: [Color3; 3] = [
    Color3::new(0.4078, 0.4078, 0.3764),
    Color3::new(0.7606, 0.6274, 0.6313),
    Color3::new(0.8980, 0.9372, 0.9725),
];

/// [`PALETTE`] scaled by 255 and truncated.
pub const PATTERN_PALETTE: [Rgba; 3] = [
    Rgba::opaque(103, 103, 95),
    Rgba::opaque(193, 159, 160),
    Rgba::opaque(228, 238, 247),
];

/// Fill an image with colors picked uniformly from [`PATTERN_PALETTE`].
/// The palette index is `min(floor(u * 3), 2)` for a uniform `u` in \[0.0,1.0).
pub fn generate_random_pattern<R: Rng + ?Sized>(width: u32, height: u32, rng: &mut R) -> Image {
    debug!("generating {}x{} random pattern", width, height);
    Image::from_fn(width, height, |_, _| {
        let index = ((rng.gen::<f64>() * PALETTE.len() as f64) as usize).min(PALETTE.len() - 1);
        PALETTE[index].to_rgba()
    })
}

pub fn generate_random_pattern_seeded(width: u32, height: u32, seed: u64) -> Image {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    generate_random_pattern(width, height, &mut rng)
}
