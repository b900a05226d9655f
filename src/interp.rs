//! Easing and interpolation primitives shared by the samplers and the resize
//! operations.

use crate::image::Rgba;

/// Cubic ease `t²(3−2t)` for `t` in \[0.0,1.0\]. Its derivative vanishes at both
/// ends, so blends built on it are smooth across cell boundaries.
pub fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Blend four scalar corners, easing both parameters with [`smoothstep`].
pub fn bilinear_smoothstep_scalar(c00: f64, c10: f64, c01: f64, c11: f64, tx: f64, ty: f64) -> f64 {
    let sx = smoothstep(tx);
    let sy = smoothstep(ty);
    lerp(lerp(c00, c10, sx), lerp(c01, c11, sx), sy)
}

/// Normalized RGB color, each channel in \[0.0,1.0\].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color3 {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color3 {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        Self {
            r: lerp(self.r, other.r, t),
            g: lerp(self.g, other.g, t),
            b: lerp(self.b, other.b, t),
        }
    }

    /// Scale to 8-bit channels, truncating and saturating. Alpha is opaque.
    pub fn to_rgba(&self) -> Rgba {
        Rgba::opaque(
            (self.r * 255.0) as u8,
            (self.g * 255.0) as u8,
            (self.b * 255.0) as u8,
        )
    }
}

impl From<Rgba> for Color3 {
    fn from(color: Rgba) -> Self {
        Self {
            r: color.r as f64 / 255.0,
            g: color.g as f64 / 255.0,
            b: color.b as f64 / 255.0,
        }
    }
}

/// Blend linearly in x along the top and bottom pairs, then in y.
pub fn bilinear(c00: Color3, c10: Color3, c01: Color3, c11: Color3, tx: f64, ty: f64) -> Color3 {
    let a = c00.lerp(&c10, tx);
    let b = c01.lerp(&c11, tx);
    a.lerp(&b, ty)
}

pub fn bilinear_smoothstep(
    c00: Color3,
    c10: Color3,
    c01: Color3,
    c11: Color3,
    tx: f64,
    ty: f64,
) -> Color3 {
    bilinear(c00, c10, c01, c11, smoothstep(tx), smoothstep(ty))
}
