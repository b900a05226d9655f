/// Locate `x` on a lattice of `mask + 1` points per period.
///
/// Returns the wrapped index of the cell's lower corner, the wrapped index of
/// its upper corner, and the offset inside the cell in \[0.0,1.0). The floor
/// is reduced modulo the period before leaving `f64`, so any finite `x` maps
/// to a valid cell. `x` must not be NaN or infinite.
pub fn get_cell(x: f64, mask: usize) -> (usize, usize, f64) {
    debug_assert!(x.is_finite(), "lattice coordinate must be finite, got {}", x);
    let floor = x.floor();
    let lo = floor.rem_euclid((mask + 1) as f64) as usize & mask;
    (lo, (lo + 1) & mask, x - floor)
}

/// Wrap a lattice coordinate into `[0, mask]`. `mask + 1` must be a power of two.
pub fn wrap(i: i64, mask: usize) -> usize {
    (i & mask as i64) as usize
}

pub fn dot(a: (f64, f64), b: (f64, f64)) -> f64 {
    a.0 * b.0 + a.1 * b.1
}

/// Map `x` in `[0, size)` onto `[0, target)` with floor semantics, in integers.
pub fn scale_index(x: u32, size: u32, target: u32) -> u32 {
    (x as u64 * target as u64 / size as u64) as u32
}
