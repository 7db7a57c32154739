use std::f64::consts::PI;

/// Number of stripe cycles across the full width.
pub const STRIPE_CYCLES: f64 = 5.0;

/// Vertical stripe intensity for column `col` of a `width`-wide texture:
/// `sin(2π · col · 5 / width)²`, in `[0, 1]`.
#[inline]
pub fn stripe(col: usize, width: usize) -> f64 {
    let s = (2.0 * PI * col as f64 * STRIPE_CYCLES / width as f64).sin();
    s * s
}
