use std::f64::consts::TAU;

/// Wrap any finite angle into `[0, 2π)`.
///
/// Uses `((x mod 2π) + 2π) mod 2π` so negative inputs land in range as well.
/// The second modulo folds the `-0.0 + 2π == 2π` corner back to zero.
pub fn normalize_angle(radians: f64) -> f64 {
    let wrapped = ((radians % TAU) + TAU) % TAU;
    if wrapped >= TAU { 0.0 } else { wrapped }
}
