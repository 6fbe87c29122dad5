//! L4 Atomic Layer: Pure easing curve for scroll animations

/// Ease-in-out quadratic: accelerates until the midpoint, then decelerates.
///
/// - `p < 0.5`: `2p²`
/// - otherwise: `p(4 - 2p) - 1`
///
/// Input is clamped to [0, 1]; the output is in [0, 1].
#[inline]
pub fn ease_in_out_quad(p: f64) -> f64 {
    let p = p.clamp(0.0, 1.0);
    if p < 0.5 {
        2.0 * p * p
    } else {
        p * (4.0 - 2.0 * p) - 1.0
    }
}
