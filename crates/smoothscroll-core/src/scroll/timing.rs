//! L4 Atomic Layer: Time and offset arithmetic for scroll animations

/// Whether an explicit duration asks to skip the animation entirely
///
/// Only an explicit zero or negative value does; `None` means "derive one".
#[inline]
pub fn is_instant(duration_ms: Option<i64>) -> bool {
    matches!(duration_ms, Some(d) if d <= 0)
}

/// Resolve the duration of an animated run
///
/// An explicit duration wins. Otherwise the run lasts one millisecond per
/// pixel of travel, capped at `default_ms`.
#[inline]
pub fn resolve_duration(explicit_ms: Option<i64>, distance: f64, default_ms: i64) -> f64 {
    match explicit_ms {
        Some(d) => d as f64,
        None => distance.abs().min(default_ms as f64),
    }
}

/// Elapsed fraction of an animation, clamped to [0, 1]
///
/// A non-positive duration is already complete.
#[inline]
pub fn progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 || !duration_ms.is_finite() {
        return 1.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}

/// Absolute offset for an eased fraction of the travel, floored and non-negative
#[inline]
pub fn eased_offset(start: f64, distance: f64, eased: f64) -> f64 {
    (start + distance * eased).floor().max(0.0)
}
