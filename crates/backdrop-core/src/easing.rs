//! Small interpolation helpers shared by the animation modules.

use glam::Vec3;
use std::time::Duration;

/// Written as `a·(1−t) + b·t` so both endpoints are reproduced exactly.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// Component-wise blend of two RGB triples.
#[inline]
pub fn lerp_rgb(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    [lerp(a[0], b[0], t), lerp(a[1], b[1], t), lerp(a[2], b[2], t)]
}

#[inline]
pub fn lerp_vec3(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a * (1.0 - t) + b * t
}

/// `1 - (1 - t)^3`, with `t` clamped to \[0, 1\].
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Fraction of `duration` covered by `elapsed`, clamped to \[0, 1\].
/// A zero duration counts as already finished.
#[inline]
pub fn progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / duration.as_secs_f32()).min(1.0)
}

/// Animated counter value: eases from 0 up to `target` over `duration`.
pub fn count_up(target: u32, elapsed: Duration, duration: Duration) -> u32 {
    let eased = ease_out_cubic(progress(elapsed, duration));
    (eased * target as f32).round() as u32
}
