//! Frame-rate independent exponential damping.
//!
//! `damp` pulls a value toward a target with exponential decay instead of
//! assigning it directly, so scroll jumps and section handoffs never pop
//! visually. There is no velocity state: the approach is monotone and can
//! never overshoot, unlike a spring.

use glam::Vec3;

/// Exponentially damp `current` toward `target`.
///
/// `v' = target + (current − target)·e^(−rate·dt)`
///
/// `rate` is the decay rate in 1/seconds (> 0); `dt` is the elapsed frame
/// time in seconds (>= 0). `dt = 0` returns `current` unchanged. The update
/// is frame-rate independent: one step of `dt` equals two consecutive steps
/// of `dt/2` up to floating-point tolerance.
#[inline]
#[must_use]
pub fn damp(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    target + (current - target) * (-rate * dt).exp()
}

/// Per-axis [`damp`] over a `Vec3`.
#[inline]
#[must_use]
pub fn damp_vec3(current: Vec3, target: Vec3, rate: f32, dt: f32) -> Vec3 {
    let k = (-rate * dt).exp();
    target + (current - target) * k
}
