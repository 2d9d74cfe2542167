//! Scalar helpers with GPU shading-language semantics.
//!
//! These differ from the std equivalents in ways that matter here:
//! `fract` floors instead of truncating (so it stays non-negative for negative
//! input), and `glsl_mod` takes the sign of the divisor.

use glam::{Vec2, Vec3};

/// `x - floor(x)`. In [0, 1] for finite input: negative values closer to
/// zero than `f32::EPSILON / 2` round up to exactly 1.0.
#[inline]
pub fn fract(x: f32) -> f32 {
    x - x.floor()
}

/// Double-precision `fract`.
#[inline]
pub fn fract64(x: f64) -> f64 {
    x - x.floor()
}

/// `x - y * floor(x / y)`.
#[inline]
pub fn glsl_mod(x: f32, y: f32) -> f32 {
    x - y * (x / y).floor()
}

/// Component-wise `glsl_mod` for 2D vectors.
#[inline]
pub fn glsl_mod2(v: Vec2, y: f32) -> Vec2 {
    v - y * (v / y).floor()
}

/// Component-wise `glsl_mod` for 3D vectors.
#[inline]
pub fn glsl_mod3(v: Vec3, y: f32) -> Vec3 {
    v - y * (v / y).floor()
}

/// Linear blend: `a` at `t = 0`, `b` at `t = 1`. Not clamped.
#[inline]
pub fn mix(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Linear blend of 3D vectors.
#[inline]
pub fn mix3(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a + (b - a) * t
}

/// 0.0 if `x < edge`, else 1.0.
#[inline]
pub fn step(edge: f32, x: f32) -> f32 {
    if x < edge {
        0.0
    } else {
        1.0
    }
}

/// Clamp to [0, 1].
#[inline]
pub fn saturate(x: f32) -> f32 {
    x.clamp(0.0, 1.0)
}

/// Hermite ramp between `e0` and `e1`. Reversed edges give a falling ramp.
/// Equal edges degrade to `step(e0, x)` instead of dividing by zero.
#[inline]
pub fn smoothstep(e0: f32, e1: f32, x: f32) -> f32 {
    if e0 == e1 {
        return step(e0, x);
    }
    let t = saturate((x - e0) / (e1 - e0));
    t * t * (3.0 - 2.0 * t)
}

/// Cubic fade `3t^2 - 2t^3` without clamping.
#[inline]
pub fn hermite(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}
