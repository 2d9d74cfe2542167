//! Hash and value noise used for all procedural motion and bump detail.
//!
//! Pure functions of position (and time for the animated ones). The hash
//! constants are not interchangeable: callers rely on their specific banding.
//! Hashes that feed lattice noise run in f64 so coordinates in the thousands
//! do not alias.

use brine_core::constants::{
    FAST_HASH_SCALE, FAST_HASH_WEIGHTS, FBM_LITE_OCTAVES, FBM_OCTAVES, FBM_SHIFT, HASH_SCALE,
    HASH_WEIGHTS, PERM_MODULUS, PI_HALF, SWAY_HASH_SCALE,
};
use brine_core::math::{fract, fract64, hermite, mix, smoothstep};
use glam::{DVec3, DVec4, Vec2, Vec3};

/// Largest f32 below 1.0. Narrowing a fract close to 1 can otherwise round up.
const BELOW_ONE: f32 = 1.0 - f32::EPSILON / 2.0;

/// Lattice hash in [0, 1).
#[inline]
pub fn hash2(n: Vec2) -> f32 {
    let d = n.x as f64 * HASH_WEIGHTS[0] + n.y as f64 * HASH_WEIGHTS[1];
    (fract64(d.sin() * HASH_SCALE) as f32).min(BELOW_ONE)
}

/// `hash2` remapped through a smooth threshold band `[t.x, t.y]`.
#[inline]
pub fn hash_with_transition(n: Vec2, t: Vec2) -> f32 {
    smoothstep(t.x, t.y, hash2(n))
}

fn sway_hash(x: f64) -> f64 {
    fract64(x.sin() * SWAY_HASH_SCALE)
}

/// Smooth 1D noise for plant and lantern sway.
pub fn noise1d(x: f32) -> f32 {
    let x = x as f64;
    let x0 = x.floor();
    let t = x - x0;
    let t = t * t * (3.0 - 2.0 * t);
    let a = sway_hash(x0);
    let b = sway_hash(x0 + 1.0);
    ((a + (b - a) * t) as f32).min(BELOW_ONE)
}

/// Cheap hash in [0, 1) for displacement maps and puddles. Lower quality
/// than `hash2`.
#[inline]
pub fn fast_hash2(n: Vec2) -> f32 {
    let d = n.dot(Vec2::from(FAST_HASH_WEIGHTS));
    fract(FAST_HASH_SCALE * d.sin()).min(BELOW_ONE)
}

/// Animated displacement: cross-fades two cheap hashes of `pos.xz` with a
/// sine travelling along x + y.
pub fn displacement(pos: Vec3, t: f32) -> f32 {
    let w = 0.5 + 0.5 * (t * 1.7 + (pos.x + pos.y) * PI_HALF).sin();
    let xz = Vec2::new(pos.x, pos.z);
    mix(fast_hash2(xz), fast_hash2(xz + Vec2::ONE), w)
}

/// Bilinear value noise over `hash2` lattice corners with cubic smoothing.
pub fn value_noise2d(u: Vec2) -> f32 {
    let u0 = u.floor();
    let v = u - u0;
    let v = Vec2::new(hermite(v.x), hermite(v.y));

    let c0 = hash2(u0);
    let c1 = hash2(u0 + Vec2::new(1.0, 0.0));
    let c2 = hash2(u0 + Vec2::new(1.0, 1.0));
    let c3 = hash2(u0 + Vec2::new(0.0, 1.0));

    mix(mix(c0, c3, v.y), mix(c1, c2, v.y), v.x)
}

#[inline]
fn mod289(x: DVec4) -> DVec4 {
    x - (x * (1.0 / PERM_MODULUS)).floor() * PERM_MODULUS
}

#[inline]
fn perm(x: DVec4) -> DVec4 {
    mod289((x * 34.0 + 1.0) * x)
}

fn value_noise3d_f64(p: DVec3) -> f64 {
    let a = p.floor();
    let d = p - a;
    let d = d * d * (3.0 - 2.0 * d);

    let b = DVec4::new(a.x, a.x + 1.0, a.y, a.y + 1.0);
    let k1 = perm(DVec4::new(b.x, b.y, b.x, b.y));
    let k2 = perm(DVec4::new(k1.x, k1.y, k1.x, k1.y) + DVec4::new(b.z, b.z, b.w, b.w));

    let c = k2 + a.z;
    let k3 = perm(c);
    let k4 = perm(c + 1.0);

    let o1 = k3 * (1.0 / 41.0);
    let o1 = o1 - o1.floor();
    let o2 = k4 * (1.0 / 41.0);
    let o2 = o2 - o2.floor();

    let o3 = o2 * d.z + o1 * (1.0 - d.z);
    let o4x = o3.x * (1.0 - d.x) + o3.y * d.x;
    let o4y = o3.z * (1.0 - d.x) + o3.w * d.x;

    o4y * d.y + o4x * (1.0 - d.y)
}

/// Trilinear value noise over an 8-corner permutation hash.
pub fn value_noise3d(p: Vec3) -> f32 {
    (value_noise3d_f64(p.as_dvec3()) as f32).min(BELOW_ONE)
}

/// Sum of `octaves` value-noise octaves, doubling frequency and halving
/// amplitude each step. Presets share this so they stay nested.
fn fractal_sum(x: Vec3, octaves: u32) -> f32 {
    let shift = DVec3::splat(FBM_SHIFT as f64);
    let mut x = x.as_dvec3();
    let mut v = 0.0;
    let mut a = 0.5;
    for _ in 0..octaves {
        v += a * value_noise3d_f64(x);
        x = x * 2.0 + shift;
        a *= 0.5;
    }
    v as f32
}

/// Ten-octave fractal noise for terrain and sky detail.
pub fn fbm(x: Vec3) -> f32 {
    fractal_sum(x, FBM_OCTAVES)
}

/// Three-octave fractal noise, cheap enough for per-fragment water bump.
pub fn fbm_lite(x: Vec3) -> f32 {
    fractal_sum(x, FBM_LITE_OCTAVES)
}
