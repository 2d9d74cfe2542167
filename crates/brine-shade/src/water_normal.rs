//! Scalar water height field and the normal map derived from it.
//!
//! Independent of per-fragment shading: this is what gets baked into a
//! normal-map texture ahead of time.

use brine_core::config::{BumpType, WaterConfig};
use brine_core::constants::WATER_TILE;
use brine_core::math::glsl_mod2;
use glam::{UVec2, Vec2, Vec3};

use crate::noise::{fbm_lite, value_noise2d};

/// `1 - bump` over the 16-unit tiled uv. The displacement bump type has no
/// height-field form and yields a flat surface at `1 - bump`.
pub fn water_height(uv: Vec2, time: f32, config: &WaterConfig) -> f32 {
    let tiled = glsl_mod2(uv, WATER_TILE);
    let noise = match config.bump_type {
        BumpType::ValueNoise => value_noise2d(tiled + time),
        BumpType::Fractal => {
            fbm_lite(Vec3::new(tiled.x, tiled.y, time) * Vec3::new(1.0, 1.0, 0.5))
        }
        BumpType::Displacement => 1.0,
    };
    1.0 - config.bump * noise
}

/// One sample of a normal map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalSample {
    pub normal: Vec3,
    pub height: f32,
}

/// Samples per world unit below which `normal_map` clamps its resolution.
const MIN_RESOLUTION: f32 = 1.0e-3;

/// Surface normal from forward differences of the height field at a step of
/// `1 / resolution`. Non-positive resolutions are clamped to a tiny positive
/// value; a degenerate gradient falls back to +Z.
pub fn normal_map(
    uv: Vec2,
    resolution: Vec2,
    scale: f32,
    time: f32,
    config: &WaterConfig,
) -> NormalSample {
    let step = 1.0 / resolution.max(Vec2::splat(MIN_RESOLUTION));

    let height = water_height(uv, time, config);
    let dxy = height
        - Vec2::new(
            water_height(uv + Vec2::new(step.x, 0.0), time, config),
            water_height(uv + Vec2::new(0.0, step.y), time, config),
        );

    NormalSample {
        normal: slope_normal(dxy, scale, step),
        height,
    }
}

fn slope_normal(dxy: Vec2, scale: f32, step: Vec2) -> Vec3 {
    let normal = (dxy * scale / step).extend(1.0).normalize_or_zero();
    if normal == Vec3::ZERO {
        Vec3::Z
    } else {
        normal
    }
}

/// A baked tile of normal samples in row-major order.
#[derive(Debug, Clone)]
pub struct NormalMap {
    pub size: UVec2,
    pub samples: Vec<NormalSample>,
}

impl NormalMap {
    pub fn get(&self, x: u32, y: u32) -> Option<&NormalSample> {
        if x >= self.size.x || y >= self.size.y {
            return None;
        }
        self.samples.get((y * self.size.x + x) as usize)
    }
}

/// Bake one full water tile at `size` texels, sampling texel centers.
///
/// Heights are sampled once per texel and differenced between neighbours
/// (one texel is one `normal_map` step). The last column and row take the
/// backward difference, since the noise does not repeat across the tile
/// edge and a forward step there would read the far side of the tile.
pub fn bake_normal_map(size: UVec2, scale: f32, time: f32, config: &WaterConfig) -> NormalMap {
    let size = size.max(UVec2::ONE);
    let texel = WATER_TILE / size.as_vec2();
    let (w, h) = (size.x as usize, size.y as usize);

    let mut heights = Vec::with_capacity(w * h);
    for y in 0..size.y {
        for x in 0..size.x {
            let uv = (Vec2::new(x as f32, y as f32) + 0.5) * texel;
            heights.push(water_height(uv, time, config));
        }
    }

    let diff = |i: usize, n: usize, stride: usize, idx: usize| -> f32 {
        if n < 2 {
            0.0
        } else if i + 1 < n {
            heights[idx] - heights[idx + stride]
        } else {
            heights[idx - stride] - heights[idx]
        }
    };

    let mut samples = Vec::with_capacity(w * h);
    for y in 0..h {
        for x in 0..w {
            let idx = y * w + x;
            let dxy = Vec2::new(diff(x, w, 1, idx), diff(y, h, w, idx));
            samples.push(NormalSample {
                normal: slope_normal(dxy, scale, texel),
                height: heights[idx],
            });
        }
    }
    NormalMap { size, samples }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(bump_type: BumpType) -> WaterConfig {
        WaterConfig {
            bump_type,
            bump: 0.5,
            ..Default::default()
        }
    }

    #[test]
    fn test_height_range() {
        for bump_type in BumpType::ALL {
            let cfg = config(bump_type);
            for i in -20..20 {
                let uv = Vec2::new(i as f32 * 1.37, i as f32 * -0.71);
                let h = water_height(uv, 2.5, &cfg);
                assert!((0.5..=1.0).contains(&h), "{bump_type:?}: {h}");
            }
        }
    }

    #[test]
    fn test_height_is_tiled() {
        for bump_type in BumpType::ALL {
            let cfg = config(bump_type);
            let uv = Vec2::new(3.25, 9.5);
            let a = water_height(uv, 1.0, &cfg);
            let b = water_height(uv + Vec2::new(WATER_TILE, -2.0 * WATER_TILE), 1.0, &cfg);
            assert!((a - b).abs() < 1e-5, "{bump_type:?}: {a} vs {b}");
        }
    }

    #[test]
    fn test_displacement_height_is_flat() {
        let cfg = config(BumpType::Displacement);
        assert_eq!(water_height(Vec2::new(1.0, 2.0), 0.0, &cfg), 0.5);
        let n = normal_map(Vec2::new(1.0, 2.0), Vec2::splat(64.0), 4.0, 0.0, &cfg);
        assert_eq!(n.normal, Vec3::Z);
    }

    #[test]
    fn test_normals_unit_length() {
        for bump_type in BumpType::ALL {
            let cfg = config(bump_type);
            for i in 0..40 {
                let uv = Vec2::new(i as f32 * 0.39, 15.9 - i as f32 * 0.4);
                let s = normal_map(uv, Vec2::splat(32.0), 8.0, 0.75, &cfg);
                assert!((s.normal.length() - 1.0).abs() < 1e-5, "{:?}", s.normal);
                assert!(s.normal.z > 0.0);
                assert_eq!(s.height, water_height(uv, 0.75, &cfg));
            }
        }
    }

    #[test]
    fn test_degenerate_resolution_and_scale() {
        let cfg = config(BumpType::ValueNoise);
        let uv = Vec2::new(2.3, 4.1);
        for resolution in [Vec2::ZERO, Vec2::new(-5.0, 0.0), Vec2::splat(f32::MIN_POSITIVE)] {
            let s = normal_map(uv, resolution, 1.0, 0.0, &cfg);
            assert!(s.normal.is_finite());
            assert!((s.normal.length() - 1.0).abs() < 1e-5);
        }
        let s = normal_map(uv, Vec2::splat(16.0), f32::INFINITY, 0.0, &cfg);
        assert!(s.normal.is_finite());
    }

    #[test]
    fn test_height_formula_per_variant() {
        let uv = Vec2::new(-3.5, 20.25);
        let t = 1.5;
        let tiled = Vec2::new(12.5, 4.25);

        let cfg = config(BumpType::ValueNoise);
        let expected = 1.0 - 0.5 * value_noise2d(tiled + t);
        assert!((water_height(uv, t, &cfg) - expected).abs() < 1e-6);

        // time is compressed by 0.5, unlike the shader bump which stretches it
        let cfg = config(BumpType::Fractal);
        let expected = 1.0 - 0.5 * fbm_lite(Vec3::new(12.5, 4.25, 0.75));
        let h = water_height(uv, t, &cfg);
        assert!((h - expected).abs() < 1e-6, "{h} vs {expected}");
        let stretched = 1.0 - 0.5 * fbm_lite(Vec3::new(12.5, 4.25, 2.25));
        assert!((h - stretched).abs() > 1e-4);
    }

    #[test]
    fn test_bake_edge_texels_stay_inside_tile() {
        let cfg = config(BumpType::ValueNoise);
        let map = bake_normal_map(UVec2::splat(16), 1.0, 0.25, &cfg);
        let last = 15;
        let uv = Vec2::new(last as f32 + 0.5, 0.5);

        // backward difference along x, forward along y
        let h = water_height(uv, 0.25, &cfg);
        let dx = water_height(uv - Vec2::X, 0.25, &cfg) - h;
        let dy = h - water_height(uv + Vec2::Y, 0.25, &cfg);
        let expected = Vec3::new(dx, dy, 1.0).normalize();

        let got = map.get(last, 0).unwrap();
        assert!((got.normal - expected).abs().max_element() < 1e-5, "{}", got.normal);

        let corner = map.get(last, last).unwrap();
        let h = water_height(Vec2::splat(15.5), 0.25, &cfg);
        let dx = water_height(Vec2::new(14.5, 15.5), 0.25, &cfg) - h;
        let dy = water_height(Vec2::new(15.5, 14.5), 0.25, &cfg) - h;
        let expected = Vec3::new(dx, dy, 1.0).normalize();
        assert!((corner.normal - expected).abs().max_element() < 1e-5);
    }

    #[test]
    fn test_bake_layout() {
        let cfg = config(BumpType::Fractal);
        let map = bake_normal_map(UVec2::new(8, 4), 2.0, 0.0, &cfg);
        assert_eq!(map.samples.len(), 32);
        let texel = WATER_TILE / Vec2::new(8.0, 4.0);
        let uv = (Vec2::new(3.0, 2.0) + 0.5) * texel;
        let expected = normal_map(uv, Vec2::new(8.0, 4.0) / WATER_TILE, 2.0, 0.0, &cfg);
        let got = map.get(3, 2).unwrap();
        assert_eq!(got.height, expected.height);
        assert!((got.normal - expected.normal).abs().max_element() < 1e-4);
        assert!(map.get(8, 0).is_none());

        let empty = bake_normal_map(UVec2::ZERO, 1.0, 0.0, &cfg);
        assert_eq!(empty.size, UVec2::ONE);
        assert_eq!(empty.samples.len(), 1);
    }
}
