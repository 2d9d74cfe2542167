//! Water surface shading.
//!
//! One fragment in, one [`WaterShade`] out: the bump-perturbed sky/cloud/torch
//! reflection, its fresnel weight, the darkened and re-alphaed body color and
//! the (optionally wave-displaced) world position. Top planes sample the sky
//! model; side planes reflect the zenith color only.

use brine_core::config::{BumpType, WaterConfig};
use brine_core::constants::{
    CLOUD_FADE_RATE, CLOUD_FADE_START, MIN_PARALLAX_Y, PI_HALF, REFLECTION_PARALLAX,
    WATER_DARKEN, WATER_R0, WATER_TILE, WAVE_DISTANCE,
};
use brine_core::math::{glsl_mod2, glsl_mod3, mix, mix3, saturate, smoothstep, step};
use brine_core::types::EnvironmentFlags;
use glam::{Vec2, Vec3, Vec4};

use crate::noise::{displacement, fbm_lite, value_noise2d};
use crate::sky::{SkyModel, SkyPalette, SkyQuery};

/// Schlick's approximation: `r0 + (1 - r0) * (1 - cos_r)^5`.
#[inline]
pub fn fresnel_schlick(cos_r: f32, r0: f32) -> f32 {
    let a = 1.0 - cos_r;
    let a2 = a * a;
    r0 + (1.0 - r0) * a2 * a2 * a
}

/// Which face of a water block a fragment sits on, keyed off the fractional
/// part of its chunk-space height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WaterPlane {
    /// Vertical side face.
    Side,
    /// Still water surface (height in (0.8, 0.9)).
    Flat,
    /// Flowing surface.
    Slanted,
    /// Flowing surface close to a full block.
    SteepSlanted,
}

impl WaterPlane {
    pub fn classify(fract_cpos_y: f32) -> Self {
        if fract_cpos_y <= 0.0 {
            WaterPlane::Side
        } else if fract_cpos_y > 0.8 && fract_cpos_y < 0.9 {
            WaterPlane::Flat
        } else if fract_cpos_y > 0.9 {
            WaterPlane::SteepSlanted
        } else {
            WaterPlane::Slanted
        }
    }
}

/// Per-fragment inputs.
#[derive(Debug, Clone, Copy)]
pub struct WaterFragment {
    /// Camera-relative world position.
    pub world_pos: Vec3,
    /// Working color coming out of the base pass.
    pub color: Vec4,
    /// Raw vertex color; its alpha seeds opacity unless fog fade is on.
    pub vertex_color: Vec4,
    /// Normalized direction from the camera to the fragment.
    pub view_dir: Vec3,
    /// Absolute chunk-space position.
    pub chunk_pos: Vec3,
    /// Chunk position wrapped to the repeating tile.
    pub tiled_chunk_pos: Vec3,
    pub fract_cpos_y: f32,
    pub fog_color: Vec3,
    pub palette: SkyPalette,
    /// Lightmap: x = block/torch light, y = sky light.
    pub lit: Vec2,
    pub time: f32,
    pub cam_dist: f32,
    pub rain: f32,
    pub torch_color: Vec3,
    pub env: EnvironmentFlags,
}

/// Shading result. Replaces the in-place position/color mutation with
/// explicit outputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterShade {
    pub world_pos: Vec3,
    pub color: Vec4,
    pub reflection: Vec3,
    pub fresnel: f32,
}

/// Unscaled top-plane bump noise for one fragment.
type BumpNoise = fn(&WaterFragment) -> f32;

fn bump_noise(bump_type: BumpType) -> BumpNoise {
    match bump_type {
        BumpType::Displacement => displacement_bump,
        BumpType::ValueNoise => value_noise_bump,
        BumpType::Fractal => fractal_bump,
    }
}

fn displacement_bump(frag: &WaterFragment) -> f32 {
    let t = frag.time;
    displacement(frag.tiled_chunk_pos, t)
        + 0.12 * (t * 2.0 + frag.chunk_pos.dot(Vec3::splat(PI_HALF))).sin()
}

fn value_noise_bump(frag: &WaterFragment) -> f32 {
    let c = frag.chunk_pos;
    value_noise2d(glsl_mod2(Vec2::new(c.x, c.z), WATER_TILE) + frag.time)
}

fn fractal_bump(frag: &WaterFragment) -> f32 {
    let c = frag.chunk_pos;
    let p = glsl_mod3(Vec3::new(c.x, c.z, frag.time), WATER_TILE);
    fbm_lite(p * Vec3::new(1.0, 1.0, 1.5))
}

/// Binds a resolved configuration and sky model once; `shade` is then pure.
/// The bump variant is resolved to its noise function at bind time.
pub struct WaterShader<S> {
    config: WaterConfig,
    tint: Vec3,
    bump_noise: BumpNoise,
    sky: S,
}

impl<S: SkyModel> WaterShader<S> {
    pub fn new(config: WaterConfig, sky: S) -> Self {
        log::debug!(
            "Water shader bound: bump {:?} x{}, clouds={}, aurora={}, mask={}, wave={}",
            config.bump_type,
            config.bump,
            config.cloud_reflection,
            config.aurora_reflection,
            config.reflection_mask,
            config.wave,
        );
        let tint = Vec3::from(config.tint);
        let bump_noise = bump_noise(config.bump_type);
        Self {
            config,
            tint,
            bump_noise,
            sky,
        }
    }

    pub fn config(&self) -> &WaterConfig {
        &self.config
    }

    pub fn shade(&self, frag: &WaterFragment) -> WaterShade {
        let plane = WaterPlane::classify(frag.fract_cpos_y);
        let (cos_r, mut reflection, bump) = match plane {
            WaterPlane::Side => self.side_plane(frag),
            _ => self.top_plane(frag, plane),
        };

        // shade masks sky reflection, except in the end which has no sky light
        if !frag.env.end {
            reflection *= 0.05 + frag.lit.y * 1.14;
        }

        let fresnel = fresnel_schlick(cos_r, WATER_R0);
        let opacity = 1.0 - cos_r;

        let rgb = frag.color.truncate() * (WATER_DARKEN * self.tint * (1.0 - 0.8 * fresnel));
        let mut alpha = if self.config.fog_fade {
            frag.color.w * self.config.transparency
        } else {
            frag.vertex_color.w * self.config.transparency
        };
        alpha += (1.0 - alpha) * opacity * opacity;

        let mut world_pos = frag.world_pos;
        if self.config.wave && frag.cam_dist < WAVE_DISTANCE {
            world_pos.y -= bump;
        }

        WaterShade {
            world_pos,
            color: rgb.extend(alpha),
            reflection,
            fresnel,
        }
    }

    fn top_bump(&self, frag: &WaterFragment) -> f32 {
        self.config.bump * (self.bump_noise)(frag)
    }

    fn top_plane(&self, frag: &WaterFragment, plane: WaterPlane) -> (f32, Vec3, f32) {
        let bump = self.top_bump(frag);
        let t = frag.time;
        let w = frag.world_pos;

        let mut view_dir = frag.view_dir;
        let cos_r = view_dir.y.abs();
        let cos_r = mix(cos_r, 1.0 - cos_r * cos_r, bump);
        view_dir.y = cos_r;

        let mut refl = self.sky.reflection(&SkyQuery {
            palette: frag.palette,
            view_dir,
            fog_color: frag.fog_color,
            time: t,
            height: -w.y,
            rain: frag.rain,
            env: frag.env,
        });

        if self.config.cloud_reflection && w.y < 0.0 {
            // project onto a virtual sky plane above the water
            let vy = if view_dir.y.abs() < MIN_PARALLAX_Y {
                MIN_PARALLAX_Y.copysign(view_dir.y)
            } else {
                view_dir.y
            };
            let parallax = Vec2::new(view_dir.x, view_dir.z) / vy;
            let projected = Vec2::new(w.x, w.z) - parallax * REFLECTION_PARALLAX * (1.0 - bump);
            let fade = saturate(CLOUD_FADE_START - CLOUD_FADE_RATE * projected.length());
            let sky_pos = Vec3::new(projected.x, projected.y, projected.y);

            if self.config.aurora_reflection {
                let aurora = self.sky.aurora(sky_pos, t, frag.rain, frag.fog_color);
                refl += 2.0 * aurora.truncate() * aurora.w * fade;
            }
            let clouds = self.sky.clouds(sky_pos, t, frag.rain, &frag.palette);
            refl = mix3(refl, 1.5 * clouds.truncate(), clouds.w * fade);
        }

        let torch = frag.lit.x * frag.lit.x + frag.lit.x;
        refl += frag.torch_color * self.config.torch_intensity * torch * bump * 10.0;

        if self.config.reflection_mask {
            let mask = 0.15 + 0.08 * (view_dir.x * 12.0 + 31.4 * bump).sin();
            refl *= 0.3 + 0.7 * smoothstep(mask, 0.2 + mask, view_dir.y);
        }

        refl *= match plane {
            WaterPlane::Flat => 1.0 - w.y.clamp(0.0, 0.66),
            WaterPlane::SteepSlanted => 0.1 * (t * 2.0 + frag.chunk_pos.y * 12.566).sin() + 0.2,
            _ => 0.1 * (t * 2.0 + frag.chunk_pos.y * 12.566).sin() + 0.4,
        };

        (cos_r, refl, bump)
    }

    fn side_plane(&self, frag: &WaterFragment) -> (f32, Vec3, f32) {
        let phase = 1.5 * frag.time + frag.chunk_pos.dot(Vec3::splat(PI_HALF));
        let bump = self.config.bump * (0.5 + 0.5 * phase.sin());

        let xz = Vec2::new(frag.view_dir.x, frag.view_dir.z);
        let cos_r = xz.length().max(step(frag.world_pos.y, 0.5));
        let cos_r = cos_r + (1.0 - cos_r * cos_r) * bump;

        (cos_r, frag.palette.zenith, bump)
    }
}
