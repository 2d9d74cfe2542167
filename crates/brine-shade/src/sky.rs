//! Sky collaborators consumed by the water shader.
//!
//! Sky, aurora and cloud rendering live outside this crate. The shader only
//! samples them through [`SkyModel`], so hosts plug in their own. The bundled
//! [`GradientSky`] is a plain zenith/horizon gradient with a squared falloff,
//! enough for tools that have no sky of their own.

use brine_core::math::{mix3, saturate};
use brine_core::types::EnvironmentFlags;
use glam::{Vec3, Vec4};

/// Default sky zenith color (deep blue, looking straight up).
pub const DEFAULT_SKY_ZENITH: [f32; 3] = [0.1, 0.15, 0.4];

/// Default sky horizon color (warm haze at the horizon).
pub const DEFAULT_SKY_HORIZON: [f32; 3] = [0.5, 0.45, 0.35];

/// Default color of the thin band right at the horizon edge.
pub const DEFAULT_SKY_HORIZON_EDGE: [f32; 3] = [0.6, 0.5, 0.4];

/// Per-frame sky colors supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyPalette {
    pub zenith: Vec3,
    pub horizon: Vec3,
    pub horizon_edge: Vec3,
}

impl Default for SkyPalette {
    fn default() -> Self {
        Self {
            zenith: Vec3::from(DEFAULT_SKY_ZENITH),
            horizon: Vec3::from(DEFAULT_SKY_HORIZON),
            horizon_edge: Vec3::from(DEFAULT_SKY_HORIZON_EDGE),
        }
    }
}

/// Everything a sky reflection lookup gets to see.
#[derive(Debug, Clone, Copy)]
pub struct SkyQuery {
    pub palette: SkyPalette,
    /// Bump-perturbed view direction (y holds the perturbed cosine).
    pub view_dir: Vec3,
    pub fog_color: Vec3,
    pub time: f32,
    /// Height of the viewer above the reflecting fragment.
    pub height: f32,
    pub rain: f32,
    pub env: EnvironmentFlags,
}

/// External sky, aurora and cloud functions.
///
/// Implementations must be pure: same inputs, same color.
pub trait SkyModel {
    /// Sky color seen along the reflected view direction.
    fn reflection(&self, query: &SkyQuery) -> Vec3;

    /// Aurora color (rgb) and coverage (a) at a projected sky position.
    fn aurora(&self, pos: Vec3, time: f32, rain: f32, fog_color: Vec3) -> Vec4;

    /// Cloud color (rgb) and coverage (a) at a projected sky position.
    fn clouds(&self, pos: Vec3, time: f32, rain: f32, palette: &SkyPalette) -> Vec4;
}

/// Zenith/horizon gradient sky without aurora or clouds.
#[derive(Debug, Clone, Copy, Default)]
pub struct GradientSky;

impl SkyModel for GradientSky {
    fn reflection(&self, query: &SkyQuery) -> Vec3 {
        if query.env.underwater {
            return query.fog_color;
        }
        let p = query.palette;
        let dir_y = query.view_dir.y;

        // Squared falloff toward the zenith; below the horizon fade to the edge color.
        let t = (dir_y * 0.5 + 0.5).powi(2);
        let sky = if dir_y >= 0.0 {
            mix3(p.horizon, p.zenith, t)
        } else {
            mix3(p.horizon, p.horizon_edge, saturate(-dir_y))
        };

        // Overcast skies wash out toward the fog color.
        mix3(sky, query.fog_color, saturate(query.rain) * 0.5)
    }

    fn aurora(&self, _pos: Vec3, _time: f32, _rain: f32, _fog_color: Vec3) -> Vec4 {
        Vec4::ZERO
    }

    fn clouds(&self, _pos: Vec3, _time: f32, _rain: f32, _palette: &SkyPalette) -> Vec4 {
        Vec4::ZERO
    }
}
