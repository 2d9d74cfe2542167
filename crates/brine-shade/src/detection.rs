//! Environment inference from the host's fog signal.
//!
//! The host never says which dimension or weather the camera is in, so these
//! predicates read it back out of fog color and fog control. Exact float
//! equality is intentional: the host authors sentinel fog values and the
//! comparisons must match them bit-for-bit. Do not add epsilons.

use brine_core::constants::{MIN_RENDER_DISTANCE, RAIN_FOG_CONTROL};
use brine_core::math::{mix, saturate, smoothstep, step};
use brine_core::types::{Environment, EnvironmentFlags, FogSignal, WeatherBlend};
use glam::{Vec2, Vec3};

/// The end uses an authored fog color with equal red and blue channels.
pub fn is_end(fog: &FogSignal) -> bool {
    let c = fog.color;
    c.x == c.z && (c.x - c.y > 0.24 || (c.y == 0.0 && c.x > 0.1))
}

/// Nether fog start tracks render distance along `0.029 + 0.09 * y^2`
/// (fit over nine render distances, accurate to about 0.02). Standing in
/// lava counts as nether.
pub fn is_nether(fog: &FogSignal) -> bool {
    let c = fog.color;
    let ctrl = fog.control;

    let expected_x = 0.029 + 0.09 * ctrl.y * ctrl.y;
    let nether_control = ctrl.x < 0.14 && (ctrl.x - expected_x).abs() < 0.02;
    let nether_color = c.x + c.y > 0.0;

    let under_lava = ctrl.x == 0.0 && c.z == 0.0 && c.y < 0.18 && c.x - c.y > 0.1;

    (nether_control && nether_color) || under_lava
}

pub fn is_underwater(fog: &FogSignal) -> bool {
    let c = fog.color;
    fog.control.x == 0.0 && fog.control.y < 0.8 && (c.z > c.x || c.y > c.x)
}

/// Evaluate every environment predicate independently.
pub fn detect(fog: &FogSignal) -> EnvironmentFlags {
    EnvironmentFlags {
        end: is_end(fog),
        nether: is_nether(fog),
        underwater: is_underwater(fog),
    }
}

/// Single environment with end > nether > underwater > overworld precedence.
pub fn classify_environment(fog: &FogSignal) -> Environment {
    detect(fog).resolve()
}

/// Continuous rain intensity in [0, 1].
///
/// Clear-sky fog start varies with render distance (`0.5 + 20 / z`); rain
/// sits at a fixed (0.23, 0.70). Each axis is mapped onto [clear, rain],
/// the product is smoothed. Render distances below one block are clamped.
pub fn rain_factor(control: Vec3) -> f32 {
    let z = control.z.max(MIN_RENDER_DISTANCE);
    let clear = Vec2::new(0.5 + 20.0 / z, 1.0);
    let rain = Vec2::from(RAIN_FOG_CONTROL);

    let factor = ((control.truncate() - clear) / (rain - clear)).clamp(Vec2::ZERO, Vec2::ONE);
    let val = factor.x * factor.y;
    val * val * (3.0 - 2.0 * val)
}

/// Day/night/dusk/rain mood from fog color red/blue and fog start.
pub fn weather_blend(fog: &FogSignal) -> WeatherBlend {
    let r = fog.color.x;
    let b = fog.color.z;
    let x = fog.control.x;

    WeatherBlend {
        dusk: (r - b).max(0.0),
        day: saturate(1.0 - r * 1.2).powf(0.4),
        night: saturate(1.0 - r * 1.5).powf(1.2),
        rain: mix(smoothstep(0.66, 0.3, x), 0.0, step(x, 0.0)),
    }
}
