//! Single source of truth for shading constants.
//! The hash constants are load-bearing: downstream visuals depend on their
//! exact banding, so they must not be swapped for "better" ones.

/// pi / 2, used to phase waves by world position.
pub const PI_HALF: f32 = std::f32::consts::FRAC_PI_2;

/// Dot-product weights of the high-precision lattice hash.
pub const HASH_WEIGHTS: [f64; 2] = [12.9898, 4.1414];

/// Output scale of the high-precision lattice hash.
pub const HASH_SCALE: f64 = 43758.5453;

/// Dot-product weights of the cheap hash used for displacement and puddles.
pub const FAST_HASH_WEIGHTS: [f32; 2] = [4.36, 8.28];

/// Output scale of the cheap hash.
pub const FAST_HASH_SCALE: f32 = 37.45;

/// Output scale of the 1D sway hash.
pub const SWAY_HASH_SCALE: f64 = 84.85;

/// Octave count of the full fractal sum (terrain and sky detail).
pub const FBM_OCTAVES: u32 = 10;

/// Octave count of the cheap fractal sum (water bump).
pub const FBM_LITE_OCTAVES: u32 = 3;

/// Per-octave phase offset; keeps successive octaves away from the origin.
pub const FBM_SHIFT: f32 = 100.0;

/// Modulus of the 3D permutation hash.
pub const PERM_MODULUS: f64 = 289.0;

/// Base reflectance of water for Schlick's approximation.
pub const WATER_R0: f32 = 0.03;

/// Side length of the repeating water tile in blocks.
pub const WATER_TILE: f32 = 16.0;

/// Wave geometry is only displaced within this camera distance.
pub const WAVE_DISTANCE: f32 = 14.0;

/// Height of the virtual cloud plane used for reflection parallax.
pub const REFLECTION_PARALLAX: f32 = 100.0;

/// Cloud reflections fade out as `CLOUD_FADE_START - CLOUD_FADE_RATE * d`,
/// where `d` is the projected distance on the virtual cloud plane.
pub const CLOUD_FADE_START: f32 = 2.0;

/// Fade per unit of projected cloud-plane distance.
pub const CLOUD_FADE_RATE: f32 = 0.004;

/// Smallest view elevation used as a parallax divisor.
pub const MIN_PARALLAX_Y: f32 = 1.0e-4;

/// Render distance below which the fog control z channel is treated as malformed.
pub const MIN_RENDER_DISTANCE: f32 = 1.0;

/// Fog control values observed while raining.
pub const RAIN_FOG_CONTROL: [f32; 2] = [0.23, 0.70];

/// Darkening applied to the base water color before tinting.
pub const WATER_DARKEN: f32 = 0.22;

/// Default strength of the water bump.
pub const DEFAULT_WATER_BUMP: f32 = 0.07;

/// Default water tint (RGB).
pub const DEFAULT_WATER_TINT: [f32; 3] = [0.52, 0.9, 0.45];

/// Default water opacity multiplier.
pub const DEFAULT_WATER_TRANSPARENCY: f32 = 0.47;

/// Default torch light intensity.
pub const DEFAULT_TORCH_INTENSITY: f32 = 1.0;
