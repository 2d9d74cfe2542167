pub mod detection;
pub mod noise;
pub mod sky;
pub mod water;
pub mod water_normal;

pub use detection::{classify_environment, detect, rain_factor, weather_blend};
pub use sky::{GradientSky, SkyModel, SkyPalette, SkyQuery};
pub use water::{fresnel_schlick, WaterFragment, WaterPlane, WaterShade, WaterShader};
pub use water_normal::{bake_normal_map, normal_map, water_height, NormalMap, NormalSample};
