pub mod config;
pub mod constants;
pub mod error;
pub mod math;
pub mod types;

pub use config::{BumpType, WaterConfig};
pub use error::ConfigError;
pub use types::{Environment, EnvironmentFlags, FogSignal, WeatherBlend};
