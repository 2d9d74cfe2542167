use glam::{Vec2, Vec3};

/// Ambient fog parameters supplied once per frame by the host renderer.
///
/// `control.x`/`control.y` are the fog start/end the host emits, `control.z`
/// is the render distance in blocks (chunks * 16). Values are raw; the
/// classifier thresholds are tuned to them as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FogSignal {
    pub color: Vec3,
    pub control: Vec3,
}

impl FogSignal {
    pub fn new(color: Vec3, control: Vec2, render_distance: f32) -> Self {
        Self {
            color,
            control: control.extend(render_distance),
        }
    }
}

/// Which world region the fog signal looks like.
///
/// Each flag is evaluated independently, so more than one can be set.
/// Use [`EnvironmentFlags::resolve`] to pick a single environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnvironmentFlags {
    pub end: bool,
    pub nether: bool,
    pub underwater: bool,
}

/// A single resolved environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Environment {
    End,
    Nether,
    Underwater,
    #[default]
    Overworld,
}

impl EnvironmentFlags {
    /// Precedence: end, nether, underwater, overworld.
    pub fn resolve(self) -> Environment {
        if self.end {
            Environment::End
        } else if self.nether {
            Environment::Nether
        } else if self.underwater {
            Environment::Underwater
        } else {
            Environment::Overworld
        }
    }
}

impl From<Environment> for EnvironmentFlags {
    fn from(env: Environment) -> Self {
        Self {
            end: env == Environment::End,
            nether: env == Environment::Nether,
            underwater: env == Environment::Underwater,
        }
    }
}

/// Soft lighting mood derived from the fog signal. Components are roughly
/// in [0, 1] but not hard-clamped.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WeatherBlend {
    pub dusk: f32,
    pub day: f32,
    pub night: f32,
    pub rain: f32,
}
