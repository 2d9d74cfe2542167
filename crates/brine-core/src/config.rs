use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_TORCH_INTENSITY, DEFAULT_WATER_BUMP, DEFAULT_WATER_TINT, DEFAULT_WATER_TRANSPARENCY,
};
use crate::error::ConfigError;

/// Noise source driving the water bump on top planes and in the height field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BumpType {
    /// Animated cheap-hash displacement map plus a travelling sine.
    #[default]
    Displacement,
    /// 2D value noise over the tiled surface, scrolled by time.
    ValueNoise,
    /// Three-octave fractal sum over (x, z, time).
    Fractal,
}

impl BumpType {
    pub const ALL: [BumpType; 3] = [
        BumpType::Displacement,
        BumpType::ValueNoise,
        BumpType::Fractal,
    ];
}

/// Water look and feature toggles, resolved once at load time and passed
/// by reference into the shader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaterConfig {
    pub bump_type: BumpType,
    /// Bump strength (0.0 = mirror-flat, 1.0 = fully perturbed).
    pub bump: f32,
    /// RGB tint applied to the water body color.
    pub tint: [f32; 3],
    /// Opacity multiplier for the water body.
    pub transparency: f32,
    pub torch_intensity: f32,
    /// Reflect clouds projected onto a virtual plane above the water.
    pub cloud_reflection: bool,
    /// Reflect the aurora. Only has an effect with `cloud_reflection`.
    pub aurora_reflection: bool,
    /// Attenuate reflection near grazing angles with a rippled threshold.
    pub reflection_mask: bool,
    /// Lower nearby water geometry by the bump amount.
    pub wave: bool,
    /// Scale the incoming alpha instead of replacing it with the vertex alpha.
    pub fog_fade: bool,
}

impl Default for WaterConfig {
    fn default() -> Self {
        Self {
            bump_type: BumpType::Displacement,
            bump: DEFAULT_WATER_BUMP,
            tint: DEFAULT_WATER_TINT,
            transparency: DEFAULT_WATER_TRANSPARENCY,
            torch_intensity: DEFAULT_TORCH_INTENSITY,
            cloud_reflection: true,
            aurora_reflection: true,
            reflection_mask: false,
            wave: false,
            fog_fade: false,
        }
    }
}

impl WaterConfig {
    /// Parse and validate a (possibly partial) RON document.
    pub fn from_ron_str(ron_str: &str) -> Result<Self, ConfigError> {
        let options = ron::Options::default();
        let config: WaterConfig = options
            .from_str(ron_str)
            .map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;

        if config.aurora_reflection && !config.cloud_reflection {
            log::warn!("aurora_reflection has no effect while cloud_reflection is disabled");
        }
        log::debug!(
            "Loaded water config: bump {:?} x{}, clouds={}, aurora={}, mask={}, wave={}, fog_fade={}",
            config.bump_type,
            config.bump,
            config.cloud_reflection,
            config.aurora_reflection,
            config.reflection_mask,
            config.wave,
            config.fog_fade,
        );
        Ok(config)
    }

    /// Reject values the shading formulas are not defined for.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_unit("bump", self.bump)?;
        check_unit("transparency", self.transparency)?;
        if !self.torch_intensity.is_finite() || self.torch_intensity < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "torch_intensity",
                value: self.torch_intensity,
                reason: "must be finite and non-negative",
            });
        }
        for c in self.tint {
            if !c.is_finite() || c < 0.0 {
                return Err(ConfigError::InvalidValue {
                    field: "tint",
                    value: c,
                    reason: "channels must be finite and non-negative",
                });
            }
        }
        Ok(())
    }

    /// Every combination of bump type and feature toggle, built on top of
    /// `self`'s look parameters.
    pub fn variants(&self) -> Vec<WaterConfig> {
        let mut out = Vec::with_capacity(BumpType::ALL.len() * 32);
        for bump_type in BumpType::ALL {
            for bits in 0u8..32 {
                out.push(WaterConfig {
                    bump_type,
                    cloud_reflection: bits & 0b00001 != 0,
                    aurora_reflection: bits & 0b00010 != 0,
                    reflection_mask: bits & 0b00100 != 0,
                    wave: bits & 0b01000 != 0,
                    fog_fade: bits & 0b10000 != 0,
                    ..self.clone()
                });
            }
        }
        out
    }
}

fn check_unit(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::InvalidValue {
            field,
            value,
            reason: "must be within [0, 1]",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(WaterConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_ron_uses_defaults() {
        let config = WaterConfig::from_ron_str("(bump_type: Fractal, wave: true)").unwrap();
        assert_eq!(config.bump_type, BumpType::Fractal);
        assert!(config.wave);
        assert_eq!(config.bump, DEFAULT_WATER_BUMP);
        assert_eq!(config.tint, DEFAULT_WATER_TINT);
    }

    #[test]
    fn test_full_ron() {
        let src = r#"(
            bump_type: ValueNoise,
            bump: 0.1,
            tint: (0.4, 0.8, 0.5),
            transparency: 0.6,
            torch_intensity: 2.0,
            cloud_reflection: false,
            aurora_reflection: false,
            reflection_mask: true,
            wave: true,
            fog_fade: true,
        )"#;
        let config = WaterConfig::from_ron_str(src).unwrap();
        assert_eq!(config.bump_type, BumpType::ValueNoise);
        assert_eq!(config.tint, [0.4, 0.8, 0.5]);
        assert!(config.reflection_mask && config.fog_fade);
        assert!(!config.cloud_reflection);
    }

    #[test]
    fn test_shipped_config_parses() {
        let config = WaterConfig::from_ron_str(include_str!("../../../config/water.ron")).unwrap();
        assert_eq!(config.bump_type, BumpType::Fractal);
        assert_eq!(config.transparency, DEFAULT_WATER_TRANSPARENCY);
    }

    #[test]
    fn test_parse_error() {
        let err = WaterConfig::from_ron_str("(bump_type: Sparkly)").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)), "got {err:?}");
    }

    #[test]
    fn test_out_of_range_rejected() {
        let err = WaterConfig::from_ron_str("(bump: 1.5)").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { field: "bump", .. }
        ));

        let config = WaterConfig {
            transparency: f32::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = WaterConfig {
            tint: [0.5, -0.1, 0.5],
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = WaterConfig {
            torch_intensity: f32::INFINITY,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_variants_are_exhaustive_and_distinct() {
        let variants = WaterConfig::default().variants();
        assert_eq!(variants.len(), 96);
        for (i, a) in variants.iter().enumerate() {
            assert!(a.validate().is_ok());
            for b in &variants[i + 1..] {
                assert_ne!(a, b, "duplicate variant {a:?}");
            }
        }
    }
}
