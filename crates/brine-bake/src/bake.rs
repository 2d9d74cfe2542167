use std::path::Path;

use brine_core::config::{BumpType, WaterConfig};
use brine_core::math::saturate;
use brine_shade::water_normal::{bake_normal_map, NormalMap, NormalSample};
use glam::{UVec2, Vec3};

use crate::error::BakeError;

/// Largest supported texture edge in texels.
pub const MAX_SIZE: u32 = 4096;

/// RGBA8 texel (4 bytes): xyz = normal mapped from [-1, 1] to [0, 255],
/// a = height.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct NormalTexel {
    pub rgba: [u8; 4],
}

impl NormalTexel {
    pub fn pack(sample: &NormalSample) -> Self {
        let n = (sample.normal * 0.5 + Vec3::splat(0.5)).clamp(Vec3::ZERO, Vec3::ONE);
        let to_u8 = |v: f32| (v * 255.0).round() as u8;
        Self {
            rgba: [
                to_u8(n.x),
                to_u8(n.y),
                to_u8(n.z),
                to_u8(saturate(sample.height)),
            ],
        }
    }
}

/// Parameters of a single bake.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BakeSettings {
    /// Square texture edge in texels.
    pub size: u32,
    /// Gradient scale applied before normalization.
    pub scale: f32,
    /// Animation time to freeze the surface at.
    pub time: f32,
}

impl Default for BakeSettings {
    fn default() -> Self {
        Self {
            size: 256,
            scale: 4.0,
            time: 0.0,
        }
    }
}

impl BakeSettings {
    pub fn validate(&self) -> Result<(), BakeError> {
        if self.size == 0 || self.size > MAX_SIZE {
            return Err(BakeError::InvalidSize(self.size));
        }
        if !self.scale.is_finite() || !self.time.is_finite() {
            return Err(BakeError::Argument(format!(
                "scale and time must be finite (scale={}, time={})",
                self.scale, self.time
            )));
        }
        Ok(())
    }
}

/// Bake a tile and pack it for upload.
pub fn bake(
    settings: &BakeSettings,
    config: &WaterConfig,
) -> Result<(NormalMap, Vec<NormalTexel>), BakeError> {
    settings.validate()?;
    if config.bump_type == BumpType::Displacement {
        log::warn!("Displacement bump has no height field; the baked map is flat");
    }
    log::info!(
        "Baking {0}x{0} normal map ({1:?}, scale {2}, t={3})",
        settings.size,
        config.bump_type,
        settings.scale,
        settings.time
    );
    let map = bake_normal_map(
        UVec2::splat(settings.size),
        settings.scale,
        settings.time,
        config,
    );
    let texels = map.samples.iter().map(NormalTexel::pack).collect();
    Ok((map, texels))
}

/// Write texels as raw row-major RGBA8.
pub fn write_texels(path: &Path, texels: &[NormalTexel]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytemuck::cast_slice::<NormalTexel, u8>(texels))
}
