use std::path::Path;

use brine_core::config::WaterConfig;
use brine_shade::water_normal::NormalMap;

use crate::bake::BakeSettings;
use crate::error::BakeError;

/// Summary statistics of one bake, saved alongside the texture.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BakeReport {
    pub width: u32,
    pub height: u32,
    pub bump_type: String,
    pub scale: f32,
    pub time: f32,
    pub min_height: f32,
    pub max_height: f32,
    pub mean_height: f32,
    /// Mean angle between the (unit) normal and +Z, in degrees.
    pub mean_tilt_deg: f32,
}

impl BakeReport {
    pub fn from_map(map: &NormalMap, settings: &BakeSettings, config: &WaterConfig) -> Self {
        let count = map.samples.len().max(1) as f32;
        let mut min_height = f32::INFINITY;
        let mut max_height = f32::NEG_INFINITY;
        let mut height_sum = 0.0f32;
        let mut tilt_sum = 0.0f32;

        for s in &map.samples {
            min_height = min_height.min(s.height);
            max_height = max_height.max(s.height);
            height_sum += s.height;
            tilt_sum += s.normal.z.clamp(-1.0, 1.0).acos().to_degrees();
        }
        if map.samples.is_empty() {
            min_height = 0.0;
            max_height = 0.0;
        }

        Self {
            width: map.size.x,
            height: map.size.y,
            bump_type: format!("{:?}", config.bump_type),
            scale: settings.scale,
            time: settings.time,
            min_height,
            max_height,
            mean_height: height_sum / count,
            mean_tilt_deg: tilt_sum / count,
        }
    }
}

/// Save a report as pretty JSON.
pub fn save_report(path: &Path, report: &BakeReport) -> Result<(), BakeError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Format a report as a markdown summary table.
pub fn format_markdown(report: &BakeReport) -> String {
    let mut out = String::new();
    out.push_str("| Size | Bump | Scale | Time | Min H | Max H | Mean H | Mean tilt (deg) |\n");
    out.push_str("|------|------|-------|------|-------|-------|--------|-----------------|\n");
    out.push_str(&format!(
        "| {}x{} | {} | {:.2} | {:.2} | {:.4} | {:.4} | {:.4} | {:.2} |\n",
        report.width,
        report.height,
        report.bump_type,
        report.scale,
        report.time,
        report.min_height,
        report.max_height,
        report.mean_height,
        report.mean_tilt_deg,
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use brine_core::config::BumpType;
    use brine_shade::water_normal::bake_normal_map;
    use glam::UVec2;

    #[test]
    fn test_flat_report() {
        let config = WaterConfig {
            bump_type: BumpType::Displacement,
            bump: 0.25,
            ..Default::default()
        };
        let settings = BakeSettings::default();
        let map = bake_normal_map(UVec2::splat(4), settings.scale, settings.time, &config);
        let report = BakeReport::from_map(&map, &settings, &config);
        assert_eq!(report.width, 4);
        assert_eq!(report.bump_type, "Displacement");
        assert_eq!(report.min_height, 0.75);
        assert_eq!(report.max_height, 0.75);
        assert!((report.mean_height - 0.75).abs() < 1e-6);
        assert!(report.mean_tilt_deg.abs() < 1e-3);
    }

    #[test]
    fn test_noisy_report_bounds() {
        let config = WaterConfig {
            bump_type: BumpType::Fractal,
            bump: 0.5,
            ..Default::default()
        };
        let settings = BakeSettings::default();
        let map = bake_normal_map(UVec2::splat(16), settings.scale, 1.0, &config);
        let report = BakeReport::from_map(&map, &settings, &config);
        assert!(report.min_height <= report.mean_height);
        assert!(report.mean_height <= report.max_height);
        assert!(report.min_height >= 0.5 && report.max_height <= 1.0);
        assert!(report.mean_tilt_deg >= 0.0 && report.mean_tilt_deg < 90.0);
    }

    #[test]
    fn test_report_json_roundtrip() {
        let dir = std::env::temp_dir().join(format!("brine-report-{}", std::process::id()));
        let path = dir.join("report.json");
        let report = BakeReport {
            width: 8,
            height: 8,
            bump_type: "ValueNoise".into(),
            scale: 4.0,
            time: 0.5,
            min_height: 0.9,
            max_height: 1.0,
            mean_height: 0.95,
            mean_tilt_deg: 3.5,
        };
        save_report(&path, &report).unwrap();
        let loaded: BakeReport =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded, report);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_markdown_has_row() {
        let config = WaterConfig::default();
        let settings = BakeSettings::default();
        let map = bake_normal_map(UVec2::splat(2), 1.0, 0.0, &config);
        let md = format_markdown(&BakeReport::from_map(&map, &settings, &config));
        assert_eq!(md.lines().count(), 3);
        assert!(md.contains("| 2x2 |"));
    }
}
