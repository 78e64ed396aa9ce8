use std::path::Path;

use crate::color::palette::Palette;
use crate::foundation::core::Rgb8;
use crate::foundation::error::{BackdropError, BackdropResult};

/// Scroll-progress window over which a section's color blend happens.
///
/// Below `start` the blend factor is 0, at or above `end` it is 1, linear in between.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DeadZone {
    /// Section progress where blending begins.
    pub start: f64,
    /// Section progress where blending completes.
    pub end: f64,
}

impl Default for DeadZone {
    fn default() -> Self {
        Self {
            start: 0.60,
            end: 0.75,
        }
    }
}

impl DeadZone {
    /// Map section progress to an interpolation factor in `[0, 1]`.
    pub fn factor(self, progress: f64) -> f64 {
        if !progress.is_finite() || progress < self.start {
            0.0
        } else if progress >= self.end {
            1.0
        } else {
            (progress - self.start) / (self.end - self.start)
        }
    }
}

/// Inclusive-exclusive size range for polygon circumradius.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SizeRange {
    /// Smallest radius in pixels.
    pub min: f64,
    /// Largest radius in pixels.
    pub max: f64,
}

impl Default for SizeRange {
    fn default() -> Self {
        Self {
            min: 800.0,
            max: 1000.0,
        }
    }
}

/// Randomization bounds for scene seeding.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct KinematicsConfig {
    /// Per-axis speed bound, px/frame; velocities draw from `[-max, max)`.
    pub max_speed_px: f64,
    /// Spin bound, rad/frame.
    pub max_spin_rad: f64,
    /// Circumradius range.
    pub size_px: SizeRange,
    /// Width of each edge cluster as a fraction of the canvas (`0.3` = outer 30% per side).
    pub edge_band: f64,
}

impl Default for KinematicsConfig {
    fn default() -> Self {
        Self {
            max_speed_px: 0.15,
            max_spin_rad: 0.0005,
            size_px: SizeRange::default(),
            edge_band: 0.3,
        }
    }
}

/// Full renderer configuration.
///
/// Every tuning constant lives here; `Default` reproduces the original site's look.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BackdropConfig {
    /// Number of polygons, fixed for the renderer's lifetime.
    pub polygon_count: usize,
    /// Distance beyond each canvas edge where velocity reverses.
    pub reflect_margin_px: f64,
    /// Color blend window within each section.
    pub dead_zone: DeadZone,
    /// Seeding bounds.
    pub kinematics: KinematicsConfig,
    /// Per-shape fill opacity.
    pub shape_alpha: f32,
    /// Background fill in light mode.
    pub light_background: Rgb8,
    /// Background fill in dark mode.
    pub dark_background: Rgb8,
    /// Section palette.
    pub palette: Palette,
    /// Element ids whose page offsets bound sections 1, 2 and 3.
    pub anchors: [String; 3],
    /// RNG seed; `None` seeds from the clock.
    pub seed: Option<u64>,
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            polygon_count: 6,
            reflect_margin_px: 200.0,
            dead_zone: DeadZone::default(),
            kinematics: KinematicsConfig::default(),
            shape_alpha: 0.1,
            light_background: Rgb8::WHITE,
            dark_background: Rgb8::new(12, 12, 12),
            palette: Palette::default(),
            anchors: [
                "cs-projects".to_owned(),
                "music".to_owned(),
                "max".to_owned(),
            ],
            seed: None,
        }
    }
}

impl BackdropConfig {
    /// Parse config JSON; missing fields take their defaults.
    pub fn from_json_str(s: &str) -> BackdropResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read and parse a config JSON file.
    pub fn from_json_path(path: &Path) -> BackdropResult<Self> {
        let s = std::fs::read_to_string(path).map_err(|e| {
            BackdropError::Other(anyhow::anyhow!("read config '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&s)
    }

    /// Check ranges and invariants.
    pub fn validate(&self) -> BackdropResult<()> {
        if self.polygon_count == 0 {
            return Err(BackdropError::validation("polygon_count must be >= 1"));
        }
        if !self.reflect_margin_px.is_finite() || self.reflect_margin_px < 0.0 {
            return Err(BackdropError::validation(
                "reflect_margin_px must be finite and >= 0",
            ));
        }

        let dz = self.dead_zone;
        if !(0.0 <= dz.start && dz.start < dz.end && dz.end <= 1.0) {
            return Err(BackdropError::validation(
                "dead_zone must satisfy 0 <= start < end <= 1",
            ));
        }

        let k = self.kinematics;
        for (name, v) in [
            ("max_speed_px", k.max_speed_px),
            ("max_spin_rad", k.max_spin_rad),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(BackdropError::validation(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        if !(k.size_px.min.is_finite() && k.size_px.max.is_finite())
            || k.size_px.min <= 0.0
            || k.size_px.min > k.size_px.max
        {
            return Err(BackdropError::validation(
                "size_px must satisfy 0 < min <= max",
            ));
        }
        if !(k.edge_band > 0.0 && k.edge_band <= 0.5) {
            return Err(BackdropError::validation("edge_band must be in (0, 0.5]"));
        }

        if !(0.0..=1.0).contains(&self.shape_alpha) {
            return Err(BackdropError::validation("shape_alpha must be in [0, 1]"));
        }

        for (i, id) in self.anchors.iter().enumerate() {
            if id.trim().is_empty() {
                return Err(BackdropError::validation(format!(
                    "anchors[{i}] must not be empty"
                )));
            }
            if self.anchors[..i].contains(id) {
                return Err(BackdropError::validation(format!(
                    "anchor id '{id}' is listed twice"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
