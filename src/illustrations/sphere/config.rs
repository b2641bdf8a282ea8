use crate::foundation::core::Rotation;
use crate::foundation::error::{IllustraError, IllustraResult};

/// Style variable holding the site accent as an `"r, g, b"` triple.
pub const DEFAULT_ACCENT_VAR: &str = "--ids__accent-RGB";

/// Line population control, all times in milliseconds.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LineConfig {
    pub min_lines: usize,
    pub max_lines: usize,
    pub fade_duration: f64,
    pub add_interval_min: f64,
    pub add_interval_max: f64,
    pub remove_interval_min: f64,
    pub remove_interval_max: f64,
}

impl Default for LineConfig {
    fn default() -> Self {
        Self {
            min_lines: 30,
            max_lines: 60,
            fade_duration: 250.0,
            add_interval_min: 200.0,
            add_interval_max: 400.0,
            remove_interval_min: 300.0,
            remove_interval_max: 500.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SphereConfig {
    /// Sphere radius in logical units.
    pub radius: f64,
    /// Points seeded at start.
    pub num_points: usize,
    /// Radians added per frame on each axis.
    pub rotation_speed: Rotation,
    pub line_config: LineConfig,
    pub line_width: f64,
    pub point_radius: f64,
    pub accent_color: String,
    /// Seed for point sampling and interval jitter.
    pub seed: u64,
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            radius: 400.0,
            num_points: 45,
            rotation_speed: Rotation::new(0.002, 0.003, 0.001),
            line_config: LineConfig::default(),
            line_width: 2.0,
            point_radius: 4.0,
            accent_color: DEFAULT_ACCENT_VAR.to_owned(),
            seed: 0x5eed_5fe1,
        }
    }
}

impl SphereConfig {
    pub fn validate(&self) -> IllustraResult<()> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(IllustraError::config("sphere radius must be positive"));
        }
        let lc = &self.line_config;
        if lc.min_lines > lc.max_lines {
            return Err(IllustraError::config(format!(
                "minLines ({}) exceeds maxLines ({})",
                lc.min_lines, lc.max_lines
            )));
        }
        if !(lc.fade_duration.is_finite() && lc.fade_duration > 0.0) {
            return Err(IllustraError::config("fadeDuration must be positive"));
        }
        check_interval("add", lc.add_interval_min, lc.add_interval_max)?;
        check_interval("remove", lc.remove_interval_min, lc.remove_interval_max)?;
        if self.line_width < 0.0 || self.point_radius < 0.0 {
            return Err(IllustraError::config(
                "lineWidth and pointRadius must not be negative",
            ));
        }
        Ok(())
    }
}

fn check_interval(name: &str, min: f64, max: f64) -> IllustraResult<()> {
    if !(min.is_finite() && max.is_finite() && min > 0.0 && min <= max) {
        return Err(IllustraError::config(format!(
            "{name} interval must satisfy 0 < min <= max (got {min}..{max})"
        )));
    }
    Ok(())
}
