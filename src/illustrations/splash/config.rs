use crate::assets::ViewBox;
use crate::foundation::error::{IllustraError, IllustraResult};
use crate::illustrations::sphere::DEFAULT_ACCENT_VAR;

/// Size of the depth pool objects draw their starting depth from.
pub const DEPTH_POOL_SIZE: usize = 10;

pub const DEFAULT_Z_COORDINATES: [f64; DEPTH_POOL_SIZE] =
    [-75.0, 15.0, -105.0, 75.0, -45.0, 135.0, -15.0, 105.0, 45.0, -135.0];

/// Camera distance used only while fitting the auto scale.
pub const SPLASH_REFERENCE_DISTANCE: f64 = 600.0;

/// Multiplier shrinking the fitted auto scale.
pub const SPLASH_AUTO_SCALE_FACTOR: f64 = 0.7;

pub const SPLASH_DEFAULT_VIEW_BOX: ViewBox = ViewBox::new(0.0, 0.0, 399.361, 300.39);

/// Class tag selecting the splash objects.
pub const OBJECT_CLASS: &str = "cls-1";

/// Smallest square side, CSS pixels, for each surface of a paired layout.
pub const PAIRED_MIN_SIZE: f64 = 100.0;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SplashConfig {
    /// Starting depths; padded from the defaults and truncated to ten.
    pub z_coordinates: Vec<f64>,
    pub accent_color: String,
    /// Style variable for the object fill. Required.
    pub background_color: Option<String>,
    pub line_width: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub scale: Option<f64>,
    /// Sway amplitude either side of center, degrees.
    pub animation_angle: f64,
    /// Duration of each half of the sway.
    pub animation_duration: f64,
    pub perspective_distance: f64,
    pub depth_change_easing_power: f64,
    pub depth_change_interval: f64,
    pub depth_change_duration: f64,
    /// Seed for the depth reshuffles.
    pub seed: u64,
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            z_coordinates: DEFAULT_Z_COORDINATES.to_vec(),
            accent_color: DEFAULT_ACCENT_VAR.to_owned(),
            background_color: None,
            line_width: 3.0,
            offset_x: 0.0,
            offset_y: 0.0,
            scale: None,
            animation_angle: 30.0,
            animation_duration: 8000.0,
            perspective_distance: 1000.0,
            depth_change_easing_power: 7.0,
            depth_change_interval: 1000.0,
            depth_change_duration: 3000.0,
            seed: 0x5b1a_54ed,
        }
    }
}

impl SplashConfig {
    /// The ten starting depths: configured values first, then defaults by position.
    pub fn depth_pool(&self) -> [f64; DEPTH_POOL_SIZE] {
        let mut pool = DEFAULT_Z_COORDINATES;
        for (slot, z) in pool.iter_mut().zip(&self.z_coordinates) {
            *slot = *z;
        }
        pool
    }

    pub fn background_var(&self) -> IllustraResult<&str> {
        self.background_color
            .as_deref()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| IllustraError::config("backgroundColor is required for splash"))
    }

    pub fn validate(&self) -> IllustraResult<()> {
        self.background_var()?;
        if !(self.perspective_distance.is_finite() && self.perspective_distance > 0.0) {
            return Err(IllustraError::config("perspectiveDistance must be positive"));
        }
        let pool = self.depth_pool();
        if let Some(z) = pool.iter().find(|z| !z.is_finite()) {
            return Err(IllustraError::config(format!("zCoordinates contains {z}")));
        }
        // Every depth must stay in front of the camera.
        let nearest = pool.iter().copied().fold(f64::INFINITY, f64::min);
        if self.perspective_distance + nearest <= 0.0 {
            return Err(IllustraError::config(format!(
                "depth {nearest} reaches the camera at perspectiveDistance {}",
                self.perspective_distance
            )));
        }
        if self.scale.is_none() && SPLASH_REFERENCE_DISTANCE + nearest <= 0.0 {
            return Err(IllustraError::config(format!(
                "depth {nearest} is too near to fit an automatic scale"
            )));
        }
        if let Some(scale) = self.scale
            && !(scale.is_finite() && scale > 0.0)
        {
            return Err(IllustraError::config("scale must be positive when set"));
        }
        if !(self.animation_duration.is_finite() && self.animation_duration > 0.0) {
            return Err(IllustraError::config("animationDuration must be positive"));
        }
        if !(self.depth_change_interval >= 0.0 && self.depth_change_duration >= 0.0) {
            return Err(IllustraError::config(
                "depthChangeInterval and depthChangeDuration must not be negative",
            ));
        }
        if !(self.depth_change_easing_power.is_finite() && self.depth_change_easing_power > 0.0) {
            return Err(IllustraError::config("depthChangeEasingPower must be positive"));
        }
        if self.line_width < 0.0 {
            return Err(IllustraError::config("lineWidth must not be negative"));
        }
        Ok(())
    }
}
