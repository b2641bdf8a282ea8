use crate::assets::ViewBox;
use crate::foundation::core::Rotation;
use crate::foundation::error::{IllustraError, IllustraResult};
use crate::illustrations::sphere::DEFAULT_ACCENT_VAR;

/// Number of stacked copies of the silhouette.
pub const LAYER_COUNT: usize = 5;

/// Where projected layers are centered in logical space.
pub const HOUSE_PROJECTION_CENTER: (f64, f64) = (450.0, 280.0);

/// Multiplier applied on top of the fitted auto scale.
pub const HOUSE_AUTO_SCALE_BOOST: f64 = 1.2;

/// ViewBox assumed when the shape description declares none.
pub const HOUSE_DEFAULT_VIEW_BOX: ViewBox = ViewBox::new(0.0, 0.0, 400.0, 315.0);

/// Class tag selecting filled silhouette polygons.
pub const FILL_CLASS: &str = "cls-2";
/// Class tag selecting interior stroke lines.
pub const STROKE_CLASS: &str = "cls-1";

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayeredHouseConfig {
    /// Fixed view rotation, degrees.
    pub rotation_x: f64,
    pub rotation_y: f64,
    pub rotation_z: f64,
    pub layer_spacing: f64,
    /// Logical-space offset applied after projection.
    pub offset_x: f64,
    pub offset_y: f64,
    pub accent_color: String,
    /// Style variable for the fill and backdrop. Required.
    pub background_color: Option<String>,
    pub line_width: f64,
    /// Geometry scale; computed to fit when unset.
    pub scale: Option<f64>,
    /// Peak in-plane swing per layer, degrees.
    pub animation_angle: f64,
    pub animation_duration_forward: f64,
    pub animation_pause_after_forward: f64,
    pub animation_duration_backward: f64,
    pub animation_pause_after_backward: f64,
    /// Stagger between consecutive layers.
    pub animation_delay: f64,
}

impl Default for LayeredHouseConfig {
    fn default() -> Self {
        Self {
            rotation_x: -41.0,
            rotation_y: -25.0,
            rotation_z: -26.0,
            layer_spacing: 130.0,
            offset_x: 15.0,
            offset_y: 0.0,
            accent_color: DEFAULT_ACCENT_VAR.to_owned(),
            background_color: None,
            line_width: 4.0,
            scale: None,
            animation_angle: 10.0,
            animation_duration_forward: 2000.0,
            animation_pause_after_forward: 2000.0,
            animation_duration_backward: 2000.0,
            animation_pause_after_backward: 2000.0,
            animation_delay: 200.0,
        }
    }
}

impl LayeredHouseConfig {
    /// Fixed rotation in radians.
    pub fn rotation(&self) -> Rotation {
        Rotation::from_degrees(self.rotation_x, self.rotation_y, self.rotation_z)
    }

    /// Forward, pause, backward and pause durations summed.
    pub fn cycle_duration(&self) -> f64 {
        self.animation_duration_forward
            + self.animation_pause_after_forward
            + self.animation_duration_backward
            + self.animation_pause_after_backward
    }

    pub fn background_var(&self) -> IllustraResult<&str> {
        self.background_color
            .as_deref()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| IllustraError::config("backgroundColor is required for layered-house"))
    }

    pub fn validate(&self) -> IllustraResult<()> {
        self.background_var()?;
        if let Some(scale) = self.scale
            && !(scale.is_finite() && scale > 0.0)
        {
            return Err(IllustraError::config("scale must be positive when set"));
        }
        let phases = [
            self.animation_duration_forward,
            self.animation_pause_after_forward,
            self.animation_duration_backward,
            self.animation_pause_after_backward,
        ];
        if phases.iter().any(|d| !(d.is_finite() && *d >= 0.0)) || self.cycle_duration() <= 0.0 {
            return Err(IllustraError::config(
                "animation durations must be non-negative with a positive cycle",
            ));
        }
        if !(self.animation_delay.is_finite() && self.animation_delay >= 0.0) {
            return Err(IllustraError::config("animationDelay must not be negative"));
        }
        if self.line_width < 0.0 {
            return Err(IllustraError::config("lineWidth must not be negative"));
        }
        Ok(())
    }
}
