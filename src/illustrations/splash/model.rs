use crate::animation::{Ease, progress};
use crate::assets::{ShapeDescription, rect_to_polygon};
use crate::foundation::core::{Depth, Point, Point3D, ProjectedPoint};
use crate::foundation::error::IllustraResult;
use crate::foundation::math::Rng64;
use crate::illustrations::splash::config::{
    OBJECT_CLASS, SPLASH_AUTO_SCALE_FACTOR, SPLASH_DEFAULT_VIEW_BOX, SPLASH_REFERENCE_DISTANCE,
    SplashConfig,
};
use crate::transform::{
    FitPadding, PerspectiveOptions, bounds_of, fit_scale, project_perspective, rotate_y,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SplashObjectKind {
    Rect,
    Polygon,
}

/// One flat shape floating at its own depth.
#[derive(Clone, Debug, PartialEq)]
pub struct SplashObject {
    pub kind: SplashObjectKind,
    /// Scaled outline, centered on the shape's viewBox.
    pub original_points: Vec<Point>,
    pub z: f64,
    pub target_z: f64,
}

/// An in-flight depth reshuffle.
#[derive(Clone, Debug, PartialEq)]
pub struct DepthChange {
    pub started_at: f64,
    pub start_z: Vec<f64>,
    pub target_z: Vec<f64>,
}

/// Object ready to draw: projected outline plus its depth.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderObject {
    pub kind: SplashObjectKind,
    pub points: Vec<ProjectedPoint>,
    pub z: f64,
}

impl Depth for RenderObject {
    fn depth(&self) -> Option<f64> {
        Some(self.z)
    }
}

/// Sway angle in radians, `elapsed` ms after the first update.
pub fn sway_angle(elapsed: f64, config: &SplashConfig) -> f64 {
    let d = config.animation_duration;
    let a = config.animation_angle;
    let t = elapsed.rem_euclid(2.0 * d);
    let degrees = if t < d {
        -a + 2.0 * a * Ease::InOutQuad.apply(t / d)
    } else {
        a - 2.0 * a * Ease::InOutQuad.apply((t - d) / d)
    };
    degrees.to_radians()
}

/// Flat shapes that sway about Y and periodically trade depths.
#[derive(Debug)]
pub struct SplashModel {
    config: SplashConfig,
    objects: Vec<SplashObject>,
    /// Depth multiset assigned at load; every reshuffle permutes it.
    assigned: Vec<f64>,
    scale: f64,
    rotation_y: f64,
    animation_start: Option<f64>,
    last_change: Option<f64>,
    change: Option<DepthChange>,
    rng: Rng64,
    loaded: bool,
}

impl SplashModel {
    pub fn new(config: SplashConfig) -> Self {
        let rng = Rng64::new(config.seed);
        Self {
            config,
            objects: Vec::new(),
            assigned: Vec::new(),
            scale: 1.0,
            rotation_y: 0.0,
            animation_start: None,
            last_change: None,
            change: None,
            rng,
            loaded: false,
        }
    }

    pub fn load_text(&mut self, text: &str) -> IllustraResult<()> {
        let shape = ShapeDescription::parse(text, SPLASH_DEFAULT_VIEW_BOX)?;
        self.load(&shape);
        Ok(())
    }

    /// Take every `cls-1` rect, then every `cls-1` polygon, and give object `i` pool depth `i`.
    pub fn load(&mut self, shape: &ShapeDescription) {
        let outlines: Vec<(SplashObjectKind, Vec<Point>)> = shape
            .rects_with_class(OBJECT_CLASS)
            .map(|r| (SplashObjectKind::Rect, rect_to_polygon(r)))
            .chain(
                shape
                    .polygons_with_class(OBJECT_CLASS)
                    .map(|p| (SplashObjectKind::Polygon, p.to_vec())),
            )
            .collect();

        let pool = self.config.depth_pool();
        let depth_of = |i: usize| pool.get(i).copied().unwrap_or(0.0);

        self.scale = self.config.scale.unwrap_or_else(|| {
            let projected = outlines.iter().enumerate().flat_map(|(i, (_, pts))| {
                let z = depth_of(i);
                pts.iter().map(move |p| {
                    project_perspective(
                        Point3D::from_planar(*p, z),
                        PerspectiveOptions {
                            center_x: 500.0,
                            center_y: 500.0,
                            distance: SPLASH_REFERENCE_DISTANCE,
                        },
                    )
                    .to_point()
                })
            });
            fit_scale(
                bounds_of(projected),
                FitPadding::ILLUSTRATION,
                SPLASH_AUTO_SCALE_FACTOR,
            )
        });

        let scale = self.scale;
        self.objects = outlines
            .into_iter()
            .enumerate()
            .map(|(i, (kind, pts))| {
                let z = depth_of(i);
                SplashObject {
                    kind,
                    original_points: pts
                        .into_iter()
                        .map(|p| Point::new(p.x * scale, p.y * scale))
                        .collect(),
                    z,
                    target_z: z,
                }
            })
            .collect();
        self.assigned = self.objects.iter().map(|o| o.z).collect();
        self.animation_start = None;
        self.last_change = None;
        self.change = None;
        self.loaded = true;
        tracing::debug!(objects = self.objects.len(), scale, "splash geometry loaded");
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Advance the sway, start a reshuffle when one is due, and interpolate depths.
    pub fn update(&mut self, now: f64) {
        if !self.loaded {
            return;
        }
        let origin = *self.animation_start.get_or_insert(now);
        self.rotation_y = sway_angle(now - origin, &self.config);

        match self.last_change {
            None => self.last_change = Some(now),
            Some(last) => {
                if now - last >= self.config.depth_change_interval && self.change.is_none() {
                    self.begin_depth_change(now);
                }
            }
        }
        self.update_depth_change(now);
    }

    fn begin_depth_change(&mut self, now: f64) {
        let mut target = self.assigned.clone();
        self.rng.shuffle(&mut target);
        for (obj, z) in self.objects.iter_mut().zip(&target) {
            obj.target_z = *z;
        }
        self.change = Some(DepthChange {
            started_at: now,
            start_z: self.objects.iter().map(|o| o.z).collect(),
            target_z: target,
        });
        self.last_change = Some(now);
        tracing::debug!(at = now, "splash depth reshuffle started");
    }

    fn update_depth_change(&mut self, now: f64) {
        let Some(change) = &self.change else {
            return;
        };
        let p = progress(now - change.started_at, self.config.depth_change_duration);
        let eased = Ease::OutPow(self.config.depth_change_easing_power).apply(p);
        let done = p >= 1.0;
        for ((obj, start), target) in self
            .objects
            .iter_mut()
            .zip(&change.start_z)
            .zip(&change.target_z)
        {
            obj.z = if done {
                *target
            } else {
                start + (target - start) * eased
            };
        }
        if done {
            self.change = None;
        }
    }

    /// Objects rotated about Y by the sway angle and projected with perspective.
    pub fn get_objects_for_render(&self) -> Vec<RenderObject> {
        let opts = PerspectiveOptions {
            center_x: 500.0,
            center_y: 500.0,
            distance: self.config.perspective_distance,
        };
        self.objects
            .iter()
            .map(|obj| RenderObject {
                kind: obj.kind,
                points: obj
                    .original_points
                    .iter()
                    .map(|p| {
                        project_perspective(
                            rotate_y(Point3D::from_planar(*p, obj.z), self.rotation_y),
                            opts,
                        )
                    })
                    .collect(),
                z: obj.z,
            })
            .collect()
    }

    pub fn objects(&self) -> &[SplashObject] {
        &self.objects
    }

    pub fn depths(&self) -> Vec<f64> {
        self.objects.iter().map(|o| o.z).collect()
    }

    /// Depth multiset every reshuffle permutes.
    pub fn assigned_depths(&self) -> &[f64] {
        &self.assigned
    }

    pub fn depth_change(&self) -> Option<&DepthChange> {
        self.change.as_ref()
    }

    pub fn rotation_y(&self) -> f64 {
        self.rotation_y
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn config(&self) -> &SplashConfig {
        &self.config
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/illustrations/splash_model.rs"]
mod tests;
