use crate::animation::Ease;
use crate::assets::ShapeDescription;
use crate::foundation::core::{Depth, Line, Point, Point3D};
use crate::foundation::error::IllustraResult;
use crate::illustrations::layered_house::config::{
    FILL_CLASS, HOUSE_AUTO_SCALE_BOOST, HOUSE_DEFAULT_VIEW_BOX, HOUSE_PROJECTION_CENTER,
    LAYER_COUNT, LayeredHouseConfig, STROKE_CLASS,
};
use crate::transform::{
    FitPadding, ProjectionCenter, bounds_of, fit_scale, project_orthogonal, rotate_about,
    rotate_point,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LayerPhase {
    Forward,
    Pause1,
    Backward,
    Pause2,
}

/// Swing state of one layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerAnimation {
    pub phase: LayerPhase,
    /// Delay before this layer starts swinging, ms.
    pub start_offset: f64,
    /// Current in-plane angle, degrees.
    pub current_angle: f64,
    /// Completed full cycles.
    pub cycle: u64,
}

/// Silhouette after scaling, in the shape's centered coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct HouseGeometry {
    pub fills: Vec<Vec<Point>>,
    pub strokes: Vec<Line>,
    pub scale: f64,
    /// Mean of every fill point and stroke endpoint.
    pub center: Point,
}

/// One projected copy of the silhouette.
#[derive(Clone, Debug, PartialEq)]
pub struct HouseLayer {
    pub index: usize,
    /// Depth before the view rotation, `index * layer_spacing`.
    pub z: f64,
    pub fills: Vec<Vec<Point>>,
    pub strokes: Vec<Line>,
}

impl Depth for HouseLayer {
    fn depth(&self) -> Option<f64> {
        Some(self.z)
    }
}

/// Phase, angle and cycle for a layer `elapsed` ms into its own timeline.
pub fn layer_pose(elapsed: f64, config: &LayeredHouseConfig) -> (LayerPhase, f64, u64) {
    if elapsed < 0.0 {
        return (LayerPhase::Forward, 0.0, 0);
    }
    let cycle_length = config.cycle_duration();
    let cycle = (elapsed / cycle_length).floor() as u64;
    let t = elapsed % cycle_length;
    let a = config.animation_angle;
    let fwd = config.animation_duration_forward;
    let pause1 = fwd + config.animation_pause_after_forward;
    let back = pause1 + config.animation_duration_backward;

    let (phase, angle) = if t < fwd {
        (LayerPhase::Forward, a * Ease::InOutQuad.apply(t / fwd))
    } else if t < pause1 {
        (LayerPhase::Pause1, a)
    } else if t < back {
        let eased = Ease::InOutQuad.apply((t - pause1) / config.animation_duration_backward);
        (LayerPhase::Backward, a * (1.0 - eased))
    } else {
        (LayerPhase::Pause2, 0.0)
    };
    (phase, angle, cycle)
}

/// Five stacked silhouettes swinging in their own plane, one after another.
#[derive(Debug)]
pub struct LayeredHouseModel {
    config: LayeredHouseConfig,
    geometry: Option<HouseGeometry>,
    animations: Vec<LayerAnimation>,
    animation_start: Option<f64>,
    layers: Vec<HouseLayer>,
}

impl LayeredHouseModel {
    pub fn new(config: LayeredHouseConfig) -> Self {
        Self {
            config,
            geometry: None,
            animations: Vec::new(),
            animation_start: None,
            layers: Vec::new(),
        }
    }

    /// Parse `text` with the house's default viewBox and load it.
    pub fn load_text(&mut self, text: &str) -> IllustraResult<()> {
        let shape = ShapeDescription::parse(text, HOUSE_DEFAULT_VIEW_BOX)?;
        self.load(&shape);
        Ok(())
    }

    /// Take `cls-2` polygons as fills and `cls-1` lines as strokes, then scale and center.
    pub fn load(&mut self, shape: &ShapeDescription) {
        let mut fills: Vec<Vec<Point>> = shape
            .polygons_with_class(FILL_CLASS)
            .map(<[Point]>::to_vec)
            .collect();
        let mut strokes: Vec<Line> = shape.lines_with_class(STROKE_CLASS).collect();

        let scale = self
            .config
            .scale
            .unwrap_or_else(|| auto_scale(&fills, &strokes, &self.config));
        for p in fills.iter_mut().flatten() {
            *p = Point::new(p.x * scale, p.y * scale);
        }
        for l in &mut strokes {
            *l = Line::new((l.p0.x * scale, l.p0.y * scale), (l.p1.x * scale, l.p1.y * scale));
        }
        let center = centroid(&fills, &strokes);
        tracing::debug!(
            fills = fills.len(),
            strokes = strokes.len(),
            scale,
            "house geometry loaded"
        );

        self.geometry = Some(HouseGeometry {
            fills,
            strokes,
            scale,
            center,
        });
        self.initialize_animations();
        self.create_layers();
    }

    pub fn is_loaded(&self) -> bool {
        self.geometry.is_some()
    }

    fn initialize_animations(&mut self) {
        let delay = self.config.animation_delay;
        self.animations = (0..LAYER_COUNT)
            .map(|i| LayerAnimation {
                phase: LayerPhase::Forward,
                start_offset: i as f64 * delay,
                current_angle: 0.0,
                cycle: 0,
            })
            .collect();
        self.animation_start = None;
    }

    /// Advance every layer's swing to `now`. The first call latches the timeline origin.
    pub fn update_animations(&mut self, now: f64) {
        if self.geometry.is_none() {
            return;
        }
        let origin = *self.animation_start.get_or_insert(now);
        for anim in &mut self.animations {
            let (phase, angle, cycle) = layer_pose(now - origin - anim.start_offset, &self.config);
            anim.phase = phase;
            anim.current_angle = angle;
            anim.cycle = cycle;
        }
        self.create_layers();
    }

    /// Project every layer with its current swing angle.
    pub fn create_layers(&mut self) {
        let Some(geometry) = &self.geometry else {
            return;
        };
        let rotation = self.config.rotation();
        let (cx, cy) = HOUSE_PROJECTION_CENTER;
        let center = ProjectionCenter::new(cx, cy);

        self.layers = (0..LAYER_COUNT)
            .map(|i| {
                let z = i as f64 * self.config.layer_spacing;
                let angle = self
                    .animations
                    .get(i)
                    .map_or(0.0, |a| a.current_angle)
                    .to_radians();
                let place = |p: Point| {
                    let swung = rotate_about(p, geometry.center, angle);
                    let rotated = rotate_point(Point3D::from_planar(swung, z), rotation);
                    project_orthogonal(rotated, center).to_point()
                };
                HouseLayer {
                    index: i,
                    z,
                    fills: geometry
                        .fills
                        .iter()
                        .map(|poly| poly.iter().copied().map(place).collect())
                        .collect(),
                    strokes: geometry
                        .strokes
                        .iter()
                        .map(|l| Line::new(place(l.p0), place(l.p1)))
                        .collect(),
                }
            })
            .collect();
    }

    /// Layers ordered back to front.
    pub fn get_layers_for_render(&self) -> Vec<&HouseLayer> {
        crate::render::sort_by_depth(self.layers.iter())
    }

    /// Replace the fixed view rotation (degrees) and spacing, then rebuild the layers.
    pub fn set_rotation(&mut self, x: f64, y: f64, z: f64, layer_spacing: f64) {
        self.config.rotation_x = x;
        self.config.rotation_y = y;
        self.config.rotation_z = z;
        self.config.layer_spacing = layer_spacing;
        self.create_layers();
    }

    pub fn animations(&self) -> &[LayerAnimation] {
        &self.animations
    }

    pub fn geometry(&self) -> Option<&HouseGeometry> {
        self.geometry.as_ref()
    }

    pub fn layers(&self) -> &[HouseLayer] {
        &self.layers
    }

    pub fn config(&self) -> &LayeredHouseConfig {
        &self.config
    }
}

/// Scale fitting all five layers, projected with the configured rotation, into the padded box.
pub fn auto_scale(fills: &[Vec<Point>], strokes: &[Line], config: &LayeredHouseConfig) -> f64 {
    let rotation = config.rotation();
    let (cx, cy) = HOUSE_PROJECTION_CENTER;
    let center = ProjectionCenter::new(cx, cy);
    let planar: Vec<Point> = fills
        .iter()
        .flatten()
        .copied()
        .chain(strokes.iter().flat_map(|l| [l.p0, l.p1]))
        .collect();
    let projected = (0..LAYER_COUNT).flat_map(|i| {
        let z = i as f64 * config.layer_spacing;
        planar.iter().map(move |p| {
            project_orthogonal(rotate_point(Point3D::from_planar(*p, z), rotation), center)
                .to_point()
        })
    });
    fit_scale(
        bounds_of(projected),
        FitPadding::ILLUSTRATION,
        HOUSE_AUTO_SCALE_BOOST,
    )
}

fn centroid(fills: &[Vec<Point>], strokes: &[Line]) -> Point {
    let (mut sx, mut sy, mut n) = (0.0, 0.0, 0usize);
    let points = fills
        .iter()
        .flatten()
        .copied()
        .chain(strokes.iter().flat_map(|l| [l.p0, l.p1]));
    for p in points {
        sx += p.x;
        sy += p.y;
        n += 1;
    }
    if n == 0 {
        Point::ZERO
    } else {
        Point::new(sx / n as f64, sy / n as f64)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/illustrations/layered_house_model.rs"]
mod tests;
