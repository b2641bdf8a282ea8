use crate::foundation::core::{BezPath, Point, Rgba};
use crate::foundation::error::IllustraResult;
use crate::foundation::math::lerp;
use crate::illustrations::sphere::config::SphereConfig;
use crate::illustrations::sphere::model::{SphereModel, SpherePoint};
use crate::illustrations::{FrameOutcome, IllustrationRenderer};
use crate::render::{CanvasRenderer, Container, Surface, sort_by_depth};
use crate::transform::{ProjectionCenter, project_orthogonal};

/// Draws radial lines in the text color and their tip points in the accent color.
#[derive(Debug)]
pub struct SphereRenderer<S> {
    base: CanvasRenderer<S>,
    config: SphereConfig,
}

// One point after projection, ready for both passes.
struct Placed {
    center: Point,
    tip: Point,
    depth_factor: f64,
    opacity: f64,
    length: f64,
}

impl<S: Surface> SphereRenderer<S> {
    pub fn new(surface: S, container: Container, config: SphereConfig) -> Self {
        Self {
            base: CanvasRenderer::new(surface, container),
            config,
        }
    }

    pub fn base(&self) -> &CanvasRenderer<S> {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut CanvasRenderer<S> {
        &mut self.base
    }

    /// Accent from the configured style variable, or the fixed fallback.
    pub fn accent_color(&self) -> Rgba {
        self.base
            .get_color_from_css(&self.config.accent_color, 1.0, None)
            .unwrap_or(Rgba::FALLBACK_ACCENT)
    }

    fn place(&self, p: &SpherePoint, radius: f64) -> Placed {
        let projected = project_orthogonal(p.point, ProjectionCenter::default());
        Placed {
            center: self.base.map_point(500.0, 500.0),
            tip: self.base.map_point(projected.x, projected.y),
            depth_factor: (p.point.z + radius) / (2.0 * radius),
            opacity: p.line.opacity,
            length: p.line.length_progress,
        }
    }
}

fn along(center: Point, tip: Point, t: f64) -> Point {
    Point::new(lerp(center.x, tip.x, t), lerp(center.y, tip.y, t))
}

impl<S: Surface> IllustrationRenderer for SphereRenderer<S> {
    type Model = SphereModel;

    fn setup_canvas(&mut self) -> IllustraResult<()> {
        self.base.setup_canvas()
    }

    fn clear(&mut self) {
        self.base.clear();
    }

    fn render(&mut self, model: &SphereModel) -> FrameOutcome {
        if !model.is_initialized() {
            return FrameOutcome::NotLoaded;
        }
        let radius = model.config().radius;
        let placed: Vec<Placed> = sort_by_depth(model.get_points_for_render())
            .iter()
            .map(|p| self.place(p, radius))
            .collect();

        let text = self.base.text_color(None);
        let accent = self.accent_color();
        let s = self.base.mapping().min_scale();
        let line_width = self.config.line_width * s;

        self.base.clear();
        let surface = self.base.surface_mut();

        for p in &placed {
            let depth_opacity = 0.4 + 0.6 * p.depth_factor;
            let mut path = BezPath::new();
            path.move_to(along(p.center, p.tip, 0.5));
            path.line_to(along(p.center, p.tip, p.length));
            surface.stroke_path(&path, line_width, text.fade(p.opacity * depth_opacity));
        }

        for p in &placed {
            let depth_opacity = 0.4 + 0.6 * p.depth_factor;
            let r = self.config.point_radius * s + (p.depth_factor - 0.5) * 2.0 * s;
            if r <= 0.0 {
                continue;
            }
            let alpha = p.opacity * ((p.length - 0.5) * 2.0).max(0.0) * depth_opacity;
            surface.fill_circle(along(p.center, p.tip, p.length), r, accent.fade(alpha));
        }

        FrameOutcome::Drawn
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/illustrations/sphere_renderer.rs"]
mod tests;
