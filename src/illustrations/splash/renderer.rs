use crate::foundation::core::{BezPath, Point, Rgba};
use crate::foundation::error::IllustraResult;
use crate::illustrations::splash::config::{PAIRED_MIN_SIZE, SplashConfig};
use crate::illustrations::splash::model::{RenderObject, SplashModel};
use crate::illustrations::{FrameOutcome, IllustrationRenderer};
use crate::render::{CanvasRenderer, Container, FrameRGBA, Surface, sort_by_depth};

/// Alpha of the object fills.
pub const FILL_ALPHA: f64 = 0.7;

/// One surface plus the container it is laid out in.
#[derive(Debug)]
pub struct SurfaceSlot<S> {
    pub surface: S,
    pub container: Container,
}

impl<S> SurfaceSlot<S> {
    pub fn new(surface: S, container: Container) -> Self {
        Self { surface, container }
    }
}

/// Where splash objects are drawn.
///
/// `Paired` splits the scene around something drawn between the two surfaces: objects at
/// `z >= 0` go to the primary (behind), the rest to the secondary (in front).
#[derive(Debug)]
pub enum SurfaceLayout<S> {
    Single(SurfaceSlot<S>),
    Paired {
        primary: SurfaceSlot<S>,
        secondary: SurfaceSlot<S>,
    },
}

#[derive(Debug)]
enum Targets<S> {
    Single(CanvasRenderer<S>),
    Paired {
        primary: CanvasRenderer<S>,
        secondary: CanvasRenderer<S>,
    },
}

#[derive(Debug)]
pub struct SplashRenderer<S> {
    targets: Targets<S>,
    config: SplashConfig,
}

impl<S: Surface> SplashRenderer<S> {
    pub fn new(layout: SurfaceLayout<S>, config: SplashConfig) -> Self {
        let targets = match layout {
            SurfaceLayout::Single(slot) => {
                Targets::Single(CanvasRenderer::new(slot.surface, slot.container))
            }
            SurfaceLayout::Paired { primary, secondary } => Targets::Paired {
                primary: CanvasRenderer::new(primary.surface, primary.container),
                secondary: CanvasRenderer::new(secondary.surface, secondary.container),
            },
        };
        Self { targets, config }
    }

    pub fn is_paired(&self) -> bool {
        matches!(self.targets, Targets::Paired { .. })
    }

    /// The surface colors and scale are taken from.
    pub fn primary(&self) -> &CanvasRenderer<S> {
        match &self.targets {
            Targets::Single(r) => r,
            Targets::Paired { primary, .. } => primary,
        }
    }

    pub fn secondary(&self) -> Option<&CanvasRenderer<S>> {
        match &self.targets {
            Targets::Single(_) => None,
            Targets::Paired { secondary, .. } => Some(secondary),
        }
    }

    /// Replace the containers; `secondary` is ignored for a single layout.
    pub fn set_containers(&mut self, primary: Container, secondary: Option<Container>) {
        match &mut self.targets {
            Targets::Single(r) => r.set_container(primary),
            Targets::Paired {
                primary: p,
                secondary: s,
            } => {
                p.set_container(primary);
                if let Some(c) = secondary {
                    s.set_container(c);
                }
            }
        }
    }

    /// Rasterize every surface, primary first.
    pub fn read_frames(&mut self) -> IllustraResult<Vec<FrameRGBA>> {
        let mut frames = Vec::new();
        match &mut self.targets {
            Targets::Single(r) => frames.extend(r.surface_mut().read_pixels()?),
            Targets::Paired { primary, secondary } => {
                frames.extend(primary.surface_mut().read_pixels()?);
                frames.extend(secondary.surface_mut().read_pixels()?);
            }
        }
        Ok(frames)
    }

    fn colors(&self) -> Option<(Rgba, Rgba)> {
        let base = self.primary();
        let bg_var = self.config.background_color.as_deref().unwrap_or_default();
        let fill = base.get_color_from_css(bg_var, FILL_ALPHA, None)?;
        let accent = base
            .get_color_from_css(&self.config.accent_color, 1.0, None)
            .unwrap_or(Rgba::FALLBACK_ACCENT);
        Some((fill, accent))
    }
}

/// Draw `objects` back to front onto `target`, skipping outlines with fewer than two points.
fn draw_objects<S: Surface>(
    target: &mut CanvasRenderer<S>,
    objects: Vec<&RenderObject>,
    config: &SplashConfig,
    fill: Rgba,
    accent: Rgba,
) {
    let m = target.mapping();
    let width = config.line_width * m.min_scale();
    let (dx, dy) = (config.offset_x * m.scale_x, config.offset_y * m.scale_y);
    let paths: Vec<BezPath> = sort_by_depth(objects)
        .into_iter()
        .filter(|obj| obj.points.len() >= 2)
        .map(|obj| {
            let mut path = BezPath::new();
            for (i, p) in obj.points.iter().enumerate() {
                let q = target.map_point(p.x, p.y);
                let q = Point::new(q.x + dx, q.y + dy);
                if i == 0 {
                    path.move_to(q);
                } else {
                    path.line_to(q);
                }
            }
            path.close_path();
            path
        })
        .collect();

    target.clear();
    let surface = target.surface_mut();
    for path in &paths {
        surface.fill_path(path, fill);
        surface.stroke_path(path, width, accent);
    }
}

impl<S: Surface> IllustrationRenderer for SplashRenderer<S> {
    type Model = SplashModel;

    /// Single: square surface from the container. Paired: both at least 100 px, sharing
    /// the primary's logical scale.
    fn setup_canvas(&mut self) -> IllustraResult<()> {
        match &mut self.targets {
            Targets::Single(r) => r.setup_canvas(),
            Targets::Paired { primary, secondary } => {
                primary.setup_canvas_with_min(PAIRED_MIN_SIZE)?;
                secondary.setup_canvas_with_min(PAIRED_MIN_SIZE)?;
                secondary.set_mapping(primary.mapping());
                Ok(())
            }
        }
    }

    fn clear(&mut self) {
        match &mut self.targets {
            Targets::Single(r) => r.clear(),
            Targets::Paired { primary, secondary } => {
                primary.clear();
                secondary.clear();
            }
        }
    }

    fn render(&mut self, model: &SplashModel) -> FrameOutcome {
        if !model.is_loaded() {
            return FrameOutcome::NotLoaded;
        }
        let Some((fill, accent)) = self.colors() else {
            tracing::warn!(
                var = self.config.background_color.as_deref().unwrap_or_default(),
                "splash background color not found, frame skipped"
            );
            return FrameOutcome::Skipped;
        };
        let objects = model.get_objects_for_render();
        let config = &self.config;
        match &mut self.targets {
            Targets::Single(r) => draw_objects(r, objects.iter().collect(), config, fill, accent),
            Targets::Paired { primary, secondary } => {
                let (behind, front): (Vec<&RenderObject>, Vec<&RenderObject>) =
                    objects.iter().partition(|o| o.z >= 0.0);
                draw_objects(primary, behind, config, fill, accent);
                draw_objects(secondary, front, config, fill, accent);
            }
        }
        FrameOutcome::Drawn
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/illustrations/splash_renderer.rs"]
mod tests;
