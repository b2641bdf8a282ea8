use crate::foundation::core::{BezPath, Point, Rect, Rgba};
use crate::foundation::error::IllustraResult;
use crate::illustrations::layered_house::config::LayeredHouseConfig;
use crate::illustrations::layered_house::model::LayeredHouseModel;
use crate::illustrations::{FrameOutcome, IllustrationRenderer};
use crate::render::{CanvasRenderer, Container, Surface};

/// Alpha of the layer fills over the opaque backdrop.
pub const FILL_ALPHA: f64 = 0.7;

#[derive(Debug)]
pub struct LayeredHouseRenderer<S> {
    base: CanvasRenderer<S>,
    config: LayeredHouseConfig,
}

impl<S: Surface> LayeredHouseRenderer<S> {
    pub fn new(surface: S, container: Container, config: LayeredHouseConfig) -> Self {
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

    fn to_surface(&self, p: Point) -> Point {
        let m = self.base.mapping();
        let mapped = self.base.map_point(p.x, p.y);
        Point::new(
            mapped.x + self.config.offset_x * m.scale_x,
            mapped.y + self.config.offset_y * m.scale_y,
        )
    }
}

impl<S: Surface> IllustrationRenderer for LayeredHouseRenderer<S> {
    type Model = LayeredHouseModel;

    fn setup_canvas(&mut self) -> IllustraResult<()> {
        self.base.setup_canvas()
    }

    fn clear(&mut self) {
        self.base.clear();
    }

    fn render(&mut self, model: &LayeredHouseModel) -> FrameOutcome {
        if !model.is_loaded() {
            return FrameOutcome::NotLoaded;
        }
        let bg_var = self.config.background_color.as_deref().unwrap_or_default();
        let Some(fill) = self.base.get_color_from_css(bg_var, FILL_ALPHA, None) else {
            tracing::warn!(var = bg_var, "house background color not found, frame skipped");
            return FrameOutcome::Skipped;
        };
        let backdrop = fill.with_alpha(1.0);
        let accent = self
            .base
            .get_color_from_css(&self.config.accent_color, 1.0, None)
            .unwrap_or(Rgba::FALLBACK_ACCENT);
        let width = self.config.line_width * self.base.mapping().min_scale();
        let size = self.base.size();

        let layers = model.get_layers_for_render();
        let fills: Vec<Vec<BezPath>> = layers
            .iter()
            .map(|layer| {
                layer
                    .fills
                    .iter()
                    .filter(|poly| poly.len() >= 2)
                    .map(|poly| {
                        let mut path = BezPath::new();
                        path.move_to(self.to_surface(poly[0]));
                        for p in &poly[1..] {
                            path.line_to(self.to_surface(*p));
                        }
                        path.close_path();
                        path
                    })
                    .collect()
            })
            .collect();
        let strokes: Vec<Vec<BezPath>> = layers
            .iter()
            .map(|layer| {
                layer
                    .strokes
                    .iter()
                    .map(|l| {
                        let mut path = BezPath::new();
                        path.move_to(self.to_surface(l.p0));
                        path.line_to(self.to_surface(l.p1));
                        path
                    })
                    .collect()
            })
            .collect();

        self.base.clear();
        let surface = self.base.surface_mut();
        surface.fill_rect(Rect::new(0.0, 0.0, size, size), backdrop);
        for (layer_fills, layer_strokes) in fills.iter().zip(&strokes) {
            for path in layer_fills {
                surface.fill_path(path, fill);
                surface.stroke_path(path, width, accent);
            }
            for path in layer_strokes {
                surface.stroke_path(path, width, accent);
            }
        }
        FrameOutcome::Drawn
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/illustrations/layered_house_renderer.rs"]
mod tests;
