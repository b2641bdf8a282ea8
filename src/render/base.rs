use crate::assets::StyleVars;
use crate::foundation::core::{Affine, Depth, Point, Rgba};
use crate::foundation::error::IllustraResult;
use crate::render::surface::{Surface, SurfaceDesc};
use crate::transform::LOGICAL_SIZE;

/// The on-screen box an illustration is laid out in.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Container {
    /// CSS pixels.
    pub width: f64,
    /// CSS pixels.
    pub height: f64,
    pub device_pixel_ratio: f64,
    /// Style properties visible to the container.
    pub styles: StyleVars,
}

impl Default for Container {
    fn default() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            device_pixel_ratio: 1.0,
            styles: StyleVars::default(),
        }
    }
}

impl Container {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_dpr(mut self, dpr: f64) -> Self {
        self.device_pixel_ratio = dpr;
        self
    }

    pub fn with_styles(mut self, styles: StyleVars) -> Self {
        self.styles = styles;
        self
    }

    /// Side of the square surface that fits this box.
    pub fn square_size(&self) -> f64 {
        self.width.min(self.height)
    }

    fn dpr(&self) -> f64 {
        if self.device_pixel_ratio.is_finite() && self.device_pixel_ratio > 0.0 {
            self.device_pixel_ratio
        } else {
            1.0
        }
    }
}

/// Mapping from the 1000x1000 logical space onto a surface, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LogicalMapping {
    pub scale_x: f64,
    pub scale_y: f64,
    pub center_x: f64,
    pub center_y: f64,
}

impl LogicalMapping {
    pub fn for_size(size: f64) -> Self {
        Self {
            scale_x: size / LOGICAL_SIZE,
            scale_y: size / LOGICAL_SIZE,
            center_x: size / 2.0,
            center_y: size / 2.0,
        }
    }

    pub fn min_scale(&self) -> f64 {
        self.scale_x.min(self.scale_y)
    }
}

/// Shared surface plumbing composed into every illustration renderer.
///
/// Owns the drawing surface and the container it is laid out in, and maps logical
/// coordinates onto the surface.
#[derive(Debug)]
pub struct CanvasRenderer<S> {
    surface: S,
    container: Container,
    mapping: LogicalMapping,
    size: f64,
}

impl<S: Surface> CanvasRenderer<S> {
    pub fn new(surface: S, container: Container) -> Self {
        Self {
            surface,
            container,
            mapping: LogicalMapping::for_size(0.0),
            size: 0.0,
        }
    }

    /// Size the surface to the container's square at its device pixel ratio.
    ///
    /// Fails with a surface error when the container has no area.
    pub fn setup_canvas(&mut self) -> IllustraResult<()> {
        self.setup_canvas_with_min(0.0)
    }

    /// Like [`Self::setup_canvas`], with the square side raised to at least `min_size`.
    pub fn setup_canvas_with_min(&mut self, min_size: f64) -> IllustraResult<()> {
        let size = self.container.square_size().max(min_size);
        let dpr = self.container.dpr();
        let desc = SurfaceDesc::square(size, dpr)?;
        self.surface.configure(desc)?;
        self.surface.set_transform(Affine::scale(dpr));
        self.size = size;
        self.mapping = LogicalMapping::for_size(size);
        tracing::trace!(size, dpr, px = desc.width_px, "canvas configured");
        Ok(())
    }

    pub fn clear(&mut self) {
        self.surface.clear();
    }

    pub fn scale_coordinate_x(&self, x: f64) -> f64 {
        (x - LOGICAL_SIZE / 2.0) * self.mapping.scale_x + self.mapping.center_x
    }

    pub fn scale_coordinate_y(&self, y: f64) -> f64 {
        (y - LOGICAL_SIZE / 2.0) * self.mapping.scale_y + self.mapping.center_y
    }

    /// Logical point to surface coordinates.
    pub fn map_point(&self, x: f64, y: f64) -> Point {
        Point::new(self.scale_coordinate_x(x), self.scale_coordinate_y(y))
    }

    /// Resolve `var` on `element` (default: the container) as a color with `alpha`.
    ///
    /// `None` means the color is unavailable and the caller must fall back or skip the frame.
    pub fn get_color_from_css(
        &self,
        var: &str,
        alpha: f64,
        element: Option<&StyleVars>,
    ) -> Option<Rgba> {
        element
            .unwrap_or(&self.container.styles)
            .resolve_color(var, alpha)
    }

    /// The container's text color, opaque black when unset.
    pub fn text_color(&self, element: Option<&StyleVars>) -> Rgba {
        element
            .unwrap_or(&self.container.styles)
            .text_color()
            .unwrap_or(Rgba::BLACK)
    }

    /// Replace the container; call [`Self::setup_canvas`] afterwards to re-layout.
    pub fn set_container(&mut self, container: Container) {
        self.container = container;
    }

    pub fn container(&self) -> &Container {
        &self.container
    }

    pub fn container_mut(&mut self) -> &mut Container {
        &mut self.container
    }

    pub fn mapping(&self) -> LogicalMapping {
        self.mapping
    }

    /// Adopt another surface's logical mapping so two surfaces share one scale.
    pub fn set_mapping(&mut self, mapping: LogicalMapping) {
        self.mapping = mapping;
    }

    pub fn scale_x(&self) -> f64 {
        self.mapping.scale_x
    }

    pub fn scale_y(&self) -> f64 {
        self.mapping.scale_y
    }

    /// Side of the configured square in CSS pixels.
    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}

/// Painter's order: farthest (largest depth) first.
///
/// Stable, so equal depths keep their input order. Missing depth counts as `0`; NaN follows
/// IEEE total order.
pub fn sort_by_depth<T: Depth>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut out: Vec<T> = items.into_iter().collect();
    out.sort_by(|a, b| {
        let za = a.depth().unwrap_or(0.0);
        let zb = b.depth().unwrap_or(0.0);
        zb.total_cmp(&za)
    });
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/base.rs"]
mod tests;
