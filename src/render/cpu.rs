use kurbo::Shape;

use crate::foundation::core::{Affine, BezPath, Point, Rgba};
use crate::foundation::error::{IllustraError, IllustraResult};
use crate::render::surface::{DrawOp, FrameRGBA, RecordingSurface, Surface, SurfaceDesc};

/// Flattening tolerance for circles, in device pixels.
const CIRCLE_TOLERANCE: f64 = 0.1;

/// CPU raster surface powered by `vello_cpu`.
///
/// Draw calls are recorded; pixels are produced on demand by [`Surface::read_pixels`], which
/// replays the ops issued since the last clear onto a transparent buffer.
#[derive(Clone, Debug, Default)]
pub struct CpuSurface {
    recorder: RecordingSurface,
}

impl CpuSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        self.recorder.ops()
    }
}

impl Surface for CpuSurface {
    fn configure(&mut self, desc: SurfaceDesc) -> IllustraResult<()> {
        // Reject sizes vello_cpu cannot address before accepting them.
        dims(&desc)?;
        self.recorder.configure(desc)
    }

    fn desc(&self) -> Option<SurfaceDesc> {
        self.recorder.desc()
    }

    fn set_transform(&mut self, transform: Affine) {
        self.recorder.set_transform(transform);
    }

    fn clear(&mut self) {
        self.recorder.clear();
    }

    fn fill_rect(&mut self, rect: crate::foundation::core::Rect, color: Rgba) {
        self.recorder.fill_rect(rect, color);
    }

    fn fill_path(&mut self, path: &BezPath, color: Rgba) {
        self.recorder.fill_path(path, color);
    }

    fn stroke_path(&mut self, path: &BezPath, width: f64, color: Rgba) {
        self.recorder.stroke_path(path, width, color);
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) {
        self.recorder.fill_circle(center, radius, color);
    }

    fn read_pixels(&mut self) -> IllustraResult<Option<FrameRGBA>> {
        let desc = self
            .recorder
            .desc()
            .ok_or_else(|| IllustraError::surface("surface was never configured"))?;
        rasterize(&desc, self.recorder.ops()).map(Some)
    }
}

/// Rasterize `ops` onto a fresh transparent buffer of `desc`'s size.
pub fn rasterize(desc: &SurfaceDesc, ops: &[DrawOp]) -> IllustraResult<FrameRGBA> {
    let (width, height) = dims(desc)?;

    let mut ctx = vello_cpu::RenderContext::new(width, height);
    for op in ops {
        draw_op(&mut ctx, op);
    }
    ctx.flush();

    let mut pixmap = vello_cpu::Pixmap::new(width, height);
    ctx.render_to_pixmap(&mut pixmap);

    Ok(FrameRGBA {
        width: desc.width_px,
        height: desc.height_px,
        data: pixmap.data_as_u8_slice().to_vec(),
        premultiplied: true,
    })
}

fn dims(desc: &SurfaceDesc) -> IllustraResult<(u16, u16)> {
    let width: u16 = desc
        .width_px
        .try_into()
        .map_err(|_| IllustraError::surface("surface width exceeds u16"))?;
    let height: u16 = desc
        .height_px
        .try_into()
        .map_err(|_| IllustraError::surface("surface height exceeds u16"))?;
    if width == 0 || height == 0 {
        return Err(IllustraError::surface("surface has zero size"));
    }
    Ok((width, height))
}

fn draw_op(ctx: &mut vello_cpu::RenderContext, op: &DrawOp) {
    match op {
        DrawOp::FillRect {
            rect,
            transform,
            color,
        } => {
            ctx.set_transform(affine_to_cpu(*transform));
            ctx.set_paint(color_to_cpu(*color));
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                rect.x0, rect.y0, rect.x1, rect.y1,
            ));
        }
        DrawOp::FillPath {
            path,
            transform,
            color,
        } => {
            ctx.set_transform(affine_to_cpu(*transform));
            ctx.set_paint(color_to_cpu(*color));
            ctx.fill_path(&bezpath_to_cpu(path));
        }
        DrawOp::StrokePath {
            path,
            transform,
            width,
            color,
        } => {
            ctx.set_transform(affine_to_cpu(*transform));
            ctx.set_paint(color_to_cpu(*color));
            ctx.set_stroke(vello_cpu::kurbo::Stroke::new(*width));
            ctx.stroke_path(&bezpath_to_cpu(path));
        }
        DrawOp::FillCircle {
            center,
            radius,
            transform,
            color,
        } => {
            if *radius <= 0.0 {
                return;
            }
            let circle = kurbo::Circle::new(*center, *radius).to_path(CIRCLE_TOLERANCE);
            ctx.set_transform(affine_to_cpu(*transform));
            ctx.set_paint(color_to_cpu(*color));
            ctx.fill_path(&bezpath_to_cpu(&circle));
        }
    }
}

fn color_to_cpu(c: Rgba) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.alpha_u8())
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
