use crate::foundation::core::{Affine, BezPath, Point, Rect, Rgba};
use crate::foundation::error::{IllustraError, IllustraResult};

/// Physical sizing of a square drawing surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceDesc {
    /// Backing buffer width in device pixels.
    pub width_px: u32,
    /// Backing buffer height in device pixels.
    pub height_px: u32,
    /// On-screen side length in CSS pixels.
    pub css_size: f64,
    pub device_pixel_ratio: f64,
}

impl SurfaceDesc {
    /// Square surface of `css_size` CSS pixels at `dpr`.
    pub fn square(css_size: f64, dpr: f64) -> IllustraResult<Self> {
        let px = (css_size * dpr).round();
        if !px.is_finite() || px < 1.0 {
            return Err(IllustraError::surface(format!(
                "surface of {css_size}px at dpr {dpr} has no pixels"
            )));
        }
        if px > f64::from(u16::MAX) {
            return Err(IllustraError::surface(format!(
                "surface of {px} device pixels exceeds {}",
                u16::MAX
            )));
        }
        Ok(Self {
            width_px: px as u32,
            height_px: px as u32,
            css_size,
            device_pixel_ratio: dpr,
        })
    }
}

/// A rendered frame as RGBA8 pixels.
///
/// Frames read back from [`crate::CpuSurface`] are **premultiplied alpha**; the flag makes
/// that explicit at API boundaries.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Copy with straight alpha, the layout PNG encoders expect.
    pub fn to_straight_alpha(&self) -> Self {
        if !self.premultiplied {
            return self.clone();
        }
        let mut data = self.data.clone();
        for px in data.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            if a == 0 || a == 255 {
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        Self {
            width: self.width,
            height: self.height,
            data,
            premultiplied: false,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.data.chunks_exact(4).all(|px| px[3] == 0)
    }
}

/// One primitive drawing command, recorded in the order it was issued.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    FillRect {
        rect: Rect,
        transform: Affine,
        color: Rgba,
    },
    FillPath {
        path: BezPath,
        transform: Affine,
        color: Rgba,
    },
    StrokePath {
        path: BezPath,
        transform: Affine,
        width: f64,
        color: Rgba,
    },
    FillCircle {
        center: Point,
        radius: f64,
        transform: Affine,
        color: Rgba,
    },
}

impl DrawOp {
    pub fn color(&self) -> Rgba {
        match self {
            Self::FillRect { color, .. }
            | Self::FillPath { color, .. }
            | Self::StrokePath { color, .. }
            | Self::FillCircle { color, .. } => *color,
        }
    }
}

/// The primitive 2D operations illustrations draw with.
///
/// Coordinates are CSS pixels; the base transform set after [`Surface::configure`] maps them
/// to device pixels. Alpha travels in each color.
pub trait Surface {
    /// Resize the backing buffer. Resizing discards the current contents and transform.
    fn configure(&mut self, desc: SurfaceDesc) -> IllustraResult<()>;

    fn desc(&self) -> Option<SurfaceDesc>;

    fn set_transform(&mut self, transform: Affine);

    /// Erase the whole buffer to transparent.
    fn clear(&mut self);

    fn fill_rect(&mut self, rect: Rect, color: Rgba);

    fn fill_path(&mut self, path: &BezPath, color: Rgba);

    fn stroke_path(&mut self, path: &BezPath, width: f64, color: Rgba);

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba);

    /// Rasterized contents, for surfaces that can produce pixels.
    fn read_pixels(&mut self) -> IllustraResult<Option<FrameRGBA>> {
        Ok(None)
    }
}

/// Surface that keeps the ops issued since the last clear or resize.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    desc: Option<SurfaceDesc>,
    transform: Affine,
    ops: Vec<DrawOp>,
    clears: u64,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Number of clears issued, a cheap frame counter for tests.
    pub fn clear_count(&self) -> u64 {
        self.clears
    }

    pub fn transform(&self) -> Affine {
        self.transform
    }
}

impl Surface for RecordingSurface {
    fn configure(&mut self, desc: SurfaceDesc) -> IllustraResult<()> {
        if desc.width_px == 0 || desc.height_px == 0 {
            return Err(IllustraError::surface("surface has zero size"));
        }
        self.desc = Some(desc);
        self.transform = Affine::IDENTITY;
        self.ops.clear();
        Ok(())
    }

    fn desc(&self) -> Option<SurfaceDesc> {
        self.desc
    }

    fn set_transform(&mut self, transform: Affine) {
        self.transform = transform;
    }

    fn clear(&mut self) {
        self.ops.clear();
        self.clears += 1;
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.ops.push(DrawOp::FillRect {
            rect,
            transform: self.transform,
            color,
        });
    }

    fn fill_path(&mut self, path: &BezPath, color: Rgba) {
        self.ops.push(DrawOp::FillPath {
            path: path.clone(),
            transform: self.transform,
            color,
        });
    }

    fn stroke_path(&mut self, path: &BezPath, width: f64, color: Rgba) {
        self.ops.push(DrawOp::StrokePath {
            path: path.clone(),
            transform: self.transform,
            width,
            color,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) {
        self.ops.push(DrawOp::FillCircle {
            center,
            radius,
            transform: self.transform,
            color,
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
