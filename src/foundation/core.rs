pub use kurbo::{Affine, BezPath, Line, Point, Rect, Size, Vec2};

/// A point in the shared logical 3D unit space.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Lift a 2D point onto the plane at depth `z`.
    pub fn from_planar(p: Point, z: f64) -> Self {
        Self::new(p.x, p.y, z)
    }

    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn approx_eq(self, other: Self, eps: f64) -> bool {
        (self.x - other.x).abs() <= eps
            && (self.y - other.y).abs() <= eps
            && (self.z - other.z).abs() <= eps
    }
}

/// Euler angles in radians, applied X then Y then Z.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rotation {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Rotation {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn from_degrees(x: f64, y: f64, z: f64) -> Self {
        Self::new(x.to_radians(), y.to_radians(), z.to_radians())
    }

    /// Per-axis accumulation; angles are left unbounded since they only feed trig functions.
    pub fn accumulate(&mut self, delta: Rotation) {
        self.x += delta.x;
        self.y += delta.y;
        self.z += delta.z;
    }
}

/// A 2D render coordinate that keeps its source depth for sorting and depth shading.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Scale factor applied by a perspective projection, `None` for parallel projections.
    pub scale: Option<f64>,
}

impl ProjectedPoint {
    pub fn to_point(self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Anything that can be ordered back-to-front by [`crate::sort_by_depth`].
pub trait Depth {
    /// Depth used for ordering; `None` sorts as `0`.
    fn depth(&self) -> Option<f64>;
}

impl Depth for Point3D {
    fn depth(&self) -> Option<f64> {
        Some(self.z)
    }
}

impl Depth for ProjectedPoint {
    fn depth(&self) -> Option<f64> {
        Some(self.z)
    }
}

impl<T: Depth + ?Sized> Depth for &T {
    fn depth(&self) -> Option<f64> {
        (**self).depth()
    }
}

/// Straight-alpha color with 8-bit channels and a floating alpha, the shape produced by
/// resolving a `"r, g, b"` style variable with an explicit alpha.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Accent used when the configured accent variable does not resolve.
    pub const FALLBACK_ACCENT: Self = Self::rgb(255, 105, 105);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn with_alpha(self, a: f64) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Multiply the current alpha, used to fold a global alpha into a paint.
    pub fn fade(self, factor: f64) -> Self {
        self.with_alpha(self.a * factor)
    }

    pub fn to_css(self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }

    pub fn alpha_u8(self) -> u8 {
        (self.a.clamp(0.0, 1.0) * 255.0).round() as u8
    }

    /// Premultiplied RGBA8 (r,g,b already multiplied by a).
    pub fn to_premul_rgba8(self) -> [u8; 4] {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        let a = self.alpha_u8();
        [premul(self.r, a), premul(self.g, a), premul(self.b, a), a]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
