use crate::foundation::core::{Point3D, ProjectedPoint};

/// Where the projected origin lands in logical space.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ProjectionCenter {
    pub center_x: f64,
    pub center_y: f64,
}

impl ProjectionCenter {
    pub const fn new(center_x: f64, center_y: f64) -> Self {
        Self { center_x, center_y }
    }
}

impl Default for ProjectionCenter {
    fn default() -> Self {
        Self::new(500.0, 500.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PerspectiveOptions {
    pub center_x: f64,
    pub center_y: f64,
    /// Camera-to-plane distance; smaller values exaggerate perspective.
    pub distance: f64,
}

impl Default for PerspectiveOptions {
    fn default() -> Self {
        Self {
            center_x: 500.0,
            center_y: 500.0,
            distance: 1000.0,
        }
    }
}

/// Orthogonal view down the Z axis; `z` is kept for depth ordering.
pub fn project_orthogonal(p: Point3D, center: ProjectionCenter) -> ProjectedPoint {
    ProjectedPoint {
        x: center.center_x + p.x,
        y: center.center_y + p.y,
        z: p.z,
        scale: None,
    }
}

/// Classic 30 degree isometric projection.
pub fn project_isometric(p: Point3D, center: ProjectionCenter) -> ProjectedPoint {
    let (sin30, cos30) = 30f64.to_radians().sin_cos();
    ProjectedPoint {
        x: center.center_x + (p.x - p.y) * cos30,
        y: center.center_y + (p.x + p.y) * sin30 + p.z,
        z: p.z,
        scale: None,
    }
}

/// Perspective projection with `scale = distance / (distance + z)`.
///
/// Depths approaching `-distance` diverge; configuration keeps depth pools away from it.
pub fn project_perspective(p: Point3D, opts: PerspectiveOptions) -> ProjectedPoint {
    let scale = opts.distance / (opts.distance + p.z);
    ProjectedPoint {
        x: opts.center_x + p.x * scale,
        y: opts.center_y + p.y * scale,
        z: p.z,
        scale: Some(scale),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/projection.rs"]
mod tests;
