use crate::foundation::core::{Affine, Point, Point3D, Rotation};

/// Rotate about the X axis (right-handed, radians).
pub fn rotate_x(p: Point3D, angle: f64) -> Point3D {
    let (sin, cos) = angle.sin_cos();
    Point3D::new(p.x, p.y * cos - p.z * sin, p.y * sin + p.z * cos)
}

/// Rotate about the Y axis (right-handed, radians).
pub fn rotate_y(p: Point3D, angle: f64) -> Point3D {
    let (sin, cos) = angle.sin_cos();
    Point3D::new(p.x * cos + p.z * sin, p.y, -p.x * sin + p.z * cos)
}

/// Rotate about the Z axis (right-handed, radians).
pub fn rotate_z(p: Point3D, angle: f64) -> Point3D {
    let (sin, cos) = angle.sin_cos();
    Point3D::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos, p.z)
}

/// Apply `rotation` in the fixed order X, then Y, then Z.
///
/// Axis rotations do not commute; callers rely on this exact order.
pub fn rotate_point(p: Point3D, rotation: Rotation) -> Point3D {
    let p = rotate_x(p, rotation.x);
    let p = rotate_y(p, rotation.y);
    rotate_z(p, rotation.z)
}

/// In-plane rotation of `p` about `center`.
pub fn rotate_about(p: Point, center: Point, angle: f64) -> Point {
    Affine::rotate_about(angle, center) * p
}

#[cfg(test)]
#[path = "../../tests/unit/transform/rotation.rs"]
mod tests;
