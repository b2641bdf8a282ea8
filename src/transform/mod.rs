//! Geometry kernel: axis rotations, projections and logical-box fitting. All pure.

mod fit;
mod projection;
mod rotation;

pub use fit::{FitPadding, LOGICAL_SIZE, MAX_AUTO_SCALE, MIN_AUTO_SCALE, bounds_of, fit_scale};
pub use projection::{
    PerspectiveOptions, ProjectionCenter, project_isometric, project_orthogonal,
    project_perspective,
};
pub use rotation::{rotate_about, rotate_point, rotate_x, rotate_y, rotate_z};
