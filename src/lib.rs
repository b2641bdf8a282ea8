//! Illustra renders always-on decorative 3D illustrations onto square 2D surfaces.
//!
//! Three kinds ship with the crate:
//!
//! - a rotating point-cloud [`SphereIllustration`] with a living population of radial lines
//! - a [`LayeredHouseIllustration`] of five stacked silhouettes swinging in sequence
//! - a [`SplashIllustration`] of flat shapes that sway and periodically reshuffle depths
//!
//! Every kind pairs a model (pure state machine), a renderer (projection, depth sort and
//! drawing onto a [`Surface`]) and a controller implementing [`Illustration`]. Hosts drive
//! controllers by calling [`Illustration::tick`] once per display refresh, directly or through
//! an [`IllustrationRegistry`].
#![forbid(unsafe_code)]

mod foundation;

pub mod animation;
pub mod assets;
pub mod illustrations;
pub mod registry;
pub mod render;
pub mod transform;

pub use crate::foundation::core::{
    Affine, BezPath, Depth, Line, Point, Point3D, ProjectedPoint, Rect, Rgba, Rotation, Vec2,
};
pub use crate::foundation::error::{IllustraError, IllustraResult};
pub use crate::foundation::math::Rng64;

pub use crate::animation::{AnimationLoop, Clock, Ease, ManualClock, SystemClock, TimerQueue};
pub use crate::assets::{
    FileShapeSource, InlineShapeSource, ShapeDescription, ShapeSource, StyleVars,
};
pub use crate::illustrations::layered_house::{LayeredHouseConfig, LayeredHouseIllustration};
pub use crate::illustrations::sphere::{SphereConfig, SphereIllustration};
pub use crate::illustrations::splash::{SplashConfig, SplashIllustration, SurfaceLayout, SurfaceSlot};
pub use crate::illustrations::{FrameOutcome, Illustration, IllustrationKind, IllustrationRenderer};
pub use crate::registry::{Declaration, IllustrationRegistry, InstanceId, ShapeRef};
pub use crate::render::{
    CanvasRenderer, Container, CpuSurface, FrameRGBA, RecordingSurface, Surface, sort_by_depth,
};
