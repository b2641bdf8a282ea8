//! Drawing surfaces and the shared canvas plumbing illustration renderers are built on.

mod base;
mod cpu;
mod surface;

pub use base::{CanvasRenderer, Container, LogicalMapping, sort_by_depth};
pub use cpu::{CpuSurface, rasterize};
pub use surface::{DrawOp, FrameRGBA, RecordingSurface, Surface, SurfaceDesc};
