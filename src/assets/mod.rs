//! Inputs an illustration reads from its environment: the flat shape description and the
//! container's style properties.

mod shape;
mod source;
mod style;

pub use shape::{ShapeDescription, ShapeElement, ViewBox, rect_to_polygon};
pub use source::{FileShapeSource, InlineShapeSource, ShapeSource};
pub use style::{StyleVars, parse_css_color};
