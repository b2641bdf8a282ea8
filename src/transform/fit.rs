use crate::foundation::core::{Point, Rect};

/// Side length of the logical design space every illustration composes in.
pub const LOGICAL_SIZE: f64 = 1000.0;

/// Lower and upper clamp applied to any auto-computed scale.
pub const MIN_AUTO_SCALE: f64 = 0.1;
pub const MAX_AUTO_SCALE: f64 = 10.0;

/// Margins kept free inside the logical box when fitting geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitPadding {
    pub top: f64,
    pub bottom: f64,
    pub sides: f64,
}

impl FitPadding {
    /// Small margin on top, a larger one below, moderate on both sides.
    pub const ILLUSTRATION: Self = Self {
        top: 20.0,
        bottom: 50.0,
        sides: 30.0,
    };

    pub fn available_width(self) -> f64 {
        LOGICAL_SIZE - self.sides * 2.0
    }

    pub fn available_height(self) -> f64 {
        LOGICAL_SIZE - self.top - self.bottom
    }
}

/// Bounding box of projected points; `None` when empty or any coordinate is non-finite.
pub fn bounds_of(points: impl IntoIterator<Item = Point>) -> Option<Rect> {
    let mut it = points.into_iter();
    let first = it.next()?;
    let mut rect = Rect::from_points(first, first);
    for p in it {
        rect = rect.union_pt(p);
    }
    let finite = [rect.x0, rect.y0, rect.x1, rect.y1]
        .iter()
        .all(|v| v.is_finite());
    finite.then_some(rect)
}

/// Scale that fits `bounds` into the padded logical box, multiplied by `factor` and clamped.
///
/// Degenerate axes contribute a scale of 1; missing bounds yield 1.
pub fn fit_scale(bounds: Option<Rect>, padding: FitPadding, factor: f64) -> f64 {
    let Some(bounds) = bounds else {
        return 1.0;
    };
    let width = bounds.width();
    let height = bounds.height();
    let scale_x = if width > 0.0 {
        padding.available_width() / width
    } else {
        1.0
    };
    let scale_y = if height > 0.0 {
        padding.available_height() / height
    } else {
        1.0
    };
    (scale_x.min(scale_y) * factor).clamp(MIN_AUTO_SCALE, MAX_AUTO_SCALE)
}
