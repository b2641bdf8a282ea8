use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::foundation::core::{Line, Point, Rect};
use crate::foundation::error::{IllustraError, IllustraResult};

/// Declared drawing area of a flat shape description.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    pub const fn new(min_x: f64, min_y: f64, width: f64, height: f64) -> Self {
        Self {
            min_x,
            min_y,
            width,
            height,
        }
    }

    pub fn center(self) -> Point {
        Point::new(
            self.min_x + self.width / 2.0,
            self.min_y + self.height / 2.0,
        )
    }

    /// Parses `"min_x min_y width height"`; commas are accepted as separators.
    pub fn parse(raw: &str) -> IllustraResult<Self> {
        let values = parse_numbers(raw, "viewBox")?;
        match values.as_slice() {
            [min_x, min_y, width, height] => Ok(Self::new(*min_x, *min_y, *width, *height)),
            _ => Err(IllustraError::geometry_load(format!(
                "viewBox must have 4 numbers, got {}",
                values.len()
            ))),
        }
    }
}

/// One primitive of the description. Coordinates are relative to the view box center.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ShapeElement {
    Polygon { classes: Vec<String>, points: Vec<Point> },
    Line { classes: Vec<String>, line: Line },
    Rect { classes: Vec<String>, rect: Rect },
}

impl ShapeElement {
    pub fn classes(&self) -> &[String] {
        match self {
            Self::Polygon { classes, .. } | Self::Line { classes, .. } | Self::Rect { classes, .. } => {
                classes
            }
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().iter().any(|c| c == class)
    }
}

/// Typed geometry parsed from a flat vector description (an SVG subset).
///
/// Only `polygon`, `line` and `rect` elements are kept, in document order, including those
/// nested in groups. The first `svg` element's `viewBox` fixes the center every coordinate
/// is made relative to; `default_view_box` applies when it is absent.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeDescription {
    pub view_box: ViewBox,
    pub elements: Vec<ShapeElement>,
}

impl ShapeDescription {
    #[tracing::instrument(skip_all, fields(bytes = text.len()))]
    pub fn parse(text: &str, default_view_box: ViewBox) -> IllustraResult<Self> {
        let mut reader = Reader::from_str(text);
        reader.config_mut().trim_text(true);
        reader.config_mut().check_end_names = false;

        let mut view_box: Option<ViewBox> = None;
        let mut raw = Vec::new();
        let mut seen_root = false;

        loop {
            let event = reader.read_event().map_err(|e| {
                IllustraError::geometry_load(format!(
                    "malformed shape description at byte {}: {e}",
                    reader.buffer_position()
                ))
            })?;
            match event {
                Event::Start(e) | Event::Empty(e) => {
                    let name = e.local_name();
                    match name.as_ref() {
                        b"svg" if !seen_root => {
                            seen_root = true;
                            if let Some(vb) = attr(&e, "viewBox")? {
                                view_box = Some(ViewBox::parse(&vb)?);
                            }
                        }
                        b"polygon" | b"line" | b"rect" => raw.push(RawElement::read(&e)?),
                        _ => {}
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        let view_box = view_box.unwrap_or(default_view_box);
        let center = view_box.center();
        let elements: Vec<ShapeElement> = raw
            .into_iter()
            .filter_map(|el| el.into_element(center).transpose())
            .collect::<IllustraResult<_>>()?;

        tracing::debug!(elements = elements.len(), ?view_box, "parsed shape description");
        Ok(Self { view_box, elements })
    }

    pub fn polygons_with_class<'a>(&'a self, class: &'a str) -> impl Iterator<Item = &'a [Point]> {
        self.elements.iter().filter_map(move |el| match el {
            ShapeElement::Polygon { points, .. } if el.has_class(class) => Some(points.as_slice()),
            _ => None,
        })
    }

    pub fn lines_with_class<'a>(&'a self, class: &'a str) -> impl Iterator<Item = Line> + 'a {
        self.elements.iter().filter_map(move |el| match el {
            ShapeElement::Line { line, .. } if el.has_class(class) => Some(*line),
            _ => None,
        })
    }

    pub fn rects_with_class<'a>(&'a self, class: &'a str) -> impl Iterator<Item = Rect> + 'a {
        self.elements.iter().filter_map(move |el| match el {
            ShapeElement::Rect { rect, .. } if el.has_class(class) => Some(*rect),
            _ => None,
        })
    }
}

/// Rect corners in drawing order starting at `(x0, y0)`.
pub fn rect_to_polygon(rect: Rect) -> Vec<Point> {
    vec![
        Point::new(rect.x0, rect.y0),
        Point::new(rect.x1, rect.y0),
        Point::new(rect.x1, rect.y1),
        Point::new(rect.x0, rect.y1),
    ]
}

// Attribute values are captured before the view box is known.
enum RawElement {
    Polygon {
        classes: Vec<String>,
        points: Option<String>,
    },
    Line {
        classes: Vec<String>,
        coords: [Option<String>; 4],
    },
    Rect {
        classes: Vec<String>,
        coords: [Option<String>; 4],
    },
}

impl RawElement {
    fn read(e: &BytesStart<'_>) -> IllustraResult<Self> {
        let classes = attr(e, "class")?
            .map(|c| c.split_whitespace().map(str::to_owned).collect())
            .unwrap_or_default();
        Ok(match e.local_name().as_ref() {
            b"polygon" => Self::Polygon {
                classes,
                points: attr(e, "points")?,
            },
            b"line" => Self::Line {
                classes,
                coords: [attr(e, "x1")?, attr(e, "y1")?, attr(e, "x2")?, attr(e, "y2")?],
            },
            _ => Self::Rect {
                classes,
                coords: [
                    attr(e, "x")?,
                    attr(e, "y")?,
                    attr(e, "width")?,
                    attr(e, "height")?,
                ],
            },
        })
    }

    /// `Ok(None)` drops elements without geometry (a polygon with no points).
    fn into_element(self, center: Point) -> IllustraResult<Option<ShapeElement>> {
        match self {
            Self::Polygon { classes, points } => {
                let Some(points) = points else {
                    return Ok(None);
                };
                let values = parse_numbers(&points, "polygon points")?;
                let points: Vec<Point> = values
                    .chunks_exact(2)
                    .map(|xy| Point::new(xy[0] - center.x, xy[1] - center.y))
                    .collect();
                if points.is_empty() {
                    return Ok(None);
                }
                Ok(Some(ShapeElement::Polygon { classes, points }))
            }
            Self::Line { classes, coords } => {
                let [x1, y1, x2, y2] = coords;
                let line = Line::new(
                    (
                        required(x1, "line x1")? - center.x,
                        required(y1, "line y1")? - center.y,
                    ),
                    (
                        required(x2, "line x2")? - center.x,
                        required(y2, "line y2")? - center.y,
                    ),
                );
                Ok(Some(ShapeElement::Line { classes, line }))
            }
            Self::Rect { classes, coords } => {
                let [x, y, w, h] = coords;
                let x = optional(x, "rect x")?.unwrap_or(0.0) - center.x;
                let y = optional(y, "rect y")?.unwrap_or(0.0) - center.y;
                let w = required(w, "rect width")?;
                let h = required(h, "rect height")?;
                let rect = Rect::new(x, y, x + w, y + h);
                Ok(Some(ShapeElement::Rect { classes, rect }))
            }
        }
    }
}

fn attr(e: &BytesStart<'_>, key: &str) -> IllustraResult<Option<String>> {
    for a in e.attributes() {
        let a = a.map_err(|err| IllustraError::geometry_load(format!("bad attribute: {err}")))?;
        if a.key.local_name().as_ref() == key.as_bytes() {
            let value = a.unescape_value().map_err(|err| {
                IllustraError::geometry_load(format!("bad value for \"{key}\": {err}"))
            })?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

fn parse_number(raw: &str, what: &str) -> IllustraResult<f64> {
    let v: f64 = raw
        .trim()
        .parse()
        .map_err(|_| IllustraError::geometry_load(format!("invalid number \"{raw}\" in {what}")))?;
    if v.is_finite() {
        Ok(v)
    } else {
        Err(IllustraError::geometry_load(format!("non-finite number in {what}")))
    }
}

fn parse_numbers(raw: &str, what: &str) -> IllustraResult<Vec<f64>> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| parse_number(s, what))
        .collect()
}

fn optional(raw: Option<String>, what: &str) -> IllustraResult<Option<f64>> {
    raw.map(|r| parse_number(&r, what)).transpose()
}

fn required(raw: Option<String>, what: &str) -> IllustraResult<f64> {
    let raw = raw.ok_or_else(|| IllustraError::geometry_load(format!("missing {what}")))?;
    parse_number(&raw, what)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/shape.rs"]
mod tests;
