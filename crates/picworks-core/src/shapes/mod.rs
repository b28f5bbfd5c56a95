//! Shape definitions for project canvases.
//!
//! Each variant owns only its geometry. The three-phase editing protocol
//! (`begin`, `update`, `finish`) lives on [`ShapeTrait`] so every geometry
//! rule sits next to the shape it shapes; lifecycle checks are the job of
//! [`Element`](crate::element::Element).

mod curve;
mod ellipse;
mod line;
mod polygon;
mod rectangle;
mod rounded_rect;
mod text;

pub use curve::Curve;
pub use ellipse::Ellipse;
pub use line::Line;
pub use polygon::Polygon;
pub use rectangle::Rectangle;
pub use rounded_rect::RoundedRect;
pub use text::Text;

use crate::config::CanvasConfig;
use crate::tools::ToolKind;
use kurbo::{Affine, BezPath, Point, Rect};
use peniko::Color;
use serde::{Deserialize, Serialize};

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Pen and brush for an element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    /// Stroke color.
    pub stroke_color: SerializableColor,
    /// Stroke width.
    pub stroke_width: f64,
    /// Fill color (None = no fill).
    pub fill_color: Option<SerializableColor>,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            stroke_color: SerializableColor::black(),
            stroke_width: 1.0,
            fill_color: None,
        }
    }
}

/// Variant tag of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Line,
    Rectangle,
    Ellipse,
    Text,
    Curve,
    Polygon,
    RoundedRect,
}

impl ShapeKind {
    /// The tool that draws this kind of shape.
    pub fn tool(self) -> ToolKind {
        match self {
            ShapeKind::Line => ToolKind::Line,
            ShapeKind::Rectangle => ToolKind::Rectangle,
            ShapeKind::Ellipse => ToolKind::Ellipse,
            ShapeKind::Text => ToolKind::Text,
            ShapeKind::Curve => ToolKind::Curve,
            ShapeKind::Polygon => ToolKind::Polygon,
            ShapeKind::RoundedRect => ToolKind::RoundedRect,
        }
    }
}

/// Distance from a point to a line segment (a→b).
pub fn point_to_segment_dist(point: Point, a: Point, b: Point) -> f64 {
    let seg = kurbo::Vec2::new(b.x - a.x, b.y - a.y);
    let pv = kurbo::Vec2::new(point.x - a.x, point.y - a.y);
    let len_sq = seg.hypot2();
    if len_sq < f64::EPSILON {
        return pv.hypot();
    }
    let t = (pv.dot(seg) / len_sq).clamp(0.0, 1.0);
    let proj = Point::new(a.x + t * seg.x, a.y + t * seg.y);
    ((point.x - proj.x).powi(2) + (point.y - proj.y).powi(2)).sqrt()
}

/// Minimum distance from a point to a polyline (sequence of connected segments).
pub fn point_to_polyline_dist(point: Point, points: &[Point]) -> f64 {
    match points {
        [] => f64::INFINITY,
        [only] => only.distance(point),
        _ => points
            .windows(2)
            .map(|w| point_to_segment_dist(point, w[0], w[1]))
            .fold(f64::INFINITY, f64::min),
    }
}

/// Bounding box of a point set, `Rect::ZERO` when empty.
pub(crate) fn points_bounds(points: &[Point]) -> Rect {
    let Some(first) = points.first() else {
        return Rect::ZERO;
    };
    points
        .iter()
        .skip(1)
        .fold(Rect::from_points(*first, *first), |r, p| r.union_pt(*p))
}

/// Common trait for all shape geometries.
pub trait ShapeTrait {
    /// Anchor the geometry at the press position.
    fn begin(&mut self, point: Point);

    /// Follow the pointer. Repeating a call with the same point is a no-op.
    fn update(&mut self, point: Point);

    /// Apply the release position and settle the final geometry.
    fn finish(&mut self, point: Point);

    /// Get the bounding box in scene coordinates.
    fn bounds(&self) -> Rect;

    /// Check if a point (in scene coordinates) hits this shape.
    fn hit_test(&self, point: Point, tolerance: f64) -> bool;

    /// Get the path representation for rendering.
    fn to_path(&self) -> BezPath;

    /// Apply a transform to this shape.
    fn transform(&mut self, affine: Affine);
}

/// Enum wrapper for all shape types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Line(Line),
    Rectangle(Rectangle),
    Ellipse(Ellipse),
    Text(Text),
    Curve(Curve),
    Polygon(Polygon),
    RoundedRect(RoundedRect),
}

impl Shape {
    /// Build an empty shape for a drawing tool.
    ///
    /// Returns `None` for tools that draw nothing.
    pub fn for_tool(tool: ToolKind, config: &CanvasConfig) -> Option<Shape> {
        match tool {
            ToolKind::Line => Some(Shape::Line(Line::default())),
            ToolKind::Rectangle => Some(Shape::Rectangle(Rectangle::default())),
            ToolKind::Ellipse => Some(Shape::Ellipse(Ellipse::default())),
            ToolKind::Text => Some(Shape::Text(Text::default())),
            ToolKind::Curve => Some(Shape::Curve(Curve::default())),
            ToolKind::Polygon => {
                Some(Shape::Polygon(Polygon::new(config.polygon_vertex_spacing)))
            }
            ToolKind::RoundedRect => {
                Some(Shape::RoundedRect(RoundedRect::new(config.corner_radius)))
            }
            ToolKind::None => None,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Line(_) => ShapeKind::Line,
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::Ellipse(_) => ShapeKind::Ellipse,
            Shape::Text(_) => ShapeKind::Text,
            Shape::Curve(_) => ShapeKind::Curve,
            Shape::Polygon(_) => ShapeKind::Polygon,
            Shape::RoundedRect(_) => ShapeKind::RoundedRect,
        }
    }

    pub fn begin(&mut self, point: Point) {
        match self {
            Shape::Line(s) => s.begin(point),
            Shape::Rectangle(s) => s.begin(point),
            Shape::Ellipse(s) => s.begin(point),
            Shape::Text(s) => s.begin(point),
            Shape::Curve(s) => s.begin(point),
            Shape::Polygon(s) => s.begin(point),
            Shape::RoundedRect(s) => s.begin(point),
        }
    }

    pub fn update(&mut self, point: Point) {
        match self {
            Shape::Line(s) => s.update(point),
            Shape::Rectangle(s) => s.update(point),
            Shape::Ellipse(s) => s.update(point),
            Shape::Text(s) => s.update(point),
            Shape::Curve(s) => s.update(point),
            Shape::Polygon(s) => s.update(point),
            Shape::RoundedRect(s) => s.update(point),
        }
    }

    pub fn finish(&mut self, point: Point) {
        match self {
            Shape::Line(s) => s.finish(point),
            Shape::Rectangle(s) => s.finish(point),
            Shape::Ellipse(s) => s.finish(point),
            Shape::Text(s) => s.finish(point),
            Shape::Curve(s) => s.finish(point),
            Shape::Polygon(s) => s.finish(point),
            Shape::RoundedRect(s) => s.finish(point),
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Shape::Line(s) => s.bounds(),
            Shape::Rectangle(s) => s.bounds(),
            Shape::Ellipse(s) => s.bounds(),
            Shape::Text(s) => s.bounds(),
            Shape::Curve(s) => s.bounds(),
            Shape::Polygon(s) => s.bounds(),
            Shape::RoundedRect(s) => s.bounds(),
        }
    }

    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        match self {
            Shape::Line(s) => s.hit_test(point, tolerance),
            Shape::Rectangle(s) => s.hit_test(point, tolerance),
            Shape::Ellipse(s) => s.hit_test(point, tolerance),
            Shape::Text(s) => s.hit_test(point, tolerance),
            Shape::Curve(s) => s.hit_test(point, tolerance),
            Shape::Polygon(s) => s.hit_test(point, tolerance),
            Shape::RoundedRect(s) => s.hit_test(point, tolerance),
        }
    }

    pub fn to_path(&self) -> BezPath {
        match self {
            Shape::Line(s) => s.to_path(),
            Shape::Rectangle(s) => s.to_path(),
            Shape::Ellipse(s) => s.to_path(),
            Shape::Text(s) => s.to_path(),
            Shape::Curve(s) => s.to_path(),
            Shape::Polygon(s) => s.to_path(),
            Shape::RoundedRect(s) => s.to_path(),
        }
    }

    pub fn transform(&mut self, affine: Affine) {
        match self {
            Shape::Line(s) => s.transform(affine),
            Shape::Rectangle(s) => s.transform(affine),
            Shape::Ellipse(s) => s.transform(affine),
            Shape::Text(s) => s.transform(affine),
            Shape::Curve(s) => s.transform(affine),
            Shape::Polygon(s) => s.transform(affine),
            Shape::RoundedRect(s) => s.transform(affine),
        }
    }
}
