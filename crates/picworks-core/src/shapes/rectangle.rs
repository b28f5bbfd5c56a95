//! Rectangle shape.

use super::ShapeTrait;
use kurbo::{Affine, BezPath, Point, Rect, Shape as KurboShape};
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle spanned by the press position and the pointer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Corner fixed at the press position.
    pub anchor: Point,
    /// Corner following the pointer.
    pub corner: Point,
}

impl Rectangle {
    /// Create a rectangle from two corner points.
    pub fn from_corners(p1: Point, p2: Point) -> Self {
        Self {
            anchor: p1,
            corner: p2,
        }
    }

    /// Get the normalized rectangle as a kurbo Rect.
    pub fn as_rect(&self) -> Rect {
        Rect::from_points(self.anchor, self.corner)
    }

    /// Top-left corner of the normalized rectangle.
    pub fn position(&self) -> Point {
        self.as_rect().origin()
    }

    pub fn width(&self) -> f64 {
        self.as_rect().width()
    }

    pub fn height(&self) -> f64 {
        self.as_rect().height()
    }
}

impl ShapeTrait for Rectangle {
    fn begin(&mut self, point: Point) {
        self.anchor = point;
        self.corner = point;
    }

    fn update(&mut self, point: Point) {
        self.corner = point;
    }

    fn finish(&mut self, point: Point) {
        self.corner = point;
    }

    fn bounds(&self) -> Rect {
        self.as_rect()
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        self.as_rect().inflate(tolerance, tolerance).contains(point)
    }

    fn to_path(&self) -> BezPath {
        self.as_rect().to_path(0.1)
    }

    fn transform(&mut self, affine: Affine) {
        self.anchor = affine * self.anchor;
        self.corner = affine * self.corner;
    }
}
