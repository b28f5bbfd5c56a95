//! Ellipse shape.

use super::ShapeTrait;
use kurbo::{Affine, BezPath, Ellipse as KurboEllipse, Point, Rect, Shape as KurboShape};
use serde::{Deserialize, Serialize};

/// An ellipse inscribed in the box spanned by the press position and the pointer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    /// Bounding box corner fixed at the press position.
    pub anchor: Point,
    /// Bounding box corner following the pointer.
    pub corner: Point,
}

impl Ellipse {
    /// Create an ellipse from a bounding rectangle.
    pub fn from_rect(rect: Rect) -> Self {
        Self {
            anchor: Point::new(rect.x0, rect.y0),
            corner: Point::new(rect.x1, rect.y1),
        }
    }

    pub fn center(&self) -> Point {
        self.anchor.midpoint(self.corner)
    }

    /// Horizontal radius.
    pub fn radius_x(&self) -> f64 {
        (self.corner.x - self.anchor.x).abs() / 2.0
    }

    /// Vertical radius.
    pub fn radius_y(&self) -> f64 {
        (self.corner.y - self.anchor.y).abs() / 2.0
    }

    /// Get as a kurbo Ellipse.
    pub fn as_kurbo(&self) -> KurboEllipse {
        KurboEllipse::new(self.center(), (self.radius_x(), self.radius_y()), 0.0)
    }
}

impl ShapeTrait for Ellipse {
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
        Rect::from_points(self.anchor, self.corner)
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        let rx = self.radius_x() + tolerance;
        let ry = self.radius_y() + tolerance;
        if rx < f64::EPSILON || ry < f64::EPSILON {
            return false;
        }
        let center = self.center();
        let dx = (point.x - center.x) / rx;
        let dy = (point.y - center.y) / ry;
        dx * dx + dy * dy <= 1.0
    }

    fn to_path(&self) -> BezPath {
        self.as_kurbo().to_path(0.1)
    }

    fn transform(&mut self, affine: Affine) {
        self.anchor = affine * self.anchor;
        self.corner = affine * self.corner;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_defines_bounding_box() {
        let mut ellipse = Ellipse::default();
        ellipse.begin(Point::new(20.0, 30.0));
        ellipse.update(Point::new(80.0, 70.0));

        assert_eq!(ellipse.center(), Point::new(50.0, 50.0));
        assert!((ellipse.radius_x() - 30.0).abs() < f64::EPSILON);
        assert!((ellipse.radius_y() - 20.0).abs() < f64::EPSILON);
        assert_eq!(ellipse.bounds(), Rect::new(20.0, 30.0, 80.0, 70.0));
    }

    #[test]
    fn test_hit_test_center() {
        let ellipse = Ellipse::from_rect(Rect::new(20.0, 30.0, 80.0, 70.0));
        assert!(ellipse.hit_test(Point::new(50.0, 50.0), 0.0));
    }

    #[test]
    fn test_hit_test_edge() {
        let circle = Ellipse::from_rect(Rect::new(-10.0, -10.0, 10.0, 10.0));
        assert!(circle.hit_test(Point::new(10.0, 0.0), 0.0));
        assert!(!circle.hit_test(Point::new(15.0, 0.0), 0.0));
        assert!(circle.hit_test(Point::new(15.0, 0.0), 6.0));
    }

    #[test]
    fn test_zero_size_never_hits() {
        let mut ellipse = Ellipse::default();
        ellipse.begin(Point::new(5.0, 5.0));
        assert!(!ellipse.hit_test(Point::new(5.0, 5.0), 0.0));
    }
}
