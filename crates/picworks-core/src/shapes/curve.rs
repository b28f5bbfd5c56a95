//! Freehand curve shape.

use super::{point_to_polyline_dist, points_bounds, ShapeTrait};
use kurbo::{Affine, BezPath, Point, Rect};
use serde::{Deserialize, Serialize};

/// A freehand curve through every distinct pointer position of a drag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    /// Points in the curve.
    pub points: Vec<Point>,
}

impl Curve {
    /// Create from existing points.
    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Get the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the curve is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    fn push_distinct(&mut self, point: Point) {
        if self.points.last() != Some(&point) {
            self.points.push(point);
        }
    }
}

impl ShapeTrait for Curve {
    fn begin(&mut self, point: Point) {
        self.points.clear();
        self.points.push(point);
    }

    fn update(&mut self, point: Point) {
        self.push_distinct(point);
    }

    fn finish(&mut self, point: Point) {
        self.push_distinct(point);
    }

    fn bounds(&self) -> Rect {
        points_bounds(&self.points)
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        point_to_polyline_dist(point, &self.points) <= tolerance
    }

    fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let points = &self.points;
        if points.len() < 2 {
            return path;
        }

        path.move_to(points[0]);

        // Catmull-Rom spline converted to cubic bezier
        let tension = 0.5;
        for i in 0..points.len() - 1 {
            let p0 = points[if i == 0 { 0 } else { i - 1 }];
            let p1 = points[i];
            let p2 = points[i + 1];
            let p3 = points[(i + 2).min(points.len() - 1)];

            let t1x = (p2.x - p0.x) * tension;
            let t1y = (p2.y - p0.y) * tension;
            let t2x = (p3.x - p1.x) * tension;
            let t2y = (p3.y - p1.y) * tension;

            let cp1 = Point::new(p1.x + t1x / 3.0, p1.y + t1y / 3.0);
            let cp2 = Point::new(p2.x - t2x / 3.0, p2.y - t2y / 3.0);

            path.curve_to(cp1, cp2, p2);
        }
        path
    }

    fn transform(&mut self, affine: Affine) {
        for point in &mut self.points {
            *point = affine * *point;
        }
    }
}
