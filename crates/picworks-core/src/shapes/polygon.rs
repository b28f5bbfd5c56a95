//! Polygon shape.

use super::{point_to_polyline_dist, points_bounds, ShapeTrait};
use kurbo::{Affine, BezPath, Point, Rect, Shape as KurboShape};
use serde::{Deserialize, Serialize};

/// A closed polygon built during a single drag.
///
/// The pointer drags a pending vertex; once it is `vertex_spacing` away from
/// the last committed vertex, that position is committed and a new pending
/// vertex starts there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    /// Committed vertices.
    pub vertices: Vec<Point>,
    /// Vertex following the pointer, not yet committed.
    pub pending: Option<Point>,
    /// Minimum distance between committed vertices.
    pub vertex_spacing: f64,
}

impl Polygon {
    /// Default spacing between committed vertices.
    pub const DEFAULT_VERTEX_SPACING: f64 = 8.0;

    pub fn new(vertex_spacing: f64) -> Self {
        Self {
            vertices: Vec::new(),
            pending: None,
            vertex_spacing: vertex_spacing.max(0.0),
        }
    }

    /// Committed vertices followed by the pending one, when it adds a point.
    pub fn outline(&self) -> Vec<Point> {
        let mut points = self.vertices.clone();
        if let Some(p) = self.pending {
            if points.last() != Some(&p) {
                points.push(p);
            }
        }
        points
    }
}

impl Default for Polygon {
    fn default() -> Self {
        Self::new(Self::DEFAULT_VERTEX_SPACING)
    }
}

impl ShapeTrait for Polygon {
    fn begin(&mut self, point: Point) {
        self.vertices.clear();
        self.vertices.push(point);
        self.pending = Some(point);
    }

    fn update(&mut self, point: Point) {
        let far_enough = self
            .vertices
            .last()
            .is_none_or(|last| last.distance(point) >= self.vertex_spacing);
        if far_enough && self.vertices.last() != Some(&point) {
            self.vertices.push(point);
        }
        self.pending = Some(point);
    }

    fn finish(&mut self, point: Point) {
        self.update(point);
        if let Some(p) = self.pending.take() {
            if self.vertices.last() != Some(&p) {
                self.vertices.push(p);
            }
        }
    }

    fn bounds(&self) -> Rect {
        points_bounds(&self.outline())
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        let mut ring = self.outline();
        if ring.len() > 2 {
            if let Some(&first) = ring.first() {
                ring.push(first);
            }
        }
        point_to_polyline_dist(point, &ring) <= tolerance || self.to_path().winding(point) != 0
    }

    fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let points = self.outline();
        let Some((&first, rest)) = points.split_first() else {
            return path;
        };
        if rest.is_empty() {
            return path;
        }
        path.move_to(first);
        for p in rest {
            path.line_to(*p);
        }
        path.close_path();
        path
    }

    fn transform(&mut self, affine: Affine) {
        for p in &mut self.vertices {
            *p = affine * *p;
        }
        if let Some(p) = self.pending.as_mut() {
            *p = affine * *p;
        }
    }
}
