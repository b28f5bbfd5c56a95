//! Rounded rectangle shape.

use super::ShapeTrait;
use kurbo::{Affine, BezPath, Point, Rect, RoundedRect as KurboRoundedRect, Shape as KurboShape};
use serde::{Deserialize, Serialize};

/// A rectangle with rounded corners, dragged like [`Rectangle`](super::Rectangle).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundedRect {
    /// Corner fixed at the press position.
    pub anchor: Point,
    /// Corner following the pointer.
    pub corner: Point,
    /// Requested corner radius.
    pub corner_radius: f64,
}

impl RoundedRect {
    /// Default corner radius in scene units.
    pub const DEFAULT_RADIUS: f64 = 10.0;

    pub fn new(corner_radius: f64) -> Self {
        Self {
            anchor: Point::ZERO,
            corner: Point::ZERO,
            corner_radius: corner_radius.max(0.0),
        }
    }

    /// Get the normalized rectangle as a kurbo Rect.
    pub fn as_rect(&self) -> Rect {
        Rect::from_points(self.anchor, self.corner)
    }

    /// Radius actually drawn: never more than half the shorter side.
    pub fn effective_radius(&self) -> f64 {
        let rect = self.as_rect();
        self.corner_radius
            .min(rect.width() / 2.0)
            .min(rect.height() / 2.0)
    }

    /// Get as a kurbo RoundedRect.
    pub fn as_kurbo(&self) -> KurboRoundedRect {
        KurboRoundedRect::from_rect(self.as_rect(), self.effective_radius())
    }
}

impl Default for RoundedRect {
    fn default() -> Self {
        Self::new(Self::DEFAULT_RADIUS)
    }
}

impl ShapeTrait for RoundedRect {
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
        self.as_kurbo().to_path(0.1)
    }

    fn transform(&mut self, affine: Affine) {
        self.anchor = affine * self.anchor;
        self.corner = affine * self.corner;
    }
}
