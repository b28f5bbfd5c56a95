//! Text shape.

use super::ShapeTrait;
use kurbo::{Affine, BezPath, Point, Rect, Shape as KurboShape};
use serde::{Deserialize, Serialize};

/// A text frame. Pressing places the top-left corner; dragging sizes the frame.
///
/// The canvas never fills in content; the host's text editor does that
/// through [`Text::set_content`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    /// Frame corner fixed at the press position.
    pub anchor: Point,
    /// Frame corner following the pointer.
    pub corner: Point,
    /// The text content.
    pub content: String,
    /// Font size in pixels.
    pub font_size: f64,
}

impl Default for Text {
    fn default() -> Self {
        Self {
            anchor: Point::ZERO,
            corner: Point::ZERO,
            content: String::new(),
            font_size: Self::DEFAULT_FONT_SIZE,
        }
    }
}

impl Text {
    /// Default font size.
    pub const DEFAULT_FONT_SIZE: f64 = 20.0;

    /// Set the text content.
    pub fn set_content(&mut self, content: String) {
        self.content = content;
    }

    /// Get the text content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Whether the user dragged out an explicit frame.
    pub fn has_frame(&self) -> bool {
        self.anchor != self.corner
    }

    // Rough estimate; real metrics belong to the renderer.
    fn approximate_size(&self) -> (f64, f64) {
        let max_line_len = self
            .content
            .lines()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        let line_count = self.content.lines().count().max(1);
        (
            max_line_len as f64 * self.font_size * 0.55,
            line_count as f64 * self.font_size * 1.2,
        )
    }
}

impl ShapeTrait for Text {
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
        if self.has_frame() {
            return Rect::from_points(self.anchor, self.corner);
        }
        let (width, height) = self.approximate_size();
        Rect::from_origin_size(self.anchor, (width, height))
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        self.bounds().inflate(tolerance, tolerance).contains(point)
    }

    fn to_path(&self) -> BezPath {
        // Glyphs are the renderer's business; the path is the frame.
        self.bounds().to_path(0.1)
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
    fn test_default_is_empty() {
        let text = Text::default();
        assert!(text.content().is_empty());
        assert!((text.font_size - Text::DEFAULT_FONT_SIZE).abs() < f64::EPSILON);
    }

    #[test]
    fn test_drag_defines_frame() {
        let mut text = Text::default();
        text.begin(Point::new(10.0, 10.0));
        assert!(!text.has_frame());

        text.update(Point::new(110.0, 40.0));
        assert!(text.has_frame());
        assert_eq!(text.bounds(), Rect::new(10.0, 10.0, 110.0, 40.0));
    }

    #[test]
    fn test_click_uses_approximate_bounds() {
        let mut text = Text::default();
        text.begin(Point::new(0.0, 0.0));
        text.finish(Point::new(0.0, 0.0));
        text.set_content("Hello".to_string());

        let bounds = text.bounds();
        assert!(bounds.width() > 0.0);
        assert!((bounds.height() - 24.0).abs() < 1e-9);
    }
}
