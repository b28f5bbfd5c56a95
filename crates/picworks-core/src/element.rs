//! Elements: shapes placed on a canvas, with their editing lifecycle.

use crate::shapes::{Shape, ShapeKind, ShapeStyle};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier for elements.
pub type ElementId = Uuid;

/// Where an element is in its editing lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditPhase {
    /// Built for the current tool, not yet on a canvas.
    Constructed,
    /// Added to a display list, waiting for `begin`.
    Registered,
    /// Between `begin` and `end`.
    Editing,
    /// Geometry frozen.
    Finalized,
}

impl fmt::Display for EditPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EditPhase::Constructed => "constructed",
            EditPhase::Registered => "registered",
            EditPhase::Editing => "editing",
            EditPhase::Finalized => "finalized",
        };
        f.write_str(name)
    }
}

/// Editing protocol misuse.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
    #[error("cannot {op} an element that is {phase}")]
    InvalidPhase { op: &'static str, phase: EditPhase },
    #[error("element is finalized")]
    Frozen,
}

/// Result type for element editing.
pub type EditResult<T> = Result<T, EditError>;

/// A shape on a canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    id: ElementId,
    shape: Shape,
    z_value: i32,
    antialiasing: bool,
    /// Pen and brush.
    pub style: ShapeStyle,
    phase: EditPhase,
}

impl Element {
    /// Wrap a freshly built shape.
    pub fn new(shape: Shape) -> Self {
        Self {
            id: Uuid::new_v4(),
            shape,
            z_value: 0,
            antialiasing: true,
            style: ShapeStyle::default(),
            phase: EditPhase::Constructed,
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Mutable access for post-edit changes such as text content.
    pub fn shape_mut(&mut self) -> &mut Shape {
        &mut self.shape
    }

    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    pub fn phase(&self) -> EditPhase {
        self.phase
    }

    pub fn z_value(&self) -> i32 {
        self.z_value
    }

    pub fn antialiasing(&self) -> bool {
        self.antialiasing
    }

    pub fn is_finalized(&self) -> bool {
        self.phase == EditPhase::Finalized
    }

    pub fn set_antialiasing(&mut self, antialiasing: bool) -> EditResult<()> {
        self.ensure_not_frozen()?;
        self.antialiasing = antialiasing;
        Ok(())
    }

    pub fn set_z_value(&mut self, z_value: i32) -> EditResult<()> {
        self.ensure_not_frozen()?;
        self.z_value = z_value;
        Ok(())
    }

    /// Record that a display list took the element.
    pub fn mark_registered(&mut self) -> EditResult<()> {
        self.expect_phase("register", &[EditPhase::Constructed])?;
        self.phase = EditPhase::Registered;
        Ok(())
    }

    /// Start editing at the press position.
    pub fn begin(&mut self, point: Point) -> EditResult<()> {
        self.expect_phase("begin", &[EditPhase::Constructed, EditPhase::Registered])?;
        self.shape.begin(point);
        self.phase = EditPhase::Editing;
        Ok(())
    }

    /// Follow the pointer.
    pub fn update(&mut self, point: Point) -> EditResult<()> {
        self.expect_phase("update", &[EditPhase::Editing])?;
        self.shape.update(point);
        Ok(())
    }

    /// Apply the release position and freeze the geometry.
    pub fn end(&mut self, point: Point) -> EditResult<()> {
        self.expect_phase("end", &[EditPhase::Editing])?;
        self.shape.finish(point);
        self.phase = EditPhase::Finalized;
        Ok(())
    }

    pub fn bounds(&self) -> Rect {
        self.shape.bounds()
    }

    /// Hit test with the stroke width folded into the tolerance.
    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        self.shape
            .hit_test(point, tolerance + self.style.stroke_width / 2.0)
    }

    fn expect_phase(&self, op: &'static str, allowed: &[EditPhase]) -> EditResult<()> {
        if allowed.contains(&self.phase) {
            Ok(())
        } else {
            Err(EditError::InvalidPhase {
                op,
                phase: self.phase,
            })
        }
    }

    fn ensure_not_frozen(&self) -> EditResult<()> {
        if self.is_finalized() {
            Err(EditError::Frozen)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::Rectangle;

    fn rect_element() -> Element {
        Element::new(Shape::Rectangle(Rectangle::default()))
    }

    #[test]
    fn test_lifecycle() {
        let mut el = rect_element();
        assert_eq!(el.phase(), EditPhase::Constructed);

        el.mark_registered().unwrap();
        assert_eq!(el.phase(), EditPhase::Registered);

        el.begin(Point::new(10.0, 10.0)).unwrap();
        assert_eq!(el.phase(), EditPhase::Editing);

        el.update(Point::new(50.0, 40.0)).unwrap();
        el.end(Point::new(50.0, 40.0)).unwrap();
        assert!(el.is_finalized());
        assert_eq!(el.bounds(), Rect::new(10.0, 10.0, 50.0, 40.0));
    }

    #[test]
    fn test_update_before_begin_rejected() {
        let mut el = rect_element();
        let err = el.update(Point::ZERO).unwrap_err();
        assert_eq!(
            err,
            EditError::InvalidPhase {
                op: "update",
                phase: EditPhase::Constructed
            }
        );
    }

    #[test]
    fn test_update_after_end_rejected() {
        let mut el = rect_element();
        el.begin(Point::ZERO).unwrap();
        el.end(Point::new(5.0, 5.0)).unwrap();

        assert!(el.update(Point::new(9.0, 9.0)).is_err());
        assert!(el.end(Point::new(9.0, 9.0)).is_err());
        assert_eq!(el.bounds(), Rect::new(0.0, 0.0, 5.0, 5.0));
    }

    #[test]
    fn test_hints_frozen_after_end() {
        let mut el = rect_element();
        el.set_z_value(3).unwrap();
        el.set_antialiasing(false).unwrap();
        el.begin(Point::ZERO).unwrap();
        el.set_z_value(4).unwrap();
        el.end(Point::ZERO).unwrap();

        assert_eq!(el.set_z_value(5), Err(EditError::Frozen));
        assert_eq!(el.set_antialiasing(true), Err(EditError::Frozen));
        assert_eq!(el.z_value(), 4);
        assert!(!el.antialiasing());
    }

    #[test]
    fn test_register_twice_rejected() {
        let mut el = rect_element();
        el.mark_registered().unwrap();
        assert!(el.mark_registered().is_err());
    }

    #[test]
    fn test_error_message() {
        let err = EditError::InvalidPhase {
            op: "end",
            phase: EditPhase::Finalized,
        };
        assert_eq!(err.to_string(), "cannot end an element that is finalized");
    }
}
