//! Project model as seen by a canvas.
//!
//! The host owns loading and saving; a canvas only reads the geometry,
//! background and unit size from here.

use crate::shapes::SerializableColor;
use kurbo::Rect;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Project validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProjectError {
    #[error("Invalid project size: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
    #[error("Invalid unit size: {0}")]
    InvalidUnitSize(u32),
}

/// Result type for project operations.
pub type ProjectResult<T> = Result<T, ProjectError>;

/// What sits behind every shape on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Background {
    /// A freshly created project filled with a color.
    Color(SerializableColor),
    /// An opened image; its pixels stay with the host.
    Image { width: u32, height: u32 },
}

/// An open project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Project name.
    pub name: String,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Background fill or image.
    pub background: Background,
    /// Length unit (a DPI-like value) used to size the alignment grid.
    pub unit_size: u32,
}

impl Project {
    /// Create a new project, rejecting zero-sized geometry.
    pub fn new(
        name: impl Into<String>,
        width: u32,
        height: u32,
        background: Background,
        unit_size: u32,
    ) -> ProjectResult<Self> {
        let project = Self {
            name: name.into(),
            width,
            height,
            background,
            unit_size,
        };
        project.validate()?;
        Ok(project)
    }

    /// Create a new project with a solid background color.
    pub fn with_color(
        name: impl Into<String>,
        width: u32,
        height: u32,
        color: SerializableColor,
        unit_size: u32,
    ) -> ProjectResult<Self> {
        Self::new(name, width, height, Background::Color(color), unit_size)
    }

    /// Check the invariants `new` enforces; useful for deserialized values.
    pub fn validate(&self) -> ProjectResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ProjectError::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }
        if self.unit_size == 0 {
            return Err(ProjectError::InvalidUnitSize(self.unit_size));
        }
        Ok(())
    }

    /// The scene rectangle, `(0, 0)` to `(width, height)`.
    pub fn scene_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width as f64, self.height as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_project() {
        let project =
            Project::with_color("Untitled", 640, 480, SerializableColor::white(), 72).unwrap();
        assert_eq!(project.scene_rect(), Rect::new(0.0, 0.0, 640.0, 480.0));
        assert_eq!(project.background, Background::Color(SerializableColor::white()));
    }

    #[test]
    fn test_zero_size_rejected() {
        let result = Project::with_color("Empty", 0, 480, SerializableColor::white(), 72);
        assert_eq!(result, Err(ProjectError::InvalidSize { width: 0, height: 480 }));
    }

    #[test]
    fn test_zero_unit_rejected() {
        let background = Background::Image {
            width: 100,
            height: 100,
        };
        let result = Project::new("Photo", 100, 100, background, 0);
        assert_eq!(result, Err(ProjectError::InvalidUnitSize(0)));
    }

    #[test]
    fn test_validate_deserialized() {
        let json = r#"{
            "name": "Broken",
            "width": 10,
            "height": 0,
            "background": { "Color": { "r": 0, "g": 0, "b": 0, "a": 255 } },
            "unit_size": 20
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert!(project.validate().is_err());
    }
}
