//! PicWorks Core Library
//!
//! Toolkit-agnostic drawing core: tool dispatch, shape editing and the
//! project canvas that ties them to pointer input.

pub mod canvas;
pub mod config;
pub mod element;
pub mod grid;
pub mod input;
pub mod project;
pub mod shapes;
pub mod tools;

pub use canvas::{Canvas, CanvasEvent, DisplayList};
pub use config::{CanvasConfig, ConfigError, ConfigResult};
pub use element::{EditError, EditPhase, EditResult, Element, ElementId};
pub use grid::{GridLine, GridTile, LineStroke};
pub use input::{MouseButton, PointerEvent};
pub use project::{Background, Project, ProjectError, ProjectResult};
pub use shapes::{SerializableColor, Shape, ShapeKind, ShapeStyle, ShapeTrait};
pub use tools::ToolKind;
