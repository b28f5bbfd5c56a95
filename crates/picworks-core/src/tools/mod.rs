//! Drawing tool selection.

use serde::{Deserialize, Serialize};

/// Action identifier for the text tool.
pub const ACTION_DRAW_TEXT: &str = "picworks.action.draw.text";
/// Action identifier for the freehand curve tool.
pub const ACTION_DRAW_CURVE: &str = "picworks.action.draw.curve";
/// Action identifier for the ellipse tool.
pub const ACTION_DRAW_ELLIPSE: &str = "picworks.action.draw.ellipse";
/// Action identifier for the line tool.
pub const ACTION_DRAW_LINE: &str = "picworks.action.draw.line";
/// Action identifier for the polygon tool.
pub const ACTION_DRAW_POLYGON: &str = "picworks.action.draw.polygon";
/// Action identifier for the rectangle tool.
pub const ACTION_DRAW_RECT: &str = "picworks.action.draw.rect";
/// Action identifier for the rounded rectangle tool.
pub const ACTION_DRAW_ROUND_RECT: &str = "picworks.action.draw.round_rect";

/// Available tools.
///
/// The host's action subsystem picks one of these; the canvas only reads it
/// when a press needs a new shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ToolKind {
    /// No drawing tool; presses fall through to default scene interaction.
    #[default]
    None,
    Line,
    Rectangle,
    Ellipse,
    Text,
    Curve,
    Polygon,
    RoundedRect,
}

impl ToolKind {
    /// Resolve a host action identifier.
    ///
    /// Identifiers that name no drawing tool resolve to [`ToolKind::None`].
    pub fn from_action_id(action_id: &str) -> Self {
        match action_id {
            ACTION_DRAW_TEXT => ToolKind::Text,
            ACTION_DRAW_CURVE => ToolKind::Curve,
            ACTION_DRAW_ELLIPSE => ToolKind::Ellipse,
            ACTION_DRAW_LINE => ToolKind::Line,
            ACTION_DRAW_POLYGON => ToolKind::Polygon,
            ACTION_DRAW_RECT => ToolKind::Rectangle,
            ACTION_DRAW_ROUND_RECT => ToolKind::RoundedRect,
            _ => ToolKind::None,
        }
    }

    /// The host action identifier for this tool, if it has one.
    pub fn action_id(self) -> Option<&'static str> {
        match self {
            ToolKind::None => None,
            ToolKind::Line => Some(ACTION_DRAW_LINE),
            ToolKind::Rectangle => Some(ACTION_DRAW_RECT),
            ToolKind::Ellipse => Some(ACTION_DRAW_ELLIPSE),
            ToolKind::Text => Some(ACTION_DRAW_TEXT),
            ToolKind::Curve => Some(ACTION_DRAW_CURVE),
            ToolKind::Polygon => Some(ACTION_DRAW_POLYGON),
            ToolKind::RoundedRect => Some(ACTION_DRAW_ROUND_RECT),
        }
    }

    /// Whether a press with this tool produces a shape.
    pub fn creates_shape(self) -> bool {
        self != ToolKind::None
    }

    /// Get all tools.
    pub fn all() -> &'static [ToolKind] {
        &[
            ToolKind::None,
            ToolKind::Line,
            ToolKind::Rectangle,
            ToolKind::Ellipse,
            ToolKind::Text,
            ToolKind::Curve,
            ToolKind::Polygon,
            ToolKind::RoundedRect,
        ]
    }

    /// Get display name for UI.
    pub fn display_name(self) -> &'static str {
        match self {
            ToolKind::None => "None",
            ToolKind::Line => "Line",
            ToolKind::Rectangle => "Rectangle",
            ToolKind::Ellipse => "Ellipse",
            ToolKind::Text => "Text",
            ToolKind::Curve => "Curve",
            ToolKind::Polygon => "Polygon",
            ToolKind::RoundedRect => "Rounded Rectangle",
        }
    }
}
